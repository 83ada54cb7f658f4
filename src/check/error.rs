use std::fmt::Display;

use crate::state::State;

use super::trace::Trace;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvariantViolation {
    pub trace: Trace,
    pub state: State,
    pub report: String,
}

impl Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Invariant violation: {}.", self.report)?;
        writeln!(f, "========= TRACE =========")?;
        write!(f, "{}", self.trace)?;
        writeln!(f, "========= STATE =========")?;
        write!(f, "{}", self.state)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    InvariantViolation(InvariantViolation),
}

impl Display for CheckError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckError::InvariantViolation(invariant_violation) => {
                writeln!(f, "{}", invariant_violation)
            }
        }
    }
}

impl std::error::Error for CheckError {}
