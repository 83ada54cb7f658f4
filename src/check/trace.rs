use std::fmt::Display;

use crate::{
    flip::ScriptedFlip,
    state::State,
    step::{step_with, StepConfig},
};

////////////////////////////////////////////////////////////////////////////////

/// Outcome of both departure draws in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Branch {
    pub to_wellesley: bool,
    pub to_olin: bool,
}

impl Branch {
    pub const ALL: [Branch; 4] = [
        Branch::new(false, false),
        Branch::new(true, false),
        Branch::new(false, true),
        Branch::new(true, true),
    ];

    pub const fn new(to_wellesley: bool, to_olin: bool) -> Self {
        Self {
            to_wellesley,
            to_olin,
        }
    }

    /// Applies the step with draws fixed to this branch.
    pub fn apply(&self, state: &mut State) {
        let mut flip = ScriptedFlip::new([self.to_wellesley, self.to_olin]);
        step_with(state, &StepConfig::idle(), &mut flip);
    }
}

impl Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mark = |b: bool| if b { "+" } else { "-" };
        write!(
            f,
            "olin->wellesley {}  wellesley->olin {}",
            mark(self.to_wellesley),
            mark(self.to_olin)
        )
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Sequence of branches taken from the initial state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    branches: Vec<Branch>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    pub fn with_branch(&self, branch: Branch) -> Self {
        let mut trace = self.clone();
        trace.add_branch(branch);
        trace
    }

    pub fn depth(&self) -> usize {
        self.branches.len()
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Replays the trace starting at `initial`.
    pub fn replay(&self, initial: State) -> State {
        let mut state = initial;
        self.branches.iter().for_each(|b| b.apply(&mut state));
        state
    }
}

impl Display for Trace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, b) in self.branches.iter().enumerate() {
            writeln!(f, "{:>4}: {}", i, b)?;
        }
        Ok(())
    }
}
