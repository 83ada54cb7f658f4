use std::fmt::Display;

use super::{State, Station};

////////////////////////////////////////////////////////////////////////////////

/// Result of a single departure attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveOutcome {
    /// A bike left `from` and docked at `to`.
    Moved { from: Station, to: Station },
    /// `station` had no bike to send.
    StockOut { station: Station },
}

impl MoveOutcome {
    pub fn is_stock_out(&self) -> bool {
        matches!(self, MoveOutcome::StockOut { .. })
    }
}

impl Display for MoveOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveOutcome::Moved { from, to } => write!(f, "{} -> {}", from, to),
            MoveOutcome::StockOut { station } => write!(f, "{} empty", station),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

pub(crate) fn move_bike(state: &mut State, from: Station) -> MoveOutcome {
    if state.bikes(from) == 0 {
        *state.empty_mut(from) += 1;
        return MoveOutcome::StockOut { station: from };
    }
    let to = from.other();
    *state.bikes_mut(from) -= 1;
    *state.bikes_mut(to) += 1;
    MoveOutcome::Moved { from, to }
}

////////////////////////////////////////////////////////////////////////////////

/// Moves one bike from Olin to Wellesley.
///
/// If Olin is empty, records a stock-out at Olin and leaves the counts
/// untouched.
pub fn bike_to_wellesley(state: &mut State) {
    move_bike(state, Station::Olin);
}

/// Moves one bike from Wellesley to Olin.
///
/// If Wellesley is empty, records a stock-out at Wellesley and leaves the
/// counts untouched.
pub fn bike_to_olin(state: &mut State) {
    move_bike(state, Station::Wellesley);
}
