//! Bike counts at the two stations and the moves between them.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::util::hash::hash_one;

mod transfer;

pub use transfer::{bike_to_olin, bike_to_wellesley, MoveOutcome};

pub(crate) use transfer::move_bike;

////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////

/// One of the two docking stations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Station {
    Olin,
    Wellesley,
}

impl Station {
    /// Returns the station on the other end of the route.
    pub fn other(&self) -> Self {
        match self {
            Station::Olin => Station::Wellesley,
            Station::Wellesley => Station::Olin,
        }
    }
}

impl Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Station::Olin => write!(f, "olin"),
            Station::Wellesley => write!(f, "wellesley"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Shared state of the bikeshare system.
///
/// Counts are unsigned, so a station can never hold a negative number
/// of bikes; moves only decrement a count which is known to be positive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct State {
    /// Bikes docked at Olin.
    pub olin: u64,
    /// Bikes docked at Wellesley.
    pub wellesley: u64,
    /// Departures from Olin which found the station empty.
    pub olin_empty: u64,
    /// Departures from Wellesley which found the station empty.
    pub wellesley_empty: u64,
}

impl State {
    /// Creates state with the given bike counts and zero stock-out counters.
    pub fn new(olin: u64, wellesley: u64) -> Self {
        Self {
            olin,
            wellesley,
            olin_empty: 0,
            wellesley_empty: 0,
        }
    }

    pub fn bikes(&self, station: Station) -> u64 {
        match station {
            Station::Olin => self.olin,
            Station::Wellesley => self.wellesley,
        }
    }

    pub fn empty(&self, station: Station) -> u64 {
        match station {
            Station::Olin => self.olin_empty,
            Station::Wellesley => self.wellesley_empty,
        }
    }

    /// Total number of bikes in the system.
    pub fn total(&self) -> u64 {
        self.olin + self.wellesley
    }

    pub fn hash(&self) -> u64 {
        hash_one(self)
    }

    pub(crate) fn bikes_mut(&mut self, station: Station) -> &mut u64 {
        match station {
            Station::Olin => &mut self.olin,
            Station::Wellesley => &mut self.wellesley,
        }
    }

    pub(crate) fn empty_mut(&mut self, station: Station) -> &mut u64 {
        match station {
            Station::Olin => &mut self.olin_empty,
            Station::Wellesley => &mut self.wellesley_empty,
        }
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "olin={} wellesley={} olin_empty={} wellesley_empty={}",
            self.olin, self.wellesley, self.olin_empty, self.wellesley_empty
        )
    }
}
