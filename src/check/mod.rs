//! Provides bounded exhaustive exploration of the model.
//!
//! Instead of sampling draws, every step branches on all four
//! combinations of the two departure draws.

mod checker;
mod config;
mod control;
mod error;
mod log;
mod trace;

pub use checker::StateChecker;
pub use config::{Config as CheckConfig, ConfigBuilder as CheckConfigBuilder};
pub use control::InvariantFn;
pub use error::{CheckError, InvariantViolation};
pub use log::CheckLog;
pub use trace::{Branch, Trace};

////////////////////////////////////////////////////////////////////////////////
