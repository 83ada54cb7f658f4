mod check;
mod error;
mod flip;
mod sim;
mod state;
mod step;
mod util;

////////////////////////////////////////////////////////////////////////////////

pub use state::{bike_to_olin, bike_to_wellesley, MoveOutcome, State, Station};

pub use step::{step, step_with, StepConfig, StepOutcome};

pub use flip::{Flip, RandomFlip, ScriptedFlip};

pub use error::{Error, Result};

pub use sim::{
    config::{Config as SimulationConfig, ConfigBuilder as SimulationConfigBuilder},
    log::{BikeMoved, Log, LogEntry, StationEmpty},
    run_simulation, Simulation,
};

pub use check::{
    Branch, CheckConfig, CheckConfigBuilder, CheckError, CheckLog, InvariantFn,
    InvariantViolation, StateChecker, Trace,
};
