//! Provides driver which runs the model over many steps.

use crate::{
    error::Result,
    flip::{Flip, RandomFlip},
    state::State,
    step::{step_with, StepConfig, StepOutcome},
};

pub mod config;
pub mod log;

use self::log::{Log, LogEntry};

////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////

/// Owns the state of one run together with its source of randomness.
pub struct Simulation<F: Flip = RandomFlip> {
    state: State,
    flip: F,
    time: u64,
    log: Log,
}

impl Simulation<RandomFlip> {
    /// Allows to create simulation with specified seed.
    pub fn new(seed: u64, state: State) -> Self {
        Self::with_flip(RandomFlip::new(seed), state)
    }

    /// Creates simulation at the initial state described by `cfg`.
    pub fn from_config(cfg: &config::Config) -> Result<Self> {
        cfg.validate()?;
        Ok(Self::new(cfg.seed, cfg.initial_state()))
    }
}

impl<F: Flip> Simulation<F> {
    /// Creates simulation which draws from the provided source.
    pub fn with_flip(flip: F, state: State) -> Self {
        Self {
            state,
            flip,
            time: 0,
            log: Log::new(),
        }
    }

    /// Makes single simulation step and records what happened.
    pub fn step(&mut self, cfg: &StepConfig) -> StepOutcome {
        let outcome = step_with(&mut self.state, cfg, &mut self.flip);
        for m in outcome.iter() {
            self.log.add_entry(LogEntry::from_outcome(self.time, *m));
        }
        self.time += 1;
        outcome
    }

    /// Makes `num_steps` steps.
    pub fn run(&mut self, cfg: &StepConfig, num_steps: u64) -> State {
        for _ in 0..num_steps {
            self.step(cfg);
        }
        self.state
    }

    /// Makes steps until provided predicate is true.
    /// Returns `false` if predicate is still false after `max_steps` steps.
    pub fn step_until<P>(&mut self, mut f: P, cfg: &StepConfig, max_steps: u64) -> bool
    where
        P: FnMut(&State) -> bool,
    {
        for _ in 0..max_steps {
            if f(&self.state) {
                return true;
            }
            self.step(cfg);
        }
        f(&self.state)
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Number of steps made so far.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    /// Returns the final state, dropping the simulation.
    pub fn into_state(self) -> State {
        self.state
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Runs the whole simulation described by `cfg` and returns it.
pub fn run_simulation(cfg: &config::Config) -> Result<Simulation> {
    let step_cfg = cfg.step_config()?;
    let mut sim = Simulation::new(cfg.seed, cfg.initial_state());
    sim.run(&step_cfg, cfg.num_steps);
    Ok(sim)
}
