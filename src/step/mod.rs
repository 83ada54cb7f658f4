//! Single time step of the two-station model.

use crate::{
    error::{check_probability, Result},
    flip::Flip,
    state::{move_bike, MoveOutcome, State, Station},
};

////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests;

////////////////////////////////////////////////////////////////////////////////

/// Specifies probabilities of departures during one step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StepConfig {
    p1: f64, // olin -> wellesley, [0...1]
    p2: f64, // wellesley -> olin, [0...1]
}

impl StepConfig {
    /// Fails with [`crate::Error::InvalidProbability`] if either
    /// probability is not in `[0, 1]`.
    pub fn new(p1: f64, p2: f64) -> Result<Self> {
        Ok(Self {
            p1: check_probability("p1", p1)?,
            p2: check_probability("p2", p2)?,
        })
    }

    /// Config in which no bike ever moves.
    pub fn idle() -> Self {
        Self { p1: 0., p2: 0. }
    }

    pub fn p1(&self) -> f64 {
        self.p1
    }

    pub fn p2(&self) -> f64 {
        self.p2
    }
}

////////////////////////////////////////////////////////////////////////////////

/// What happened in each direction during one step.
/// `None` means no departure was attempted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepOutcome {
    pub to_wellesley: Option<MoveOutcome>,
    pub to_olin: Option<MoveOutcome>,
}

impl StepOutcome {
    pub fn iter(&self) -> impl Iterator<Item = &MoveOutcome> {
        self.to_wellesley.iter().chain(self.to_olin.iter())
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Simulates one time step.
///
/// With probability `p1` a bike departs Olin for Wellesley, then,
/// independently, with probability `p2` a bike departs Wellesley for Olin.
pub fn step(state: &mut State, p1: f64, p2: f64, flip: &mut impl Flip) -> Result<()> {
    let cfg = StepConfig::new(p1, p2)?;
    step_with(state, &cfg, flip);
    Ok(())
}

/// Same as [`step`] for already validated probabilities.
/// Draws for Olin are always made before draws for Wellesley.
pub fn step_with(state: &mut State, cfg: &StepConfig, flip: &mut impl Flip) -> StepOutcome {
    let to_wellesley = flip
        .flip(cfg.p1)
        .then(|| move_bike(state, Station::Olin));
    let to_olin = flip
        .flip(cfg.p2)
        .then(|| move_bike(state, Station::Wellesley));
    StepOutcome {
        to_wellesley,
        to_olin,
    }
}
