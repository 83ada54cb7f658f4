//! Bernoulli draws deciding whether a bike leaves a station.

use std::collections::VecDeque;

use rand::{rngs::SmallRng, Rng, SeedableRng};

////////////////////////////////////////////////////////////////////////////////

/// Source of Bernoulli trials.
pub trait Flip {
    /// Returns `true` with probability `p`.
    fn flip(&mut self, p: f64) -> bool;
}

impl<F> Flip for F
where
    F: FnMut(f64) -> bool,
{
    fn flip(&mut self, p: f64) -> bool {
        self(p)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Seeded pseudo-random draws. Same seed gives the same sequence.
pub struct RandomFlip {
    rng: SmallRng,
}

impl RandomFlip {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Flip for RandomFlip {
    fn flip(&mut self, p: f64) -> bool {
        self.rng.random_bool(p)
    }
}

////////////////////////////////////////////////////////////////////////////////

/// Replays a fixed sequence of outcomes, ignoring the probability.
///
/// Panics once the script runs out.
#[derive(Clone, Debug, Default)]
pub struct ScriptedFlip {
    script: VecDeque<bool>,
}

impl ScriptedFlip {
    pub fn new(script: impl IntoIterator<Item = bool>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Flip for ScriptedFlip {
    fn flip(&mut self, _p: f64) -> bool {
        self.script.pop_front().expect("flip script exhausted")
    }
}

////////////////////////////////////////////////////////////////////////////////
