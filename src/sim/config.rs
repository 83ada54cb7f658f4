use serde::{Deserialize, Serialize};

use crate::{
    error::{check_probability, Result},
    state::State,
    step::StepConfig,
};

////////////////////////////////////////////////////////////////////////////////

/// Parameters of a single simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Bikes initially docked at Olin.
    pub olin: u64,
    /// Bikes initially docked at Wellesley.
    pub wellesley: u64,
    /// Probability of a departure from Olin per step.
    pub p1: f64,
    /// Probability of a departure from Wellesley per step.
    pub p2: f64,
    pub seed: u64,
    pub num_steps: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            olin: 10,
            wellesley: 2,
            p1: 0.5,
            p2: 0.4,
            seed: 0,
            num_steps: 60,
        }
    }
}

impl Config {
    /// Parses config from json. Missing fields take their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        check_probability("p1", self.p1)?;
        check_probability("p2", self.p2)?;
        Ok(())
    }

    pub fn initial_state(&self) -> State {
        State::new(self.olin, self.wellesley)
    }

    pub fn step_config(&self) -> Result<StepConfig> {
        StepConfig::new(self.p1, self.p2)
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct ConfigBuilder {
    cfg: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn olin(mut self, olin: u64) -> Self {
        self.cfg.olin = olin;
        self
    }

    pub fn wellesley(mut self, wellesley: u64) -> Self {
        self.cfg.wellesley = wellesley;
        self
    }

    pub fn p1(mut self, p1: f64) -> Self {
        self.cfg.p1 = p1;
        self
    }

    pub fn p2(mut self, p2: f64) -> Self {
        self.cfg.p2 = p2;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.cfg.seed = seed;
        self
    }

    pub fn num_steps(mut self, num_steps: u64) -> Self {
        self.cfg.num_steps = num_steps;
        self
    }

    pub fn build(self) -> Result<Config> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
