#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: 8 }
    }
}

////////////////////////////////////////////////////////////////////////////////

#[derive(Default)]
pub struct ConfigBuilder {
    max_depth: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    pub fn build(self) -> Config {
        let default = Config::default();
        Config {
            max_depth: self.max_depth.unwrap_or(default.max_depth),
        }
    }
}
