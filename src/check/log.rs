use std::fmt::Display;

////////////////////////////////////////////////////////////////////////////////

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckLog {
    pub visited_total: usize,
    pub visited_unique: usize,
    pub max_depth_reached: usize,
}

impl CheckLog {
    pub fn new() -> Self {
        Default::default()
    }
}

impl Display for CheckLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unique visited: {}, total visited: {}, depth: {}",
            self.visited_unique, self.visited_total, self.max_depth_reached
        )
    }
}
