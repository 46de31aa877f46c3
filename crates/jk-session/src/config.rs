//! Configuration for a match session.

/// Configuration for a match session.
///
/// Round count and win probability are fixed constants of the game; the
/// only knob is the RNG seed.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible computer hands and verdict picks.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
