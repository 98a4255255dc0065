/// Configuration for the stepmeans engine
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Convergence tolerance. A step marks the session converged when no
    /// centroid moved by this amount or more on either axis.
    pub tolerance: f64,

    /// Random seed for centroid sampling and color generation
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: 1e-3,
            seed: 0,
        }
    }
}

impl EngineConfig {
    /// Create a configuration with the default tolerance and seed
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the convergence tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}
