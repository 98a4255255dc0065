//! The iteration controller: session setup, stepping, and revert.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::algorithm::{assign_clusters, mean_centroids, sample_seed_centroids};
use crate::color::distinct_colors;
use crate::config::EngineConfig;
use crate::distance::max_centroid_shift;
use crate::error::EngineError;
use crate::point::{Centroid, ClusterState};
use crate::store::ClusterStore;

/// What a single successful step produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepOutcome {
    /// The iteration count after this step (the first step reports 1).
    pub iteration: usize,
    /// Whether this step detected convergence.
    pub converged: bool,
    /// The largest per-axis centroid movement this step, in coordinate
    /// units.
    pub max_shift: f64,
}

/// Drives a [`ClusterStore`] through explicit, single-iteration updates.
///
/// The controller owns the session RNG, seeded once from the configured
/// seed, so a given controller produces the same sequence of seed centroids
/// and colors across re-initializations.
#[derive(Debug, Clone)]
pub struct IterationController {
    config: EngineConfig,
    rng: ChaCha8Rng,
}

impl IterationController {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(config: EngineConfig) -> Self {
        let rng = ChaCha8Rng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    /// The configuration this controller was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start (or restart) a clustering session over the store's current
    /// points.
    ///
    /// Picks `k` distinct points as seed centroids, draws `k` distinct
    /// cluster colors, clears every point's label, and zeroes the iteration
    /// counter and undo history. The points themselves are kept as-is.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] if `k` is zero or exceeds
    /// the number of points; the store is left untouched in that case.
    pub fn initialize(&mut self, store: &mut ClusterStore, k: usize) -> Result<(), EngineError> {
        Self::validate(k, store.points().len())?;
        let seeds = sample_seed_centroids(store.points(), k, &mut self.rng);
        self.install(store, seeds);
        Ok(())
    }

    /// Start a session with caller-chosen seed centroids instead of sampled
    /// ones. Everything else matches [`initialize`](Self::initialize).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidParameter`] under the same conditions
    /// as [`initialize`](Self::initialize), with `k` taken as `seeds.len()`.
    pub fn initialize_with(
        &mut self,
        store: &mut ClusterStore,
        seeds: Vec<Centroid>,
    ) -> Result<(), EngineError> {
        Self::validate(seeds.len(), store.points().len())?;
        self.install(store, seeds);
        Ok(())
    }

    /// Run exactly one assignment + update iteration.
    ///
    /// The pre-step state is pushed onto the undo history before the new
    /// state is installed. Convergence holds when every centroid moved
    /// strictly less than the configured tolerance on both axes; a cluster
    /// that received no points keeps its centroid exactly where it was.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] if no session has been initialized
    /// or if the session has already converged. The store is unchanged on
    /// error.
    pub fn step(&self, store: &mut ClusterStore) -> Result<StepOutcome, EngineError> {
        if store.centroids().is_empty() {
            return Err(EngineError::NotReady(
                "no centroids; call initialize first".into(),
            ));
        }
        if store.is_converged() {
            return Err(EngineError::NotReady("session has converged".into()));
        }

        let snapshot = store.state();

        let mut points = snapshot.points.clone();
        assign_clusters(&mut points, &snapshot.centroids);
        let centroids = mean_centroids(&points, &snapshot.centroids);
        let max_shift = max_centroid_shift(&snapshot.centroids, &centroids);
        let converged = max_shift < self.config.tolerance;

        store.record(snapshot);
        store.replace_state(ClusterState { points, centroids });
        store.advance();
        store.set_converged(converged);

        let outcome = StepOutcome {
            iteration: store.iterations(),
            converged,
            max_shift,
        };
        log::debug!(
            "iteration {} max shift {:.6} converged {}",
            outcome.iteration,
            outcome.max_shift,
            outcome.converged
        );
        Ok(outcome)
    }

    /// Undo the most recent step, restoring the exact pre-step points and
    /// centroids and decrementing the iteration counter.
    ///
    /// Reverting clears the convergence flag: the restored state predates
    /// the step that detected convergence, so stepping is allowed again.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::NotReady`] if there is no step to undo.
    pub fn revert(&self, store: &mut ClusterStore) -> Result<(), EngineError> {
        let snapshot = store
            .rollback()
            .ok_or_else(|| EngineError::NotReady("history is empty".into()))?;
        store.replace_state(snapshot);
        store.retreat();
        store.set_converged(false);
        log::debug!("reverted to iteration {}", store.iterations());
        Ok(())
    }

    fn validate(k: usize, point_count: usize) -> Result<(), EngineError> {
        if k < 1 {
            return Err(EngineError::InvalidParameter(
                "k must be greater than 0".into(),
            ));
        }
        if point_count < k {
            return Err(EngineError::InvalidParameter(format!(
                "number of points ({}) is less than k ({})",
                point_count, k
            )));
        }
        Ok(())
    }

    fn install(&mut self, store: &mut ClusterStore, centroids: Vec<Centroid>) {
        let colors = distinct_colors(centroids.len(), &mut self.rng);
        let points = store
            .points()
            .iter()
            .map(|point| {
                let mut point = point.clone();
                point.cluster = None;
                point
            })
            .collect();
        log::debug!(
            "session initialized: k = {}, {} points",
            centroids.len(),
            store.points().len()
        );
        store.install_session(ClusterState { points, centroids }, colors);
    }
}

impl Default for IterationController {
    fn default() -> Self {
        Self::new()
    }
}
