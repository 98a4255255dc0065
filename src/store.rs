//! The owned, authoritative session state.

use crate::color::ClusterColor;
use crate::point::{Centroid, ClusterState, Point};
use crate::view::SessionView;

/// Owns the current points, centroids, colors, session flags, and the undo
/// history.
///
/// The store carries no algorithmic logic. The engine computes new states
/// and installs them through the crate-internal mutation primitives, so the
/// input and rendering collaborators can only add points, reset, or read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClusterStore {
    points: Vec<Point>,
    centroids: Vec<Centroid>,
    colors: Vec<ClusterColor>,
    iterations: usize,
    converged: bool,
    history: Vec<ClusterState>,
    name_counter: usize,
}

impl ClusterStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point with a fresh, stable name ("p1", "p2", …) and no
    /// cluster label.
    ///
    /// Coordinates are unconstrained here; range validation, if any, is the
    /// input collaborator's concern. Centroids are unaffected.
    pub fn add_point(&mut self, x: f64, y: f64) -> &Point {
        self.name_counter += 1;
        self.points
            .push(Point::new(x, y, format!("p{}", self.name_counter)));
        &self.points[self.points.len() - 1]
    }

    /// Clear all points, centroids, colors, history, counters, and flags,
    /// returning to the initial empty state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Deep copy of the current (points, centroids) pair.
    pub fn state(&self) -> ClusterState {
        ClusterState {
            points: self.points.clone(),
            centroids: self.centroids.clone(),
        }
    }

    /// Current points, in insertion order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Current centroids; index `i` is cluster label `i`.
    pub fn centroids(&self) -> &[Centroid] {
        &self.centroids
    }

    /// Per-cluster display colors (same length as the centroid sequence
    /// once a session is initialized).
    pub fn colors(&self) -> &[ClusterColor] {
        &self.colors
    }

    /// Completed iterations since the last initialization.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the last step detected convergence.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    /// Whether a revert is currently available.
    pub fn can_revert(&self) -> bool {
        !self.history.is_empty()
    }

    /// Depth of the undo stack.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Read-only snapshot for the rendering collaborator.
    pub fn view(&self) -> SessionView {
        SessionView::from(self)
    }

    /// Replace the point and centroid sequences wholesale.
    ///
    /// The swap is atomic from the caller's perspective: single-threaded
    /// exclusive access means no observer can see a partially updated pair.
    pub(crate) fn replace_state(&mut self, next: ClusterState) {
        self.points = next.points;
        self.centroids = next.centroids;
    }

    /// Initialization-time swap: install a fresh state and color set, zero
    /// the iteration counter, clear the convergence flag and the history
    /// stack. The point name counter survives, keeping names unique across
    /// re-initializations.
    pub(crate) fn install_session(&mut self, state: ClusterState, colors: Vec<ClusterColor>) {
        self.points = state.points;
        self.centroids = state.centroids;
        self.colors = colors;
        self.iterations = 0;
        self.converged = false;
        self.history.clear();
    }

    /// Push a pre-step snapshot onto the undo stack.
    pub(crate) fn record(&mut self, snapshot: ClusterState) {
        self.history.push(snapshot);
    }

    /// Pop the most recent snapshot, if any.
    pub(crate) fn rollback(&mut self) -> Option<ClusterState> {
        self.history.pop()
    }

    /// Increment the iteration counter.
    pub(crate) fn advance(&mut self) {
        self.iterations += 1;
    }

    /// Decrement the iteration counter, floored at zero.
    pub(crate) fn retreat(&mut self) {
        self.iterations = self.iterations.saturating_sub(1);
    }

    pub(crate) fn set_converged(&mut self, converged: bool) {
        self.converged = converged;
    }
}
