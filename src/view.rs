//! Serializable read model for rendering collaborators.

use serde::Serialize;

use crate::point::{Centroid, Point};
use crate::store::ClusterStore;

/// A flat, serializable snapshot of a session.
///
/// Colors are rendered as `#rrggbb` strings so the payload is directly
/// consumable by a canvas or SVG frontend without knowing the internal
/// color representation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub points: Vec<Point>,
    pub centroids: Vec<Centroid>,
    pub colors: Vec<String>,
    pub iterations: usize,
    pub converged: bool,
    pub can_revert: bool,
}

impl From<&ClusterStore> for SessionView {
    fn from(store: &ClusterStore) -> Self {
        Self {
            points: store.points().to_vec(),
            centroids: store.centroids().to_vec(),
            colors: store.colors().iter().map(|color| color.hex()).collect(),
            iterations: store.iterations(),
            converged: store.is_converged(),
            can_revert: store.can_revert(),
        }
    }
}
