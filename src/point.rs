use serde::Serialize;

/// A labeled 2-D data point.
///
/// Names are assigned by the store ("p1", "p2", …) and stay stable for the
/// lifetime of the session. `cluster`, when set, is an index into the
/// current centroid sequence; it is written only by the assignment step and
/// cleared on initialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub name: String,
    pub cluster: Option<usize>,
}

impl Point {
    /// Create an unassigned point
    pub fn new(x: f64, y: f64, name: impl Into<String>) -> Self {
        Self {
            x,
            y,
            name: name.into(),
            cluster: None,
        }
    }
}

/// The representative (mean) position of one cluster.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    /// Create a centroid at the given coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Copy a centroid from a point's coordinates.
    ///
    /// The copy is decoupled from the source point: later point mutation
    /// never moves a centroid seeded from it.
    pub fn from_point(point: &Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
        }
    }
}

/// One full clustering state: the ordered point sequence plus the ordered
/// centroid sequence.
///
/// Centroid index `i` corresponds to cluster label `i`. The correspondence
/// is positional: the centroid sequence is never reordered during an
/// iteration. A deep copy of this pair is what the history stack stores
/// and what a revert restores.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClusterState {
    pub points: Vec<Point>,
    pub centroids: Vec<Centroid>,
}
