//! Euclidean geometry for the assignment and convergence steps.

use crate::point::{Centroid, Point};

/// Euclidean distance between a point and a centroid (`sqrt(dx² + dy²)`).
///
/// The metric is fixed; no alternative metrics are supported.
#[inline]
pub fn euclidean(point: &Point, centroid: &Centroid) -> f64 {
    let dx = point.x - centroid.x;
    let dy = point.y - centroid.y;
    (dx * dx + dy * dy).sqrt()
}

/// Index of the centroid nearest to `point`, or `None` when `centroids` is
/// empty.
///
/// Exact ties resolve to the lowest centroid index: the strict `<`
/// comparison keeps the first minimum, so repeated runs over identical
/// state reproduce the same assignment bit for bit.
pub fn nearest_centroid(point: &Point, centroids: &[Centroid]) -> Option<usize> {
    if centroids.is_empty() {
        return None;
    }

    let mut best_index = 0;
    let mut best_dist = f64::INFINITY;

    for (index, centroid) in centroids.iter().enumerate() {
        let dist = euclidean(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_index = index;
        }
    }

    Some(best_index)
}

/// Largest per-axis displacement between two centroid sequences of equal
/// length.
///
/// This is the quantity the convergence test bounds: a step converges when
/// the returned value stays strictly below the configured tolerance.
pub fn max_centroid_shift(old: &[Centroid], new: &[Centroid]) -> f64 {
    old.iter()
        .zip(new.iter())
        .map(|(a, b)| (a.x - b.x).abs().max((a.y - b.y).abs()))
        .fold(0.0, f64::max)
}
