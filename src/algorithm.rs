//! The per-iteration pieces of Lloyd's algorithm: seeding, assignment, and
//! the mean update.
//!
//! These are pure functions over point and centroid sequences. Session
//! bookkeeping (history, flags, counters) lives in the engine.

use crate::distance::nearest_centroid;
use crate::point::{Centroid, Point};
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

/// Sample `k` distinct points uniformly without replacement and copy their
/// coordinates as seed centroids.
///
/// `choose_multiple` runs a partial Fisher–Yates shuffle over the index
/// range, so every k-subset of the points is equally likely. The caller
/// validates `k <= points.len()`.
pub fn sample_seed_centroids(points: &[Point], k: usize, rng: &mut ChaCha8Rng) -> Vec<Centroid> {
    let indices: Vec<usize> = (0..points.len()).collect();

    indices
        .choose_multiple(rng, k)
        .map(|&index| Centroid::from_point(&points[index]))
        .collect()
}

/// Assignment step: label every point with the index of its nearest
/// centroid. Exact ties go to the lowest centroid index.
pub fn assign_clusters(points: &mut [Point], centroids: &[Centroid]) {
    for point in points.iter_mut() {
        point.cluster = nearest_centroid(point, centroids);
    }
}

/// Update step: recompute every centroid as the arithmetic mean of its
/// assigned points.
///
/// A centroid with no assigned points keeps its previous coordinates
/// exactly: it is neither reinitialized nor dropped, so cluster indices
/// stay stable across the iteration.
pub fn mean_centroids(points: &[Point], previous: &[Centroid]) -> Vec<Centroid> {
    previous
        .iter()
        .enumerate()
        .map(|(index, centroid)| {
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            let mut count = 0usize;

            for point in points.iter().filter(|p| p.cluster == Some(index)) {
                sum_x += point.x;
                sum_y += point.y;
                count += 1;
            }

            if count == 0 {
                *centroid
            } else {
                Centroid::new(sum_x / count as f64, sum_y / count as f64)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn grid_points(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new(i as f64, (i * i) as f64, format!("p{}", i + 1)))
            .collect()
    }

    #[test]
    fn test_sample_seed_centroids_distinct_and_from_points() {
        let points = grid_points(10);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let seeds = sample_seed_centroids(&points, 4, &mut rng);

        assert_eq!(seeds.len(), 4);
        let coords: HashSet<(u64, u64)> = seeds
            .iter()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .collect();
        assert_eq!(coords.len(), 4, "sampled seeds should be distinct");
        for seed in &seeds {
            assert!(
                points.iter().any(|p| p.x == seed.x && p.y == seed.y),
                "every seed should copy some point's coordinates"
            );
        }
    }

    #[test]
    fn test_sample_seed_centroids_all_points_when_k_equals_n() {
        let points = grid_points(5);
        let mut rng = ChaCha8Rng::seed_from_u64(1);

        let seeds = sample_seed_centroids(&points, 5, &mut rng);

        let coords: HashSet<(u64, u64)> = seeds
            .iter()
            .map(|c| (c.x.to_bits(), c.y.to_bits()))
            .collect();
        assert_eq!(coords.len(), 5);
    }

    #[test]
    fn test_assign_clusters_labels_every_point() {
        let mut points = grid_points(6);
        let centroids = vec![Centroid::new(0.0, 0.0), Centroid::new(5.0, 25.0)];

        assign_clusters(&mut points, &centroids);

        for point in &points {
            let cluster = point.cluster.expect("every point should be labeled");
            assert!(cluster < centroids.len());
        }
    }

    #[test]
    fn test_mean_centroids_arithmetic_mean() {
        let mut points = vec![
            Point::new(0.0, 0.0, "p1"),
            Point::new(0.0, 1.0, "p2"),
            Point::new(10.0, 10.0, "p3"),
            Point::new(10.0, 11.0, "p4"),
        ];
        let centroids = vec![Centroid::new(0.0, 0.0), Centroid::new(10.0, 10.0)];
        assign_clusters(&mut points, &centroids);

        let updated = mean_centroids(&points, &centroids);

        assert_eq!(updated[0], Centroid::new(0.0, 0.5));
        assert_eq!(updated[1], Centroid::new(10.0, 10.5));
    }

    #[test]
    fn test_mean_centroids_empty_cluster_unchanged() {
        // Both points sit next to centroid 0; centroid 1 receives nothing
        // and must keep its exact coordinates.
        let mut points = vec![Point::new(0.0, 0.0, "p1"), Point::new(0.0, 2.0, "p2")];
        let centroids = vec![Centroid::new(0.0, 1.0), Centroid::new(50.0, 50.0)];
        assign_clusters(&mut points, &centroids);

        let updated = mean_centroids(&points, &centroids);

        assert_eq!(updated[0], Centroid::new(0.0, 1.0));
        assert_eq!(updated[1], Centroid::new(50.0, 50.0));
        assert_eq!(updated.len(), 2);
    }
}
