//! Deterministic k-means clustering in RGB space
//!
//! A fixed-cap heuristic, not a converge-to-optimum solver: centroids are
//! seeded at evenly spaced sample indices (no randomness), assignment uses
//! squared Euclidean distance with ties going to the lowest centroid
//! index, and iteration stops after `max_iterations` rounds or as soon as
//! neither assignments nor centroids change. Identical input always
//! produces identical output.

use log::debug;
use palette::Srgb;

use crate::config::ClusteringConfig;

/// Result of one clustering run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clustering {
    /// Final centroid colors, integer-rounded
    pub centroids: Vec<Srgb<u8>>,
    /// Centroid index for each input sample, in sample order
    pub assignments: Vec<usize>,
    /// Member count per centroid
    pub counts: Vec<usize>,
}

impl Clustering {
    /// Total number of clustered samples
    pub fn total_samples(&self) -> usize {
        self.assignments.len()
    }
}

/// Number of clusters for a given sample count.
pub fn cluster_count(sample_count: usize, config: &ClusteringConfig) -> usize {
    (sample_count / config.samples_per_cluster).clamp(config.min_clusters, config.max_clusters)
}

/// Partition samples into dominant-color clusters.
///
/// An empty sample list yields an empty `Clustering`; callers short-circuit
/// to the fallback triple before reaching this point.
pub fn cluster(samples: &[Srgb<u8>], config: &ClusteringConfig) -> Clustering {
    if samples.is_empty() {
        return Clustering {
            centroids: Vec::new(),
            assignments: Vec::new(),
            counts: Vec::new(),
        };
    }

    let k = cluster_count(samples.len(), config);

    // Evenly spaced seeds keep the run deterministic for a given sample order
    let mut centroids: Vec<Srgb<u8>> = (0..k).map(|i| samples[i * samples.len() / k]).collect();
    let mut assignments = vec![0usize; samples.len()];

    let mut iterations = 0;
    for _ in 0..config.max_iterations {
        iterations += 1;

        let mut assignments_changed = false;
        for (sample, assignment) in samples.iter().zip(assignments.iter_mut()) {
            let nearest = nearest_centroid(*sample, &centroids);
            if nearest != *assignment {
                *assignment = nearest;
                assignments_changed = true;
            }
        }

        let mut sums = vec![[0u64; 3]; k];
        let mut counts = vec![0usize; k];
        for (sample, &assignment) in samples.iter().zip(assignments.iter()) {
            sums[assignment][0] += u64::from(sample.red);
            sums[assignment][1] += u64::from(sample.green);
            sums[assignment][2] += u64::from(sample.blue);
            counts[assignment] += 1;
        }

        let mut centroids_changed = false;
        for (i, centroid) in centroids.iter_mut().enumerate() {
            // Empty clusters keep their previous centroid
            if counts[i] == 0 {
                continue;
            }
            let mean = Srgb::new(
                rounded_mean(sums[i][0], counts[i]),
                rounded_mean(sums[i][1], counts[i]),
                rounded_mean(sums[i][2], counts[i]),
            );
            if mean != *centroid {
                *centroid = mean;
                centroids_changed = true;
            }
        }

        if !assignments_changed && !centroids_changed {
            break;
        }
    }

    let mut counts = vec![0usize; k];
    for &assignment in &assignments {
        counts[assignment] += 1;
    }

    debug!(
        "clustered {} samples into {} centroids in {} iterations",
        samples.len(),
        k,
        iterations
    );

    Clustering {
        centroids,
        assignments,
        counts,
    }
}

fn nearest_centroid(sample: Srgb<u8>, centroids: &[Srgb<u8>]) -> usize {
    let mut best = 0;
    let mut best_distance = i32::MAX;
    for (i, centroid) in centroids.iter().enumerate() {
        // Strict < keeps ties on the lowest centroid index
        let distance = squared_distance(sample, *centroid);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

fn squared_distance(a: Srgb<u8>, b: Srgb<u8>) -> i32 {
    let dr = i32::from(a.red) - i32::from(b.red);
    let dg = i32::from(a.green) - i32::from(b.green);
    let db = i32::from(a.blue) - i32::from(b.blue);
    dr * dr + dg * dg + db * db
}

fn rounded_mean(sum: u64, count: usize) -> u8 {
    (sum as f64 / count as f64).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repeated(color: Srgb<u8>, count: usize) -> Vec<Srgb<u8>> {
        vec![color; count]
    }

    #[test]
    fn test_cluster_count_clamps() {
        let config = ClusteringConfig::default();
        assert_eq!(cluster_count(1, &config), 2);
        assert_eq!(cluster_count(40, &config), 2);
        assert_eq!(cluster_count(80, &config), 4);
        assert_eq!(cluster_count(10_000, &config), 6);
    }

    #[test]
    fn test_empty_input_yields_empty_clustering() {
        let clustering = cluster(&[], &ClusteringConfig::default());
        assert!(clustering.centroids.is_empty());
        assert!(clustering.assignments.is_empty());
    }

    #[test]
    fn test_uniform_samples_collapse() {
        let samples = repeated(Srgb::new(255u8, 0, 0), 100);
        let clustering = cluster(&samples, &ClusteringConfig::default());

        // All samples land on centroid 0 by the lowest-index tie rule
        assert!(clustering.assignments.iter().all(|&a| a == 0));
        assert_eq!(clustering.counts[0], 100);
        assert_eq!(clustering.centroids[0], Srgb::new(255u8, 0, 0));
    }

    #[test]
    fn test_two_well_separated_colors() {
        let mut samples = repeated(Srgb::new(250u8, 10, 10), 50);
        samples.extend(repeated(Srgb::new(10u8, 10, 250), 50));
        let clustering = cluster(&samples, &ClusteringConfig::default());

        let red_assignment = clustering.assignments[0];
        let blue_assignment = clustering.assignments[99];
        assert_ne!(red_assignment, blue_assignment);
        assert_eq!(clustering.centroids[red_assignment], Srgb::new(250u8, 10, 10));
        assert_eq!(clustering.centroids[blue_assignment], Srgb::new(10u8, 10, 250));
    }

    #[test]
    fn test_centroid_is_rounded_mean() {
        // Two samples averaging to a .5 channel value
        let samples = vec![Srgb::new(10u8, 0, 0), Srgb::new(11u8, 0, 0)];
        let config = ClusteringConfig {
            min_clusters: 1,
            max_clusters: 1,
            ..ClusteringConfig::default()
        };
        let clustering = cluster(&samples, &config);
        assert_eq!(clustering.centroids[0].red, 11); // 10.5 rounds up
    }

    #[test]
    fn test_counts_match_assignments() {
        let mut samples = repeated(Srgb::new(200u8, 30, 30), 70);
        samples.extend(repeated(Srgb::new(30u8, 200, 30), 30));
        let clustering = cluster(&samples, &ClusteringConfig::default());

        assert_eq!(clustering.counts.iter().sum::<usize>(), 100);
        for (i, &count) in clustering.counts.iter().enumerate() {
            let assigned = clustering.assignments.iter().filter(|&&a| a == i).count();
            assert_eq!(assigned, count);
        }
    }

    #[test]
    fn test_determinism() {
        let mut samples = Vec::new();
        // A deterministic but varied sample set
        for i in 0..200u32 {
            let v = (i * 37 % 256) as u8;
            let w = (i * 101 % 256) as u8;
            samples.push(Srgb::new(v, w, v.wrapping_add(w)));
        }

        let config = ClusteringConfig::default();
        let first = cluster(&samples, &config);
        let second = cluster(&samples, &config);
        assert_eq!(first, second);
    }
}
