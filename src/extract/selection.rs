//! Primary-cluster selection
//!
//! Scores every cluster by `members * (1 + saturation * weight)` so that
//! size and vividness both count, then applies a desaturation guard: when
//! the winner is effectively gray, a clearly more saturated cluster that
//! still holds a meaningful share of the samples takes its place. This is
//! what keeps a large neutral background from beating a smaller but
//! genuinely branded color.

use log::debug;
use palette::Srgb;

use crate::color::space::{rgb_to_hsl, Hsl};
use crate::config::SelectionConfig;
use crate::extract::kmeans::Clustering;

/// Read-only view of one cluster after clustering has converged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cluster {
    /// Representative color of the cluster
    pub centroid: Srgb<u8>,
    /// Number of samples assigned to it
    pub members: usize,
    /// Centroid converted to normalized HSL
    pub hsl: Hsl,
    /// Selection score
    pub score: f32,
}

impl Cluster {
    fn new(centroid: Srgb<u8>, members: usize, config: &SelectionConfig) -> Self {
        let hsl = rgb_to_hsl(centroid);
        let score = members as f32 * (1.0 + hsl.s * config.saturation_weight);
        Self {
            centroid,
            members,
            hsl,
            score,
        }
    }
}

/// Pick the primary cluster from a clustering result.
///
/// Returns `None` only for an empty clustering; callers handle that with
/// the fallback triple before this point.
pub fn select_primary(clustering: &Clustering, config: &SelectionConfig) -> Option<Cluster> {
    let total = clustering.total_samples();
    let mut clusters: Vec<Cluster> = clustering
        .centroids
        .iter()
        .zip(clustering.counts.iter())
        .map(|(&centroid, &members)| Cluster::new(centroid, members, config))
        .collect();

    // Stable sort keeps centroid order on equal scores, so ties resolve
    // to the lowest centroid index
    clusters.sort_by(|a, b| b.score.total_cmp(&a.score));
    let chosen = *clusters.first()?;

    if chosen.hsl.s >= config.gray_saturation {
        return Some(chosen);
    }

    // Desaturation guard: look for a meaningfully sized, clearly more
    // saturated challenger
    let min_members = total as f32 * config.min_member_share;
    let mut challenger: Option<&Cluster> = None;
    for candidate in clusters.iter().filter(|c| c.members as f32 >= min_members) {
        // Strict > keeps the first of equally saturated candidates
        if challenger.map_or(true, |best| candidate.hsl.s > best.hsl.s) {
            challenger = Some(candidate);
        }
    }

    if let Some(challenger) = challenger {
        if challenger.hsl.s > chosen.hsl.s + config.saturation_gap {
            debug!(
                "gray winner (s={:.3}) displaced by saturated cluster (s={:.3}, {} members)",
                chosen.hsl.s, challenger.hsl.s, challenger.members
            );
            return Some(*challenger);
        }
    }

    Some(chosen)
}
