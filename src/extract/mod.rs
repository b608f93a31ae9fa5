//! The extraction pipeline: sampling, clustering, selection, variants
//!
//! Stages run strictly in sequence and each owns its intermediate data:
//! buffer -> samples -> clustering -> primary cluster -> variant triple.
//! The whole pipeline is constant-bounded (at most ~60x60 samples, 6
//! clusters, 12 iterations), so it is safe to run on a UI thread.

pub mod kmeans;
pub mod sampler;
pub mod selection;
pub mod variants;

pub use kmeans::Clustering;
pub use selection::Cluster;
pub use variants::SchemeVariants;
