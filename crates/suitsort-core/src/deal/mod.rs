//! Exact dealing distributions over suit sequences.
//!
//! - `distribution`: the per-hand-size mapping from hand to probability.
//! - `builder`: incremental construction from size 0 upward, pruned by orderability.

mod builder;
mod distribution;

pub use builder::DealBuilder;
pub use distribution::{DealDistribution, DistributionMode};
