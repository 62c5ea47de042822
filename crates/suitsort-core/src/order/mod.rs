//! Predicates over collapsed suit sequences and the single-move search.
//!
//! - `ordered`: whether a sequence is already properly grouped.
//! - `moves`: every outcome of relocating one contiguous block.
//! - `orderable`: whether some move yields an ordered sequence, memoised per sequence.

mod moves;
mod orderable;
mod ordered;

pub use moves::{Split, inserts, moves, splits};
pub use orderable::{
    CacheStats, MAX_ORDERABLE_RUNS, OrderableCache, is_orderable_unbounded, orderable,
};
pub use ordered::{is_ordered, ordered};
