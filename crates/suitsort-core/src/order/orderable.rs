//! Memoised "one move away from ordered" predicate.

use super::moves::moves;
use super::ordered::is_ordered;
use crate::model::collapsed::{Collapsed, collapse};
use crate::model::suit::Suit;
use std::collections::HashMap;

/// Longest collapsed sequence that a single move can still turn into an ordered one.
///
/// An ordered sequence has at most four runs and one relocation merges at most three
/// run boundaries; `verify::verify_run_bound` checks the bound exhaustively.
pub const MAX_ORDERABLE_RUNS: usize = 7;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub short_circuits: u64,
}

/// Orderability verdicts keyed by collapsed sequence value.
///
/// Entries are pure functions of their key, so the table may be cleared at any time.
#[derive(Debug, Default)]
pub struct OrderableCache {
    entries: HashMap<Collapsed, bool>,
    stats: CacheStats,
}

impl OrderableCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_orderable(&mut self, seq: &Collapsed) -> bool {
        if seq.len() > MAX_ORDERABLE_RUNS {
            self.stats.short_circuits += 1;
            return false;
        }
        if let Some(&known) = self.entries.get(seq) {
            self.stats.hits += 1;
            return known;
        }
        self.stats.misses += 1;
        let verdict = is_orderable_unbounded(seq);
        self.entries.insert(seq.clone(), verdict);
        verdict
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats = CacheStats::default();
    }
}

/// Searches every move of `seq` without the length bound or the memo table.
pub fn is_orderable_unbounded(seq: &Collapsed) -> bool {
    moves(seq).iter().any(is_ordered)
}

/// Whether the collapse of `suits` is orderable, using a throwaway cache.
pub fn orderable(suits: &[Suit]) -> bool {
    OrderableCache::new().is_orderable(&collapse(suits))
}
