//! Exhaustive checks of the two facts the pruned builder relies on:
//! no collapsed sequence longer than [`MAX_ORDERABLE_RUNS`] is orderable, and a
//! non-orderable prefix never becomes orderable when another suit is dealt.

use crate::model::collapsed::Collapsed;
use crate::model::suit::Suit;
use crate::order::{MAX_ORDERABLE_RUNS, OrderableCache, is_orderable_unbounded};
use std::fmt;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyViolation {
    LongOrderable { sequence: Collapsed },
    Recovered { prefix: Collapsed, suit: Suit },
}

impl fmt::Display for PropertyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyViolation::LongOrderable { sequence } => write!(
                f,
                "'{sequence}' has {} runs but is orderable (bound is {MAX_ORDERABLE_RUNS})",
                sequence.len()
            ),
            PropertyViolation::Recovered { prefix, suit } => write!(
                f,
                "non-orderable '{prefix}' becomes orderable after dealing {suit}"
            ),
        }
    }
}

impl std::error::Error for PropertyViolation {}

/// Every collapsed sequence of exactly `len` suits; `4 * 3^(len-1)` of them.
pub fn all_collapsed(len: usize) -> Vec<Collapsed> {
    let mut frontier = vec![Collapsed::empty()];
    for _ in 0..len {
        frontier = frontier
            .iter()
            .flat_map(|seq| {
                Suit::ALL
                    .into_iter()
                    .filter(move |&suit| seq.last() != Some(suit))
                    .map(move |suit| seq.extended(suit))
            })
            .collect();
    }
    frontier
}

/// Checks that no collapsed sequence of length `MAX_ORDERABLE_RUNS + 1 ..= max_len` is
/// orderable, searching moves without the length short-circuit. Returns how many
/// sequences were examined.
pub fn verify_run_bound(max_len: usize) -> Result<usize, PropertyViolation> {
    let mut checked = 0;
    for len in MAX_ORDERABLE_RUNS + 1..=max_len {
        for sequence in all_collapsed(len) {
            if is_orderable_unbounded(&sequence) {
                return Err(PropertyViolation::LongOrderable { sequence });
            }
            checked += 1;
        }
    }
    info!(
        target: "suitsort_core::verify",
        max_len,
        checked,
        "run bound holds"
    );
    Ok(checked)
}

/// Checks that dealing any suit after a non-orderable prefix of at most
/// `MAX_ORDERABLE_RUNS` runs never yields an orderable sequence. Returns how many
/// prefixes were extended.
pub fn verify_non_recoverable(cache: &mut OrderableCache) -> Result<usize, PropertyViolation> {
    let mut checked = 0;
    for len in 1..=MAX_ORDERABLE_RUNS {
        for prefix in all_collapsed(len) {
            if cache.is_orderable(&prefix) {
                continue;
            }
            for suit in Suit::ALL {
                let next = prefix.extended(suit);
                let recovered = if next.len() > MAX_ORDERABLE_RUNS {
                    is_orderable_unbounded(&next)
                } else {
                    cache.is_orderable(&next)
                };
                if recovered {
                    return Err(PropertyViolation::Recovered { prefix, suit });
                }
            }
            checked += 1;
        }
    }
    info!(
        target: "suitsort_core::verify",
        checked,
        "non-orderable prefixes stay non-orderable"
    );
    Ok(checked)
}
