//! Seeded Monte Carlo estimate of the orderable probability, for cross-checking exact results.

use crate::error::ProbabilityError;
use crate::model::deck::Deck;
use crate::model::hand::check_hand_size;
use crate::order::OrderableCache;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Estimate {
    pub hand_size: usize,
    pub trials: u64,
    pub hits: u64,
}

impl Estimate {
    pub fn ratio(&self) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.hits as f64 / self.trials as f64
    }
}

/// Deals `trials` shuffled hands and counts those whose collapse is orderable.
pub fn estimate(
    hand_size: usize,
    trials: u64,
    seed: u64,
    cache: &mut OrderableCache,
) -> Result<Estimate, ProbabilityError> {
    check_hand_size(hand_size)?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut deck = Deck::standard();
    let mut hits = 0;
    for _ in 0..trials {
        deck.shuffle_in_place(&mut rng);
        let hand = deck.deal(hand_size)?;
        if hand.is_empty() || cache.is_orderable(&hand.collapse()) {
            hits += 1;
        }
    }
    debug!(
        target: "suitsort_core::simulate",
        hand_size,
        trials,
        hits,
        seed,
        "finished monte carlo estimate"
    );
    Ok(Estimate {
        hand_size,
        trials,
        hits,
    })
}
