use super::distribution::{DealDistribution, DistributionMode};
use crate::error::ProbabilityError;
use crate::model::counts::SuitCounts;
use crate::model::hand::{Hand, check_hand_size};
use crate::model::suit::Suit;
use crate::order::OrderableCache;
use num_rational::BigRational;
use num_traits::Zero;
use std::collections::HashMap;
use tracing::debug;

/// Builds deal distributions level by level and memoises every level it has built.
///
/// In pruned mode a hand is only extended while its collapse stays orderable: once a
/// prefix is out of reach no dealt suit can bring it back, so dropping it early is exact.
#[derive(Debug)]
pub struct DealBuilder {
    mode: DistributionMode,
    cache: OrderableCache,
    levels: Vec<DealDistribution>,
}

impl DealBuilder {
    pub fn new(mode: DistributionMode) -> Self {
        Self {
            mode,
            cache: OrderableCache::new(),
            levels: vec![DealDistribution::base(mode)],
        }
    }

    pub fn pruned() -> Self {
        Self::new(DistributionMode::Pruned)
    }

    pub fn unpruned() -> Self {
        Self::new(DistributionMode::Unpruned)
    }

    pub fn mode(&self) -> DistributionMode {
        self.mode
    }

    pub fn cache(&self) -> &OrderableCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut OrderableCache {
        &mut self.cache
    }

    /// Largest hand size whose distribution is currently memoised.
    pub fn built_up_to(&self) -> usize {
        self.levels.len() - 1
    }

    /// An already memoised level, without building anything.
    pub fn level(&self, hand_size: usize) -> Option<&DealDistribution> {
        self.levels.get(hand_size)
    }

    /// Distribution for `hand_size`, extending from the largest memoised level as needed.
    pub fn distribution(&mut self, hand_size: usize) -> Result<&DealDistribution, ProbabilityError> {
        check_hand_size(hand_size)?;
        while self.levels.len() <= hand_size {
            let next = self.extend_last()?;
            self.levels.push(next);
        }
        Ok(&self.levels[hand_size])
    }

    /// Total probability of the orderable hands of `hand_size`.
    pub fn orderable_mass(&mut self, hand_size: usize) -> Result<BigRational, ProbabilityError> {
        self.distribution(hand_size)?;
        let Self {
            mode,
            cache,
            levels,
        } = self;
        let level = &levels[hand_size];
        let mass = match mode {
            DistributionMode::Pruned => level.total_probability(),
            DistributionMode::Unpruned => level
                .iter()
                .filter(|(hand, _)| hand.is_empty() || cache.is_orderable(&hand.collapse()))
                .fold(BigRational::zero(), |acc, (_, probability)| acc + probability),
        };
        Ok(mass)
    }

    /// Drops every memoised level above the base and the orderability table.
    pub fn clear(&mut self) {
        self.levels.truncate(1);
        self.cache.clear();
    }

    fn extend_last(&mut self) -> Result<DealDistribution, ProbabilityError> {
        let Self {
            mode,
            cache,
            levels,
        } = self;
        let parent = &levels[levels.len() - 1];
        let mut hands: HashMap<Hand, BigRational> =
            HashMap::with_capacity(parent.len() * Suit::ALL.len());

        for (hand, probability) in parent.iter() {
            let counts = SuitCounts::remaining_after(hand);
            let collapsed = hand.collapse();
            for suit in Suit::ALL {
                let draw = counts
                    .draw_probability(suit)
                    .ok_or_else(|| ProbabilityError::SuitExhausted {
                        hand: hand.clone(),
                        suit,
                    })?;
                if *mode == DistributionMode::Pruned
                    && !cache.is_orderable(&collapsed.extended(suit))
                {
                    continue;
                }
                hands.insert(hand.extended(suit), probability * draw);
            }
        }

        let hand_size = parent.hand_size() + 1;
        let stats = cache.stats();
        debug!(
            target: "suitsort_core::deal",
            hand_size,
            mode = ?mode,
            hands = hands.len(),
            cached_sequences = cache.len(),
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            "built deal distribution level"
        );
        Ok(DealDistribution::from_parts(hand_size, *mode, hands))
    }
}

impl Default for DealBuilder {
    fn default() -> Self {
        Self::pruned()
    }
}
