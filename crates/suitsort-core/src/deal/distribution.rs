use crate::model::hand::Hand;
use num_rational::BigRational;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Whether hands that cannot be ordered in one move are dropped while building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionMode {
    #[default]
    Pruned,
    Unpruned,
}

/// Probability of dealing each hand of a fixed size.
///
/// Unpruned distributions cover all `4^n` hands and sum to one. Pruned ones keep only
/// hands whose collapse is orderable, so their sum is the orderable probability.
#[derive(Debug, Clone, PartialEq)]
pub struct DealDistribution {
    hand_size: usize,
    mode: DistributionMode,
    hands: HashMap<Hand, BigRational>,
}

impl DealDistribution {
    /// The size-zero distribution: the empty hand, dealt with certainty.
    pub fn base(mode: DistributionMode) -> Self {
        let mut hands = HashMap::with_capacity(1);
        hands.insert(Hand::empty(), BigRational::one());
        Self {
            hand_size: 0,
            mode,
            hands,
        }
    }

    pub(crate) fn from_parts(
        hand_size: usize,
        mode: DistributionMode,
        hands: HashMap<Hand, BigRational>,
    ) -> Self {
        Self {
            hand_size,
            mode,
            hands,
        }
    }

    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    pub fn mode(&self) -> DistributionMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn probability(&self, hand: &Hand) -> Option<&BigRational> {
        self.hands.get(hand)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Hand, &BigRational)> {
        self.hands.iter()
    }

    pub fn total_probability(&self) -> BigRational {
        self.hands
            .values()
            .fold(BigRational::zero(), |acc, probability| acc + probability)
    }
}

#[cfg(test)]
mod tests {
    use super::{DealDistribution, DistributionMode};
    use crate::model::hand::Hand;
    use num_rational::BigRational;
    use num_traits::One;

    #[test]
    fn base_holds_only_the_empty_hand() {
        let base = DealDistribution::base(DistributionMode::Pruned);
        assert_eq!(base.hand_size(), 0);
        assert_eq!(base.len(), 1);
        assert_eq!(base.probability(&Hand::empty()), Some(&BigRational::one()));
        assert_eq!(base.total_probability(), BigRational::one());
    }

    #[test]
    fn mode_serializes_in_snake_case() {
        let json = serde_json::to_string(&DistributionMode::Unpruned).expect("serialize");
        assert_eq!(json, "\"unpruned\"");
    }
}
