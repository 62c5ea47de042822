//! Exact probability that a dealt hand can be grouped by suit with a single move.

use crate::deal::{DealBuilder, DistributionMode};
use crate::error::ProbabilityError;
use crate::model::collapsed::collapse;
use crate::model::suit::Suit;
use crate::simulate::{Estimate, estimate};
use num_rational::BigRational;
use num_traits::ToPrimitive;
use std::ops::RangeInclusive;

/// Owns the memo tables behind the orderability queries.
///
/// Tables live as long as the engine and are safe to [`Orderability::clear`] at any time.
#[derive(Debug, Default)]
pub struct Orderability {
    builder: DealBuilder,
}

impl Orderability {
    pub fn new(mode: DistributionMode) -> Self {
        Self {
            builder: DealBuilder::new(mode),
        }
    }

    pub fn mode(&self) -> DistributionMode {
        self.builder.mode()
    }

    pub fn builder(&self) -> &DealBuilder {
        &self.builder
    }

    /// Whether one block move can group `suits`, memoised on the collapsed form.
    pub fn orderable(&mut self, suits: &[Suit]) -> bool {
        self.builder.cache_mut().is_orderable(&collapse(suits))
    }

    /// Probability that a hand of `hand_size` cards is orderable. The empty hand counts as
    /// orderable, so size zero yields one.
    pub fn orderable_probability(
        &mut self,
        hand_size: usize,
    ) -> Result<BigRational, ProbabilityError> {
        self.builder.orderable_mass(hand_size)
    }

    pub fn table(
        &mut self,
        hand_sizes: RangeInclusive<usize>,
    ) -> Result<Vec<ProbabilityRow>, ProbabilityError> {
        hand_sizes
            .map(|hand_size| {
                self.orderable_probability(hand_size)
                    .map(|probability| ProbabilityRow {
                        hand_size,
                        probability,
                    })
            })
            .collect()
    }

    /// Monte Carlo estimate sharing this engine's orderability table.
    pub fn estimate(
        &mut self,
        hand_size: usize,
        trials: u64,
        seed: u64,
    ) -> Result<Estimate, ProbabilityError> {
        estimate(hand_size, trials, seed, self.builder.cache_mut())
    }

    pub fn clear(&mut self) {
        self.builder.clear();
    }
}

/// Orderable probability for one hand size, computed with fresh memo tables.
pub fn orderable_probability(hand_size: usize) -> Result<BigRational, ProbabilityError> {
    Orderability::default().orderable_probability(hand_size)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityRow {
    pub hand_size: usize,
    pub probability: BigRational,
}

impl ProbabilityRow {
    pub fn as_f64(&self) -> f64 {
        let numer = self.probability.numer().to_f64().unwrap_or(f64::NAN);
        let denom = self.probability.denom().to_f64().unwrap_or(f64::NAN);
        numer / denom
    }

    pub fn percent(&self) -> f64 {
        self.as_f64() * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::suit::parse_suits;
    use num_bigint::BigInt;
    use num_traits::One;

    fn ratio(n: i64, d: i64) -> BigRational {
        BigRational::new(BigInt::from(n), BigInt::from(d))
    }

    #[test]
    fn small_hands_are_always_orderable() {
        let mut engine = Orderability::default();
        for n in 0..=4 {
            assert_eq!(
                engine.orderable_probability(n).expect("in range"),
                BigRational::one(),
                "hand size {n}"
            );
        }
    }

    #[test]
    fn five_and_six_card_hands() {
        let mut engine = Orderability::default();
        assert_eq!(
            engine.orderable_probability(5).expect("in range"),
            ratio(213_019, 249_900)
        );
        assert_eq!(
            engine.orderable_probability(6).expect("in range"),
            ratio(51_083, 83_895)
        );
    }

    #[test]
    fn free_function_matches_engine() {
        assert_eq!(
            orderable_probability(5).expect("in range"),
            ratio(213_019, 249_900)
        );
        assert!(orderable_probability(14).is_err());
    }

    #[test]
    fn table_rows_carry_float_views() {
        let mut engine = Orderability::default();
        let rows = engine.table(4..=5).expect("in range");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].hand_size, 4);
        assert!((rows[0].percent() - 100.0).abs() < 1e-9);
        assert!((rows[1].as_f64() - 0.852_416_966_786_714_6).abs() < 1e-12);
    }

    #[test]
    fn orderable_collapses_its_input() {
        let mut engine = Orderability::default();
        let hand = parse_suits("CCCHHHCCCHHHCC").expect("valid");
        assert!(!engine.orderable(&hand));
        let hand = parse_suits("SSSHHHSSS").expect("valid");
        assert!(engine.orderable(&hand));
    }
}
