use crate::error::ProbabilityError;
use crate::model::hand::{Hand, check_hand_size};
use crate::model::suit::Suit;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// A 52-card deck reduced to the suit of each card.
#[derive(Debug, Clone)]
pub struct Deck {
    suits: Vec<Suit>,
}

impl Deck {
    pub fn standard() -> Self {
        let mut suits = Vec::with_capacity(52);
        for suit in Suit::ALL.iter().copied() {
            for _ in 0..Suit::CARDS_PER_SUIT {
                suits.push(suit);
            }
        }
        Self { suits }
    }

    pub fn shuffled<R: rand::Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_in_place(rng);
        deck
    }

    pub fn shuffled_with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::shuffled(&mut rng)
    }

    pub fn shuffle_in_place<R: rand::Rng + ?Sized>(&mut self, rng: &mut R) {
        self.suits.shuffle(rng);
    }

    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    /// Deals the top `hand_size` cards.
    pub fn deal(&self, hand_size: usize) -> Result<Hand, ProbabilityError> {
        check_hand_size(hand_size)?;
        Ok(Hand::from_suits(self.suits[..hand_size].to_vec()))
    }
}
