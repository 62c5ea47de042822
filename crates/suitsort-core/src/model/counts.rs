use crate::model::hand::Hand;
use crate::model::suit::Suit;
use num_bigint::BigInt;
use num_rational::BigRational;

pub const DECK_SIZE: u16 = 52;

/// Counts of cards per suit still left in the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuitCounts {
    pub clubs: u8,
    pub diamonds: u8,
    pub spades: u8,
    pub hearts: u8,
}

impl SuitCounts {
    pub const fn new(clubs: u8, diamonds: u8, spades: u8, hearts: u8) -> Self {
        Self {
            clubs,
            diamonds,
            spades,
            hearts,
        }
    }

    pub const fn new_full_deck() -> Self {
        let n = Suit::CARDS_PER_SUIT;
        Self::new(n, n, n, n)
    }

    /// Counts left in a full deck after `hand` has been dealt from it.
    pub fn remaining_after(hand: &Hand) -> Self {
        let mut counts = Self::new_full_deck();
        for suit in hand.iter() {
            counts.decrement(suit);
        }
        counts
    }

    pub fn get(&self, suit: Suit) -> u8 {
        match suit {
            Suit::Clubs => self.clubs,
            Suit::Diamonds => self.diamonds,
            Suit::Spades => self.spades,
            Suit::Hearts => self.hearts,
        }
    }

    pub fn total(&self) -> u16 {
        self.clubs as u16 + self.diamonds as u16 + self.spades as u16 + self.hearts as u16
    }

    pub fn decrement(&mut self, suit: Suit) {
        let slot = match suit {
            Suit::Clubs => &mut self.clubs,
            Suit::Diamonds => &mut self.diamonds,
            Suit::Spades => &mut self.spades,
            Suit::Hearts => &mut self.hearts,
        };
        *slot = slot.saturating_sub(1);
    }

    /// Probability that the next card drawn is of `suit`, or `None` once it is exhausted.
    pub fn draw_probability(&self, suit: Suit) -> Option<BigRational> {
        let left = self.get(suit);
        let total = self.total();
        if left == 0 || total == 0 {
            return None;
        }
        Some(BigRational::new(BigInt::from(left), BigInt::from(total)))
    }
}

impl Default for SuitCounts {
    fn default() -> Self {
        Self::new_full_deck()
    }
}
