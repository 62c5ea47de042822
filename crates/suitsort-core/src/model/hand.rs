use crate::error::{ParseSuitError, ProbabilityError};
use crate::model::collapsed::{Collapsed, collapse};
use crate::model::suit::{Suit, parse_suits};
use core::fmt;
use std::str::FromStr;

/// Largest hand that can be dealt while every suit still has cards left to draw.
pub const MAX_HAND_SIZE: usize = Suit::CARDS_PER_SUIT as usize;

pub fn check_hand_size(hand_size: usize) -> Result<(), ProbabilityError> {
    if hand_size > MAX_HAND_SIZE {
        return Err(ProbabilityError::HandSizeOutOfRange {
            requested: hand_size,
            max: MAX_HAND_SIZE,
        });
    }
    Ok(())
}

/// Suits of dealt cards, in deal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hand {
    suits: Vec<Suit>,
}

impl Hand {
    pub fn empty() -> Self {
        Self { suits: Vec::new() }
    }

    pub fn from_suits(suits: Vec<Suit>) -> Self {
        Self { suits }
    }

    /// Returns a new hand with `suit` dealt after the existing cards.
    pub fn extended(&self, suit: Suit) -> Self {
        let mut suits = Vec::with_capacity(self.suits.len() + 1);
        suits.extend_from_slice(&self.suits);
        suits.push(suit);
        Self { suits }
    }

    pub fn len(&self) -> usize {
        self.suits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suits.is_empty()
    }

    pub fn suits(&self) -> &[Suit] {
        &self.suits
    }

    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        self.suits.iter().copied()
    }

    pub fn count(&self, suit: Suit) -> usize {
        self.suits.iter().filter(|&&s| s == suit).count()
    }

    pub fn collapse(&self) -> Collapsed {
        collapse(&self.suits)
    }
}

impl FromStr for Hand {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suits(s).map(Self::from_suits)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suit in &self.suits {
            write!(f, "{suit}")?;
        }
        Ok(())
    }
}
