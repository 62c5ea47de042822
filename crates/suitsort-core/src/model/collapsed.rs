use crate::error::ParseSuitError;
use crate::model::suit::{Suit, parse_suits};
use core::fmt;
use std::str::FromStr;

/// A suit sequence in which no two adjacent suits are equal.
///
/// Only [`collapse`] and [`Collapsed::extended`] build values, so the invariant
/// holds for every instance and the type can key memo tables directly.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Collapsed {
    suits: Vec<Suit>,
}

/// Merges every run of equal adjacent suits into a single suit.
pub fn collapse(suits: &[Suit]) -> Collapsed {
    let mut out: Vec<Suit> = Vec::with_capacity(suits.len());
    for &suit in suits {
        if out.last() != Some(&suit) {
            out.push(suit);
        }
    }
    Collapsed { suits: out }
}

impl Collapsed {
    pub fn empty() -> Self {
        Self { suits: Vec::new() }
    }

    /// Collapsed form of `self` followed by `suit`.
    pub fn extended(&self, suit: Suit) -> Self {
        if self.last() == Some(suit) {
            return self.clone();
        }
        let mut suits = Vec::with_capacity(self.suits.len() + 1);
        suits.extend_from_slice(&self.suits);
        suits.push(suit);
        Self { suits }
    }

    pub fn as_slice(&self) -> &[Suit] {
        &self.suits
    }

    pub fn len(&self) -> usize {
        self.suits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suits.is_empty()
    }

    pub fn last(&self) -> Option<Suit> {
        self.suits.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Suit> + '_ {
        self.suits.iter().copied()
    }

    pub fn is_ordered(&self) -> bool {
        crate::order::is_ordered(self)
    }
}

impl FromStr for Collapsed {
    type Err = ParseSuitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_suits(s).map(|suits| collapse(&suits))
    }
}

impl fmt::Display for Collapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for suit in &self.suits {
            write!(f, "{suit}")?;
        }
        Ok(())
    }
}
