use crate::model::hand::Hand;
use crate::model::suit::Suit;
use std::fmt;

/// Failures raised while building deal distributions or aggregating probabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbabilityError {
    HandSizeOutOfRange { requested: usize, max: usize },
    /// A hand was extended by a suit with no cards left; indicates broken count bookkeeping.
    SuitExhausted { hand: Hand, suit: Suit },
}

impl fmt::Display for ProbabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbabilityError::HandSizeOutOfRange { requested, max } => {
                write!(f, "hand size {requested} is outside 0..={max}")
            }
            ProbabilityError::SuitExhausted { hand, suit } => {
                write!(f, "cannot draw {suit} after hand '{hand}': suit exhausted")
            }
        }
    }
}

impl std::error::Error for ProbabilityError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseSuitError {
    pub symbol: char,
    pub position: usize,
}

impl fmt::Display for ParseSuitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' at position {} is not a suit symbol (expected one of C, D, S, H)",
            self.symbol, self.position
        )
    }
}

impl std::error::Error for ParseSuitError {}
