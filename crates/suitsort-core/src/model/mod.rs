//! Value types for suits, dealt hands and their run-collapsed forms.

pub mod collapsed;
pub mod counts;
pub mod deck;
pub mod hand;
pub mod suit;
