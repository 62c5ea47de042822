use crate::model::collapsed::{Collapsed, collapse};
use crate::model::suit::Suit;

const SAME_COLOR_PAIRS: [(Suit, Suit); 4] = [
    (Suit::Diamonds, Suit::Hearts),
    (Suit::Hearts, Suit::Diamonds),
    (Suit::Clubs, Suit::Spades),
    (Suit::Spades, Suit::Clubs),
];

/// Whether the collapse of `suits` is properly grouped.
pub fn ordered(suits: &[Suit]) -> bool {
    is_ordered(&collapse(suits))
}

/// Each suit forms a single block, and same-colour blocks only touch when one colour is present.
pub fn is_ordered(seq: &Collapsed) -> bool {
    once_each(seq) && (single_color(seq) || !same_color_adjacent(seq))
}

fn once_each(seq: &Collapsed) -> bool {
    let mut seen = [false; 4];
    for suit in seq.iter() {
        if seen[suit.index()] {
            return false;
        }
        seen[suit.index()] = true;
    }
    true
}

fn single_color(seq: &Collapsed) -> bool {
    let mut colors = seq.iter().map(Suit::color);
    match colors.next() {
        Some(first) => colors.all(|color| color == first),
        None => true,
    }
}

fn same_color_adjacent(seq: &Collapsed) -> bool {
    seq.as_slice()
        .windows(2)
        .any(|pair| SAME_COLOR_PAIRS.contains(&(pair[0], pair[1])))
}
