use crate::model::collapsed::{Collapsed, collapse};
use crate::model::suit::Suit;
use std::collections::HashSet;

/// A non-empty block cut out of a sequence, with the flanks left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Split<'a> {
    pub left: &'a [Suit],
    pub block: &'a [Suit],
    pub right: &'a [Suit],
}

impl Split<'_> {
    /// The sequence with the block removed.
    pub fn rest(&self) -> Vec<Suit> {
        [self.left, self.right].concat()
    }
}

/// Every `(left, block, right)` with a non-empty block; `L(L+1)/2` splits for length `L`.
///
/// The block may span the whole sequence.
pub fn splits(seq: &[Suit]) -> impl Iterator<Item = Split<'_>> + '_ {
    let len = seq.len();
    (0..len).flat_map(move |start| {
        (start + 1..=len).map(move |end| Split {
            left: &seq[..start],
            block: &seq[start..end],
            right: &seq[end..],
        })
    })
}

/// The `rest.len() + 1` sequences formed by inserting `block` at each position of `rest`.
pub fn inserts<'a>(block: &'a [Suit], rest: &'a [Suit]) -> impl Iterator<Item = Vec<Suit>> + 'a {
    (0..=rest.len()).map(move |at| {
        let mut out = Vec::with_capacity(rest.len() + block.len());
        out.extend_from_slice(&rest[..at]);
        out.extend_from_slice(block);
        out.extend_from_slice(&rest[at..]);
        out
    })
}

/// Distinct collapsed outcomes of relocating a single block of `seq`.
pub fn moves(seq: &Collapsed) -> HashSet<Collapsed> {
    let mut outcomes = HashSet::new();
    for split in splits(seq.as_slice()) {
        let rest = split.rest();
        for candidate in inserts(split.block, &rest) {
            outcomes.insert(collapse(&candidate));
        }
    }
    outcomes
}
