use std::ops::{BitAnd, BitOr, BitXor};

use super::Card;

/// Bits 0 through 51 set, one for every card in the deck.
const FULL_DECK: u64 = (1 << 52) - 1;

/// A set of cards stored as a single `u64`.
///
/// Bit `i` is set when the card with canonical index `i` (see
/// `Card::index`) is in the set. That gives O(1) insert and contains with
/// no heap allocation, and iteration always yields cards in canonical deck
/// order.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct CardBitSet {
    cards: u64,
}

impl CardBitSet {
    /// Creates a new empty `CardBitSet`.
    #[inline]
    pub fn new() -> Self {
        Self { cards: 0 }
    }

    /// A set holding all 52 cards.
    #[inline]
    pub fn full() -> Self {
        Self { cards: FULL_DECK }
    }

    /// Inserts a card into the set.
    ///
    /// Returns `true` if the card was not already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let mask = 1u64 << card.index();
        let was_present = (self.cards & mask) != 0;
        self.cards |= mask;
        !was_present
    }

    /// Removes a card, returning `true` if it was present.
    #[inline]
    pub fn remove(&mut self, card: Card) -> bool {
        let mask = 1u64 << card.index();
        let was_present = (self.cards & mask) != 0;
        self.cards &= !mask;
        was_present
    }

    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        (self.cards & (1u64 << card.index())) != 0
    }

    /// Number of cards in the set.
    #[inline]
    pub fn count(&self) -> usize {
        self.cards.count_ones() as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cards == 0
    }
}

impl BitOr for CardBitSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards | rhs.cards,
        }
    }
}

impl BitAnd for CardBitSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self {
            cards: self.cards & rhs.cards,
        }
    }
}

impl BitXor for CardBitSet {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        Self {
            cards: self.cards ^ rhs.cards,
        }
    }
}

impl FromIterator<Card> for CardBitSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardBitSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

/// Iterates the cards of a `CardBitSet` lowest index first.
#[derive(Debug, Clone)]
pub struct CardBitSetIter {
    remaining: u64,
}

impl Iterator for CardBitSetIter {
    type Item = Card;

    fn next(&mut self) -> Option<Card> {
        if self.remaining == 0 {
            return None;
        }
        let idx = self.remaining.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.remaining &= self.remaining - 1;
        Card::from_index(idx)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for CardBitSet {
    type Item = Card;
    type IntoIter = CardBitSetIter;

    fn into_iter(self) -> CardBitSetIter {
        CardBitSetIter {
            remaining: self.cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Suit, Value};

    #[test]
    fn test_new_is_empty() {
        let set = CardBitSet::new();
        assert!(set.is_empty());
        assert_eq!(0, set.count());
    }

    #[test]
    fn test_full_has_every_card() {
        let set = CardBitSet::full();
        assert_eq!(52, set.count());
        assert_eq!(52, set.into_iter().count());
    }

    #[test]
    fn test_insert_and_remove() {
        let mut set = CardBitSet::new();
        let card = Card::new(Value::King, Suit::Spade);

        assert!(set.insert(card));
        assert!(!set.insert(card));
        assert!(set.contains(card));
        assert_eq!(1, set.count());

        assert!(set.remove(card));
        assert!(!set.remove(card));
        assert!(set.is_empty());
    }

    #[test]
    fn test_xor_removes_known() {
        let known: CardBitSet = [
            Card::new(Value::Ace, Suit::Club),
            Card::new(Value::King, Suit::Heart),
        ]
        .into_iter()
        .collect();

        let remaining = CardBitSet::full() ^ known;
        assert_eq!(50, remaining.count());
        assert!(!remaining.contains(Card::new(Value::Ace, Suit::Club)));
        assert!(remaining.contains(Card::new(Value::Ace, Suit::Diamond)));
        assert!((remaining & known).is_empty());
        assert_eq!(CardBitSet::full(), remaining | known);
    }

    #[test]
    fn test_iter_is_in_deck_order() {
        let cards: Vec<Card> = CardBitSet::full().into_iter().collect();
        for pair in cards.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(Card::new(Value::Ace, Suit::Club), cards[0]);
        assert_eq!(Card::new(Value::King, Suit::Spade), cards[51]);
    }
}
