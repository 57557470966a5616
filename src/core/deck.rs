use std::ops::Deref;
use std::sync::OnceLock;

use super::{Card, CardBitSet, Suit, Value};

static STANDARD: OnceLock<Deck> = OnceLock::new();

/// The 52 distinct cards in canonical order: suit major (clubs, diamonds,
/// hearts, spades) and value ascending from the Ace to the King within each
/// suit.
///
/// The standard deck is built once per process and shared read only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The process wide canonical deck.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Deck, Suit, Value};
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(52, deck.len());
    /// assert_eq!(Card::new(Value::Ace, Suit::Club), deck[0]);
    /// assert_eq!(Card::new(Value::King, Suit::Club), deck[12]);
    /// assert_eq!(Card::new(Value::Ace, Suit::Diamond), deck[13]);
    /// ```
    pub fn standard() -> &'static Deck {
        STANDARD.get_or_init(Deck::generate)
    }

    fn generate() -> Deck {
        let cards = Suit::SUITS
            .iter()
            .flat_map(|&suit| Value::VALUES.iter().map(move |&value| Card::new(value, suit)))
            .collect();
        Deck { cards }
    }

    /// The cards of this deck not in `known`, keeping canonical order.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{CardBitSet, Deck, parse_cards};
    ///
    /// let known: CardBitSet = parse_cards("KS QS").unwrap().into_iter().collect();
    /// let remaining = Deck::standard().remaining(known);
    /// assert_eq!(50, remaining.len());
    /// ```
    pub fn remaining(&self, known: CardBitSet) -> Vec<Card> {
        self.cards
            .iter()
            .filter(|c| !known.contains(**c))
            .copied()
            .collect()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Deref for Deck {
    type Target = [Card];

    fn deref(&self) -> &[Card] {
        &self.cards
    }
}
