/// Card, Suit, and Value.
mod card;
/// Export `Card`, `Suit`, and `Value`
pub use self::card::{Card, Suit, Value};

/// A compact set of cards.
mod card_bit_set;
/// Export `CardBitSet`
pub use self::card_bit_set::CardBitSet;

/// The canonical 52 card deck.
mod deck;
/// Export `Deck`
pub use self::deck::Deck;

/// Errors for everything in the crate.
mod error;
/// Export `OddsError`
pub use self::error::OddsError;

/// Text codec for cards.
mod parse;
/// Export the card parsing functions.
pub use self::parse::parse_cards;

/// Enumerating every k sized subset of a pool of cards.
mod combinations;
/// Export `Combinations`, `CardIter`, and `binomial`
pub use self::combinations::{binomial, CardIter, Combinations};

/// Hand ranking.
mod rank;
/// Export the ranking types.
pub use self::rank::{Category, Rank, Rankable, TieBreak};

/// Checks on the cards supplied by the caller.
mod validation;
/// Export the validation functions.
pub use self::validation::{find_duplicate, validate_board_length, LEGAL_BOARD_LENGTHS};
