//! Card text codec.
//!
//! Cards are written as a value followed by a suit, `[value][suit]`. Values
//! are `A`, `2` through `9`, `10` (written as a `1` followed by a `0`), `J`,
//! `Q`, and `K`. Suits are `C`, `D`, `H`, and `S`. Cards are separated by
//! spaces or tabs, which may also be left out entirely (`KSQS`).
use std::str::FromStr;

use super::{Card, OddsError, Suit, Value};

/// Where the parser is inside of a single card token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Waiting for a value, skipping separators.
    Value,
    /// Saw a `1`, only a `0` may follow.
    SawOne,
    /// Have a value, waiting on the suit.
    Suit(Value),
}

/// Parse a whitespace separated list of cards.
///
/// On failure the error carries the 0 based character offset of the first
/// character that couldn't be parsed. A token cut short by the end of the
/// input reports the length of the input. No cards are returned from a
/// failed parse.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{Card, OddsError, Suit, Value, parse_cards};
///
/// let cards = parse_cards("KS 10H").unwrap();
/// assert_eq!(
///     vec![
///         Card::new(Value::King, Suit::Spade),
///         Card::new(Value::Ten, Suit::Heart),
///     ],
///     cards
/// );
///
/// assert!(matches!(
///     parse_cards("KS XH"),
///     Err(OddsError::CardParse { offset: 3 })
/// ));
/// ```
pub fn parse_cards(text: &str) -> Result<Vec<Card>, OddsError> {
    Ok(parse_tokens(text)?.into_iter().map(|(_, card)| card).collect())
}

/// Parse every card along with the offset where its token started.
fn parse_tokens(text: &str) -> Result<Vec<(usize, Card)>, OddsError> {
    let mut cards = Vec::new();
    let mut state = ParseState::Value;
    let mut start = 0;
    let mut offset = 0;

    for (idx, c) in text.chars().enumerate() {
        offset = idx + 1;
        state = match (state, c) {
            (ParseState::Value, ' ' | '\t') => ParseState::Value,
            (ParseState::Value, '1') => {
                start = idx;
                ParseState::SawOne
            }
            (ParseState::Value, _) => match value_from_char(c) {
                Some(value) => {
                    start = idx;
                    ParseState::Suit(value)
                }
                None => return Err(OddsError::CardParse { offset: idx }),
            },
            (ParseState::SawOne, '0') => ParseState::Suit(Value::Ten),
            (ParseState::SawOne, _) => return Err(OddsError::CardParse { offset: idx }),
            (ParseState::Suit(value), _) => match Suit::from_char(c) {
                Some(suit) => {
                    cards.push((start, Card::new(value, suit)));
                    ParseState::Value
                }
                None => return Err(OddsError::CardParse { offset: idx }),
            },
        };
    }

    if state != ParseState::Value {
        return Err(OddsError::CardParse { offset });
    }
    Ok(cards)
}

fn value_from_char(c: char) -> Option<Value> {
    match c {
        'A' => Some(Value::Ace),
        'J' => Some(Value::Jack),
        'Q' => Some(Value::Queen),
        'K' => Some(Value::King),
        '2'..='9' => c
            .to_digit(10)
            .and_then(|d| Value::from_rank(d as u8)),
        _ => None,
    }
}

impl FromStr for Card {
    type Err = OddsError;

    /// Parse exactly one card, for example `"QD"` or `"10C"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_tokens(s)?.as_slice() {
            [(_, card)] => Ok(*card),
            // Anything after the first card is unexpected.
            [_, (second, _), ..] => Err(OddsError::CardParse { offset: *second }),
            [] => Err(OddsError::CardParse {
                offset: s.chars().count(),
            }),
        }
    }
}
