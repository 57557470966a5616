//! Exact odds for the hand category a Texas Hold'em player ends up with.
//!
//! Given two hole cards and zero, three, four, or five community cards this
//! crate enumerates every way the unseen deck can complete the board, ranks
//! the best five card hand of each resulting holding, and reports how often
//! each hand category occurs.
//!
//! ```
//! use holdem_odds::core::{Category, parse_cards};
//! use holdem_odds::holdem::OddsCalculator;
//!
//! let hole = parse_cards("AC AD").unwrap();
//! let board = parse_cards("AH AS 7C").unwrap();
//!
//! let calc = OddsCalculator::new(&hole, &board).unwrap();
//! let dist = calc.calculate().unwrap();
//!
//! assert_eq!(1_081, dist.total());
//! assert_eq!(100.0, dist.percentage(Category::FourOfAKind));
//! ```

/// Everything that is agnostic to the style of poker being played: cards,
/// decks, enumeration of card subsets, and hand ranking.
pub mod core;
/// Texas Hold'em specific code: hole and board validation, and the odds
/// calculation that drives enumeration.
pub mod holdem;
