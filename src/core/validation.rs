use super::{Card, OddsError};

/// The number of community cards that can be on the board: pre-flop, the
/// flop, the turn, and the river.
pub const LEGAL_BOARD_LENGTHS: [usize; 4] = [0, 3, 4, 5];

/// Check that a board of `len` cards is one that can be dealt.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::validate_board_length;
///
/// assert!(validate_board_length(3).is_ok());
/// assert!(validate_board_length(2).is_err());
/// ```
pub fn validate_board_length(len: usize) -> Result<(), OddsError> {
    if LEGAL_BOARD_LENGTHS.contains(&len) {
        Ok(())
    } else {
        Err(OddsError::InvalidBoardLength { actual: len })
    }
}

/// Find the first card that appears more than once.
///
/// Pairs are scanned in order, so the card returned is the earliest card
/// that has a later twin.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::{find_duplicate, parse_cards};
///
/// let cards = parse_cards("KS QS KS").unwrap();
/// assert_eq!(Some(cards[0]), find_duplicate(&cards));
///
/// let cards = parse_cards("KS QS").unwrap();
/// assert_eq!(None, find_duplicate(&cards));
/// ```
pub fn find_duplicate(cards: &[Card]) -> Option<Card> {
    cards.iter().enumerate().find_map(|(idx, card)| {
        cards[idx + 1..]
            .iter()
            .any(|other| other == card)
            .then_some(*card)
    })
}
