use thiserror::Error;

use super::Card;

/// Everything that can go wrong when computing odds.
///
/// `InvalidBoardLength`, `InvalidHoleLength`, `CardParse`, and
/// `DuplicateCard` come from bad input and are all raised before any
/// enumeration starts. `MalformedHolding` means validation let something
/// through that it should not have.
#[derive(Error, Debug)]
pub enum OddsError {
    #[error("illegal board length. Expected a length of 0, 3, 4, 5, but the board length was {actual}")]
    InvalidBoardLength { actual: usize },

    #[error("exactly two hole cards are required, got {actual}")]
    InvalidHoleLength { actual: usize },

    #[error("parse error at character {offset}")]
    CardParse { offset: usize },

    #[error("The card {0} appears more than once")]
    DuplicateCard(Card),

    #[error("malformed holding: {0}")]
    MalformedHolding(String),

    #[error("invalid tie break: {0}")]
    InvalidTieBreak(String),

    #[error("Invalid calculator config: {0}")]
    InvalidConfig(String),

    #[error("Unable to build the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl OddsError {
    /// Whether this error was caused by the caller's input rather than a
    /// defect inside the crate.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            OddsError::InvalidBoardLength { .. }
                | OddsError::InvalidHoleLength { .. }
                | OddsError::CardParse { .. }
                | OddsError::DuplicateCard(_)
                | OddsError::InvalidTieBreak(_)
                | OddsError::InvalidConfig(_)
        )
    }
}
