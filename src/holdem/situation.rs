use crate::core::{find_duplicate, validate_board_length, Card, CardBitSet, OddsError};

/// The two private cards dealt to the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hole([Card; 2]);

impl Hole {
    /// Create hole cards from exactly two distinct cards.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{OddsError, parse_cards};
    /// use holdem_odds::holdem::Hole;
    ///
    /// assert!(Hole::new(&parse_cards("KS QS").unwrap()).is_ok());
    /// assert!(matches!(
    ///     Hole::new(&parse_cards("KS").unwrap()),
    ///     Err(OddsError::InvalidHoleLength { actual: 1 })
    /// ));
    /// ```
    pub fn new(cards: &[Card]) -> Result<Self, OddsError> {
        match *cards {
            [first, second] if first == second => Err(OddsError::DuplicateCard(first)),
            [first, second] => Ok(Self([first, second])),
            _ => Err(OddsError::InvalidHoleLength {
                actual: cards.len(),
            }),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }
}

/// The community cards already dealt: none, the flop, the turn, or the
/// river.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board(Vec<Card>);

impl Board {
    /// Create a board, checking the length and that no card repeats.
    pub fn new(cards: &[Card]) -> Result<Self, OddsError> {
        validate_board_length(cards.len())?;
        if let Some(card) = find_duplicate(cards) {
            return Err(OddsError::DuplicateCard(card));
        }
        Ok(Self(cards.to_vec()))
    }

    pub fn cards(&self) -> &[Card] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// How many more community cards will be dealt.
    pub fn cards_to_come(&self) -> usize {
        5 - self.0.len()
    }
}

/// Hole cards and board that together form a legal deal: the hole has two
/// cards, the board a legal length, and no card appears twice anywhere.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Situation {
    hole: Hole,
    board: Board,
}

impl Situation {
    /// Validate a deal.
    ///
    /// Checks happen in order: the hole size, the board size, and then
    /// duplicates across the hole and the board together.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{OddsError, parse_cards};
    /// use holdem_odds::holdem::Situation;
    ///
    /// let hole = parse_cards("KS QS").unwrap();
    /// let board = parse_cards("2C KS 9H").unwrap();
    /// assert!(matches!(
    ///     Situation::new(&hole, &board),
    ///     Err(OddsError::DuplicateCard(_))
    /// ));
    /// ```
    pub fn new(hole: &[Card], board: &[Card]) -> Result<Self, OddsError> {
        if hole.len() != 2 {
            return Err(OddsError::InvalidHoleLength { actual: hole.len() });
        }
        validate_board_length(board.len())?;

        let all: Vec<Card> = hole.iter().chain(board.iter()).copied().collect();
        if let Some(card) = find_duplicate(&all) {
            return Err(OddsError::DuplicateCard(card));
        }

        Ok(Self {
            hole: Hole([hole[0], hole[1]]),
            board: Board(board.to_vec()),
        })
    }

    pub fn hole(&self) -> &Hole {
        &self.hole
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every card that is already known, hole and board.
    pub fn known(&self) -> CardBitSet {
        self.hole
            .cards()
            .iter()
            .chain(self.board.cards())
            .copied()
            .collect()
    }
}
