use std::cmp::Ordering;
use std::fmt;

/// Card rank or value.
/// The discriminant is the face value, 1 for the Ace up to 13 for the King.
///
/// The Ace is the lowest value. It only plays high when
/// completing a ten to ace straight.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Value {
    /// Ace
    Ace = 1,
    /// 2
    Two = 2,
    /// 3
    Three = 3,
    /// 4
    Four = 4,
    /// 5
    Five = 5,
    /// 6
    Six = 6,
    /// 7
    Seven = 7,
    /// 8
    Eight = 8,
    /// 9
    Nine = 9,
    /// T
    Ten = 10,
    /// J
    Jack = 11,
    /// Q
    Queen = 12,
    /// K
    King = 13,
}

impl Value {
    /// Every value, lowest first.
    pub const VALUES: [Value; 13] = [
        Value::Ace,
        Value::Two,
        Value::Three,
        Value::Four,
        Value::Five,
        Value::Six,
        Value::Seven,
        Value::Eight,
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
    ];

    /// Take a numeric rank (1 for the Ace up to 13 for the King) and
    /// turn it into a value.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!(Some(Value::Ace), Value::from_rank(1));
    /// assert_eq!(Some(Value::King), Value::from_rank(13));
    /// assert_eq!(None, Value::from_rank(14));
    /// ```
    pub fn from_rank(rank: u8) -> Option<Self> {
        rank.checked_sub(1)
            .and_then(|idx| Self::VALUES.get(idx as usize))
            .copied()
    }

    /// The numeric rank, Ace is 1.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The label used when printing this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Value;
    ///
    /// assert_eq!("A", Value::Ace.label());
    /// assert_eq!("10", Value::Ten.label());
    /// assert_eq!("Q", Value::Queen.label());
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            Value::Ace => "A",
            Value::Two => "2",
            Value::Three => "3",
            Value::Four => "4",
            Value::Five => "5",
            Value::Six => "6",
            Value::Seven => "7",
            Value::Eight => "8",
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
        }
    }
}

/// Enum for the four different suits.
/// While this has support for ordering it's not
/// sensical. The sorting is only there to allow sorting cards.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

impl Suit {
    /// All the suits, in canonical deck order.
    pub const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

    /// Given a character that represents a suit try and parse that char.
    /// Only the upper case letter is accepted.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Suit;
    ///
    /// assert_eq!(Some(Suit::Spade), Suit::from_char('S'));
    /// assert_eq!(None, Suit::from_char('s'));
    /// ```
    pub fn from_char(s: char) -> Option<Self> {
        match s {
            'C' => Some(Suit::Club),
            'D' => Some(Suit::Diamond),
            'H' => Some(Suit::Heart),
            'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The letter used for this suit in card text.
    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'C',
            Suit::Diamond => 'D',
            Suit::Heart => 'H',
            Suit::Spade => 'S',
        }
    }

    /// The glyph printed for this suit.
    pub fn glyph(self) -> char {
        match self {
            Suit::Club => '♣',
            Suit::Diamond => '♦',
            Suit::Heart => '♥',
            Suit::Spade => '♠',
        }
    }

    /// Index of the suit, 0 through 3.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The main struct of this library.
/// This is a carrier for Suit and Value combined.
///
/// Two cards are the same card when both value and suit match. Cards
/// order by suit first and value second. That order is only used for
/// duplicate detection and for a stable enumeration order; poker strength
/// is computed by `Rankable`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// Position of this card in the canonical deck, 0 through 51.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{Card, Suit, Value};
    ///
    /// assert_eq!(0, Card::new(Value::Ace, Suit::Club).index());
    /// assert_eq!(51, Card::new(Value::King, Suit::Spade).index());
    /// ```
    pub fn index(&self) -> usize {
        self.suit.index() * 13 + (self.value.rank() as usize - 1)
    }

    /// Inverse of `index`.
    pub fn from_index(idx: usize) -> Option<Self> {
        if idx >= 52 {
            return None;
        }
        let suit = Suit::SUITS[idx / 13];
        let value = Value::VALUES[idx % 13];
        Some(Self { value, suit })
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.suit
            .cmp(&other.suit)
            .then_with(|| self.value.cmp(&other.value))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.label(), self.suit.glyph())
    }
}
