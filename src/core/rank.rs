use std::fmt;

use super::{Card, CardBitSet, OddsError};

/// The nine kinds of five card poker hand, weakest first.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub enum Category {
    /// The lowest rank.
    /// No matches
    HighCard,
    /// One Card matches another.
    OnePair,
    /// Two different pair of matching cards.
    TwoPair,
    /// Three of the same value.
    ThreeOfAKind,
    /// Five cards in a sequence
    Straight,
    /// Five cards of the same suit
    Flush,
    /// Three of one value and two of another value
    FullHouse,
    /// Four of the same value.
    FourOfAKind,
    /// Five cards in a sequence all for the same suit.
    StraightFlush,
}

impl Category {
    /// Every category, weakest first.
    pub const ALL: [Category; 9] = [
        Category::HighCard,
        Category::OnePair,
        Category::TwoPair,
        Category::ThreeOfAKind,
        Category::Straight,
        Category::Flush,
        Category::FullHouse,
        Category::FourOfAKind,
        Category::StraightFlush,
    ];

    /// Position in `ALL`, 0 for a high card up to 8 for a straight flush.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values that break ties between two hands of the same category, most
/// significant first.
///
/// Values are card ranks with the Ace as 1. The only place the Ace counts
/// as 14 is the high card of a ten to ace straight (or straight flush).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<u8>", into = "Vec<u8>"))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct TieBreak {
    values: [u8; 5],
    len: u8,
}

impl TieBreak {
    fn new(values: &[u8]) -> Self {
        debug_assert!(values.len() <= 5);
        let mut padded = [0; 5];
        padded[..values.len()].copy_from_slice(values);
        Self {
            values: padded,
            len: values.len() as u8,
        }
    }

    pub fn values(&self) -> &[u8] {
        &self.values[..self.len as usize]
    }
}

/// At most five ranks, each 1 through 14.
impl TryFrom<Vec<u8>> for TieBreak {
    type Error = OddsError;

    fn try_from(values: Vec<u8>) -> Result<Self, Self::Error> {
        if values.len() > 5 {
            return Err(OddsError::InvalidTieBreak(format!(
                "expected at most 5 ranks, got {}",
                values.len()
            )));
        }
        if let Some(bad) = values.iter().find(|&&v| !(1..=ACE_HIGH).contains(&v)) {
            return Err(OddsError::InvalidTieBreak(format!("{bad} is not a rank")));
        }
        Ok(Self::new(&values))
    }
}

impl From<TieBreak> for Vec<u8> {
    fn from(tie_break: TieBreak) -> Self {
        tie_break.values().to_vec()
    }
}

/// The best five card hand that can be made from some cards.
///
/// Ordering is by category first and then by tie break, so comparing two
/// `Rank`s compares the strength of the hands.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Copy)]
pub struct Rank {
    category: Category,
    tie_break: TieBreak,
}

impl Rank {
    fn new(category: Category, tie_break: &[u8]) -> Self {
        Self {
            category,
            tie_break: TieBreak::new(tie_break),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tie_break(&self) -> &[u8] {
        self.tie_break.values()
    }
}

/// Strip the tie break detail.
///
/// This is useful to reduce the cardinality of ranks. For example
/// displaying the possible outcomes of a hand without caring about the
/// specific rank values.
impl From<Rank> for Category {
    fn from(rank: Rank) -> Self {
        rank.category
    }
}

/// The value used for an Ace played high in a straight.
const ACE_HIGH: u8 = 14;

/// Bit(s) a rank occupies in a straight detection set. The Ace sits at
/// both ends so that the wheel and broadway are found the same way.
#[inline]
fn straight_bits(rank: u8) -> u32 {
    if rank == 1 {
        (1 << 1) | (1 << ACE_HIGH)
    } else {
        1 << rank
    }
}

/// Given a set of ranks (see `straight_bits`) find the high card of the
/// highest run of five or more consecutive ranks.
///
/// Returns None if the ranks don't contain a straight.
fn straight_high(value_set: u32) -> Option<u8> {
    // Bit i survives only if bits i, i-1, i-2, i-3, and i-4 are all set.
    //
    //       0000111111100
    //       0001111111000
    //       0011111110000
    //       0111111100000
    //       1111111000000
    //       -------------
    //       0000111000000
    let left =
        value_set & (value_set << 1) & (value_set << 2) & (value_set << 3) & (value_set << 4);
    if left == 0 {
        None
    } else {
        Some((31 - left.leading_zeros()) as u8)
    }
}

/// A rank and how many of the cards have it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Group {
    rank: u8,
    count: u8,
}

/// Per rank counts over a holding, and the ranks present ordered by count
/// and then by rank, largest first.
#[derive(Debug)]
struct RankGroups {
    counts: [u8; 14],
    groups: [Group; 7],
    len: usize,
}

impl RankGroups {
    fn new(counts: [u8; 14]) -> Self {
        let mut groups = [Group::default(); 7];
        let mut len = 0;
        for rank in (1..=13u8).rev() {
            let count = counts[rank as usize];
            if count > 0 && len < groups.len() {
                groups[len] = Group { rank, count };
                len += 1;
            }
        }
        // Stable, so equal counts stay highest rank first.
        groups[..len].sort_by(|a, b| b.count.cmp(&a.count));
        Self {
            counts,
            groups,
            len,
        }
    }

    fn groups(&self) -> &[Group] {
        &self.groups[..self.len]
    }

    fn largest(&self) -> Group {
        self.groups[0]
    }

    /// The highest ranks present other than those in `exclude`.
    fn kickers<'a>(&'a self, exclude: &'a [u8]) -> impl Iterator<Item = u8> + 'a {
        (1..=13u8)
            .rev()
            .filter(move |r| self.counts[*r as usize] > 0 && !exclude.contains(r))
    }
}

/// Highest `n` ranks in a rank bit set, ignoring the Ace high bit.
fn top_ranks(value_set: u32, n: usize) -> impl Iterator<Item = u8> {
    (1..=13u8)
        .rev()
        .filter(move |r| value_set & (1 << r) != 0)
        .take(n)
}

/// Can this turn into a hand rank? There are implementations for slices and
/// vectors of cards and for `CardBitSet`.
pub trait Rankable {
    /// The cards to rank.
    fn cards(&self) -> impl Iterator<Item = Card>;

    /// Rank the cards to find the best 5 card hand.
    ///
    /// This works on any holding of 5, 6, or 7 cards (a 7 card Hold'em
    /// hand being the usual case). Every five card subset is implicitly
    /// considered: categories are tried strongest first and the first one
    /// the cards satisfy wins.
    ///
    /// A holding outside of 5 to 7 cards, one with the same card twice, or
    /// one with five or more of a rank is rejected with
    /// `OddsError::MalformedHolding`.
    ///
    /// # Examples
    /// ```
    /// use holdem_odds::core::{Category, Rankable, parse_cards};
    ///
    /// let hand = parse_cards("2H 2D 8D 8S KD 6S 10H").unwrap();
    /// let rank = hand.rank().unwrap();
    /// assert_eq!(Category::TwoPair, rank.category());
    /// assert_eq!(&[8, 2, 13], rank.tie_break());
    /// ```
    fn rank(&self) -> Result<Rank, OddsError> {
        let mut seen = CardBitSet::new();
        let mut num_cards = 0;
        let mut value_to_count = [0u8; 14];
        let mut suit_counts = [0u8; 4];
        let mut suit_value_sets = [0u32; 4];
        let mut value_set: u32 = 0;

        for c in self.cards() {
            if !seen.insert(c) {
                return Err(OddsError::MalformedHolding(format!(
                    "{} appears more than once",
                    c
                )));
            }
            num_cards += 1;
            let v = c.value.rank();
            let s = c.suit.index();
            value_set |= straight_bits(v);
            value_to_count[v as usize] += 1;
            suit_counts[s] += 1;
            suit_value_sets[s] |= straight_bits(v);
        }

        if !(5..=7).contains(&num_cards) {
            return Err(OddsError::MalformedHolding(format!(
                "expected 5 to 7 cards, got {}",
                num_cards
            )));
        }
        if let Some(v) = value_to_count.iter().position(|&c| c > 4) {
            return Err(OddsError::MalformedHolding(format!(
                "{} cards of rank {}",
                value_to_count[v], v
            )));
        }

        let groups = RankGroups::new(value_to_count);

        // Only one suit can reach five in seven cards, but prefer the
        // longest and then the one with the higher top card regardless.
        let flush = (0..4)
            .filter(|&s| suit_counts[s] >= 5)
            .max_by_key(|&s| (suit_counts[s], top_ranks(suit_value_sets[s], 1).next()));

        if let Some(high) = flush.and_then(|s| straight_high(suit_value_sets[s])) {
            return Ok(Rank::new(Category::StraightFlush, &[high]));
        }

        let largest = groups.largest();
        if largest.count == 4 {
            let quad = largest.rank;
            let mut tie_break = vec![quad];
            tie_break.extend(groups.kickers(&[quad]).take(1));
            return Ok(Rank::new(Category::FourOfAKind, &tie_break));
        }

        if largest.count == 3 {
            // The pair can come from a second set.
            let pair = groups.groups()[1..]
                .iter()
                .filter(|g| g.count >= 2)
                .map(|g| g.rank)
                .max();
            if let Some(pair) = pair {
                return Ok(Rank::new(Category::FullHouse, &[largest.rank, pair]));
            }
        }

        if let Some(s) = flush {
            let ranks: Vec<u8> = top_ranks(suit_value_sets[s], 5).collect();
            return Ok(Rank::new(Category::Flush, &ranks));
        }

        if let Some(high) = straight_high(value_set) {
            return Ok(Rank::new(Category::Straight, &[high]));
        }

        let mut tie_break: Vec<u8> = Vec::with_capacity(5);
        let category = match groups.groups() {
            [set, ..] if set.count == 3 => {
                tie_break.push(set.rank);
                tie_break.extend(groups.kickers(&[set.rank]).take(2));
                Category::ThreeOfAKind
            }
            [high, low, ..] if high.count == 2 && low.count == 2 => {
                tie_break.extend([high.rank, low.rank]);
                tie_break.extend(groups.kickers(&[high.rank, low.rank]).take(1));
                Category::TwoPair
            }
            [pair, ..] if pair.count == 2 => {
                tie_break.push(pair.rank);
                tie_break.extend(groups.kickers(&[pair.rank]).take(3));
                Category::OnePair
            }
            _ => {
                tie_break.extend(groups.kickers(&[]).take(5));
                Category::HighCard
            }
        };
        Ok(Rank::new(category, &tie_break))
    }
}

impl Rankable for Vec<Card> {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for [Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for &[Card] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl<const N: usize> Rankable for [Card; N] {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.iter().copied()
    }
}

impl Rankable for CardBitSet {
    fn cards(&self) -> impl Iterator<Item = Card> {
        self.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use rand::seq::SliceRandom;

    use super::*;
    use crate::core::{parse_cards, CardIter, Deck};

    fn rank_of(text: &str) -> Rank {
        parse_cards(text).unwrap().rank().unwrap()
    }

    /// Try every five card subset and keep the best.
    fn rank_exhaustive(cards: &[Card]) -> Rank {
        CardIter::new(cards, 5)
            .map(|five| five.rank().unwrap())
            .max()
            .unwrap()
    }

    #[test]
    fn test_cmp() {
        assert!(Rank::new(Category::HighCard, &[13, 12, 11, 10, 8])
            < Rank::new(Category::StraightFlush, &[5]));
        assert!(Rank::new(Category::HighCard, &[13]) < Rank::new(Category::FourOfAKind, &[2, 3]));
        assert!(Rank::new(Category::ThreeOfAKind, &[2, 4, 3]) < Rank::new(Category::Straight, &[5]));
    }

    #[test]
    fn test_cmp_high() {
        assert!(
            Rank::new(Category::HighCard, &[9, 7, 5, 4, 2])
                < Rank::new(Category::HighCard, &[9, 7, 5, 4, 3])
        );
    }

    #[test]
    fn test_category_order() {
        for pair in Category::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for (idx, category) in Category::ALL.iter().enumerate() {
            assert_eq!(idx, category.index());
        }
    }

    #[test]
    fn test_high_card_hand() {
        let rank = rank_of("AD 8H 9C 10C 5C");
        assert_eq!(Category::HighCard, rank.category());
        // The Ace is the lowest kicker.
        assert_eq!(&[10, 9, 8, 5, 1], rank.tie_break());
    }

    #[test]
    fn test_flush() {
        let rank = rank_of("AD 8D 9D 10D 5D");
        assert_eq!(Category::Flush, rank.category());
        assert_eq!(&[10, 9, 8, 5, 1], rank.tie_break());
    }

    #[test]
    fn test_full_house() {
        let rank = rank_of("AD AC 9D 9C 9S");
        assert_eq!(Category::FullHouse, rank.category());
        assert_eq!(&[9, 1], rank.tie_break());
    }

    #[test]
    fn test_full_house_is_not_a_set() {
        let rank = rank_of("2C 2D 2H 5S 5C");
        assert_eq!(Category::FullHouse, rank.category());
        assert_eq!(&[2, 5], rank.tie_break());
    }

    #[test]
    fn test_two_pair() {
        let rank = rank_of("AD AC 9D 9C 10S");
        assert_eq!(Category::TwoPair, rank.category());
        assert_eq!(&[9, 1, 10], rank.tie_break());
    }

    #[test]
    fn test_one_pair() {
        let rank = rank_of("AD AC 9D 8C 10S");
        assert_eq!(Category::OnePair, rank.category());
        assert_eq!(&[1, 10, 9, 8], rank.tie_break());
    }

    #[test]
    fn test_four_of_a_kind() {
        let rank = rank_of("AD AC AS AH 10S");
        assert_eq!(Category::FourOfAKind, rank.category());
        assert_eq!(&[1, 10], rank.tie_break());
    }

    #[test]
    fn test_wheel() {
        let rank = rank_of("AC 2D 3H 4S 5C");
        assert_eq!(Category::Straight, rank.category());
        assert_eq!(&[5], rank.tie_break());
    }

    #[test]
    fn test_broadway() {
        let broadway = rank_of("10C JD QH KS AC");
        assert_eq!(Category::Straight, broadway.category());
        assert_eq!(&[14], broadway.tie_break());
        assert!(broadway > rank_of("AC 2D 3H 4S 5C"));
    }

    #[test]
    fn test_no_wrap_around() {
        let rank = rank_of("QC KD AH 2S 3C");
        assert_eq!(Category::HighCard, rank.category());
    }

    #[test]
    fn test_straight() {
        let rank = rank_of("2C 3S 4H 5S 6D");
        assert_eq!(Category::Straight, rank.category());
        assert_eq!(&[6], rank.tie_break());
    }

    #[test]
    fn test_three_of_a_kind() {
        let rank = rank_of("2C 2S 2H 5S 6D");
        assert_eq!(Category::ThreeOfAKind, rank.category());
        assert_eq!(&[2, 6, 5], rank.tie_break());
    }

    #[test]
    fn test_rank_seven_straight_flush() {
        let rank = rank_of("AD KD QD JD 10D 9D 8D");
        assert_eq!(Rank::new(Category::StraightFlush, &[14]), rank);
    }

    #[test]
    fn test_rank_seven_straight_flush_wheel() {
        // Make sure that we pick up the wheel straight flush
        // over different straight.
        let rank = rank_of("2D 3D 4D 5D 6H 7C AD");
        assert_eq!(Rank::new(Category::StraightFlush, &[5]), rank);
    }

    #[test]
    fn test_rank_seven_find_best_with_wheel() {
        let rank = rank_of("6D KD AD 2D 5D 4D 3D");
        assert_eq!(Rank::new(Category::StraightFlush, &[6]), rank);
    }

    #[test]
    fn test_flush_beats_straight() {
        let rank = rank_of("4H 5H 6C 7H 8D 9H KH");
        assert_eq!(Category::Flush, rank.category());
        assert_eq!(&[13, 9, 7, 5, 4], rank.tie_break());
    }

    #[test]
    fn test_flush_and_straight_are_not_straight_flush() {
        // A straight and a flush that only share some cards.
        let rank = rank_of("5H 6H 7H 8H 9C 2H 10D");
        assert_eq!(Category::Flush, rank.category());
    }

    #[test]
    fn test_six_card_flush_keeps_top_five() {
        let rank = rank_of("2S 4S 6S 8S 10S QS");
        assert_eq!(Category::Flush, rank.category());
        assert_eq!(&[12, 10, 8, 6, 4], rank.tie_break());
    }

    #[test]
    fn test_rank_seven_straights() {
        let straights = [
            ("2H 3C 4S 5D 6D 10S KH", 6),
            ("3C 4S 5D 6D 7H 10S KH", 7),
            ("4S 5D 6D 7H 8C 10S KH", 8),
            ("5C 6C 7H 8H 9D AH AD", 9),
            ("6C 7C 8H 9H 10S KC 6S", 10),
            ("7C 8H 9H 10S KC 6S JH", 11),
            ("8H 9H 10S QC 6S JH AS", 12),
            ("9H 10S QC 6S JH KS KC", 13),
            ("10S QC 6S JH KS AC 5H", 14),
        ];
        for (text, high) in straights {
            assert_eq!(Rank::new(Category::Straight, &[high]), rank_of(text), "{text}");
        }
    }

    #[test]
    fn test_longest_run_uses_top() {
        let rank = rank_of("3C 4D 5H 6S 7C 8D 9H");
        assert_eq!(Rank::new(Category::Straight, &[9]), rank);
    }

    #[test]
    fn test_rank_seven_four_kind() {
        let rank = rank_of("2S 2H 2D 2C KD 9H 4S");
        assert_eq!(Rank::new(Category::FourOfAKind, &[2, 13]), rank);
    }

    #[test]
    fn test_rank_seven_four_plus_set() {
        // Four of a kind plus a set.
        let rank = rank_of("2S 2H 2D 2C 8D 8S 8C");
        assert_eq!(Rank::new(Category::FourOfAKind, &[2, 8]), rank);
    }

    #[test]
    fn test_rank_seven_full_house_two_sets() {
        // We have two sets use the highest set.
        let rank = rank_of("AS 2H 2D 2C 8D 8S 8C");
        assert_eq!(Rank::new(Category::FullHouse, &[8, 2]), rank);
    }

    #[test]
    fn test_rank_seven_full_house_pair_beats_second_set() {
        let rank = rank_of("8H 8D 8C 2S 2D 2C KD");
        assert_eq!(Rank::new(Category::FullHouse, &[8, 2]), rank);

        let rank = rank_of("8H 8D 8C 2S 2D KC KD");
        assert_eq!(Rank::new(Category::FullHouse, &[8, 13]), rank);
    }

    #[test]
    fn test_rank_seven_full_house_two_pair() {
        // Test to make sure that we pick the best pair.
        let rank = rank_of("2H 2D 2C 8D 8S KD KS");
        assert_eq!(Rank::new(Category::FullHouse, &[2, 13]), rank);
    }

    #[test]
    fn test_two_pair_from_three_pair() {
        let rank = rank_of("2H 2D 8D 8S KD KS 10H");
        assert_eq!(Rank::new(Category::TwoPair, &[13, 8, 10]), rank);
    }

    #[test]
    fn test_two_pair_kicker_from_third_pair() {
        let rank = rank_of("2H 2D 8D 8S KD KS 3H");
        assert_eq!(Rank::new(Category::TwoPair, &[13, 8, 3]), rank);
    }

    #[test]
    fn test_rank_seven_two_pair() {
        let rank = rank_of("2H 2D 8D 8S KD 6S 10H");
        assert_eq!(Rank::new(Category::TwoPair, &[8, 2, 13]), rank);
    }

    #[test]
    fn test_too_few_cards() {
        let cards = parse_cards("AD 8H").unwrap();
        assert!(matches!(cards.rank(), Err(OddsError::MalformedHolding(_))));
    }

    #[test]
    fn test_too_many_cards() {
        let cards = parse_cards("AD 8H 2C 3C 4C 5C 6C 7C").unwrap();
        assert!(matches!(cards.rank(), Err(OddsError::MalformedHolding(_))));
    }

    #[test]
    fn test_same_card_twice() {
        let cards = parse_cards("AD AD 2C 3C 4C").unwrap();
        assert!(matches!(cards.rank(), Err(OddsError::MalformedHolding(_))));
    }

    #[test]
    fn test_rank_bit_set() {
        let set: CardBitSet = parse_cards("AC 2D 3H 4S 5C").unwrap().into_iter().collect();
        assert_eq!(Rank::new(Category::Straight, &[5]), set.rank().unwrap());
    }

    #[test]
    fn test_category_from_rank() {
        let rank = rank_of("2C 2S 2H 5S 6D");
        assert_eq!(Category::ThreeOfAKind, Category::from(rank));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rank_roundtrip() {
        let rank = rank_of("AD AC 9D 9C 10S");
        let json = serde_json::to_string(&rank).unwrap();
        assert_eq!(r#"{"category":"TwoPair","tie_break":[9,1,10]}"#, json);

        let parsed: Rank = serde_json::from_str(&json).unwrap();
        assert_eq!(rank, parsed);
        assert_eq!(&[9, 1, 10], parsed.tie_break());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_rejects_bad_tie_break() {
        let too_long = r#"{"category":"HighCard","tie_break":[13,12,11,10,8,2]}"#;
        assert!(serde_json::from_str::<Rank>(too_long).is_err());

        let not_a_rank = r#"{"category":"Straight","tie_break":[15]}"#;
        assert!(serde_json::from_str::<Rank>(not_a_rank).is_err());

        // The padded layout is not the wire format.
        let padded = r#"{"category":"Straight","tie_break":{"values":[5,0,0,0,0],"len":9}}"#;
        assert!(serde_json::from_str::<Rank>(padded).is_err());
    }

    #[test]
    fn test_tie_break_try_from() {
        let tie_break = TieBreak::try_from(vec![14]).unwrap();
        assert_eq!(&[14], tie_break.values());
        assert!(matches!(
            TieBreak::try_from(vec![1, 2, 3, 4, 5, 6]),
            Err(OddsError::InvalidTieBreak(_))
        ));
        assert!(matches!(
            TieBreak::try_from(vec![0]),
            Err(OddsError::InvalidTieBreak(_))
        ));
    }

    #[test]
    fn test_category_names() {
        assert_eq!("Pair", Category::OnePair.to_string());
        assert_eq!("Straight Flush", Category::StraightFlush.to_string());
    }

    #[test]
    fn test_matches_exhaustive_on_every_category() {
        let holdings = [
            "AD KD QD JD 10D 9D 8D",
            "2S 2H 2D 2C KD 9H 4S",
            "AS 2H 2D 2C 8D 8S 8C",
            "4H 5H 6C 7H 8D 9H KH",
            "10S QC 6S JH KS AC 5H",
            "2C 2S 2H 5S 6D JC QD",
            "2H 2D 8D 8S KD KS 10H",
            "AD AC 9D 8C 10S 3H 4D",
            "AD 8H 9C 10C 5C 3D 2S",
        ];
        for text in holdings {
            let cards = parse_cards(text).unwrap();
            assert_eq!(rank_exhaustive(&cards), cards.rank().unwrap(), "{text}");
        }
    }

    #[test]
    fn test_matches_exhaustive_on_random_holdings() {
        let mut rng = rand::rng();
        let mut deck: Vec<Card> = Deck::standard().to_vec();

        for _ in 0..5_000 {
            deck.shuffle(&mut rng);
            for size in 5..=7 {
                let cards = &deck[..size];
                let expected = rank_exhaustive(cards);
                let actual = cards.rank().unwrap();
                assert_eq!(expected, actual, "{:?}", cards);
            }
        }
    }
}
