use super::{Card, CardBitSet};

/// The binomial coefficient C(m, k): how many `k` sized subsets a pool of
/// `m` items has. Zero when `k > m`.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::binomial;
///
/// assert_eq!(2_118_760, binomial(50, 5));
/// assert_eq!(1, binomial(45, 0));
/// assert_eq!(0, binomial(3, 4));
/// ```
pub fn binomial(m: usize, k: usize) -> u64 {
    if k > m {
        return 0;
    }
    // Use the smaller side of the symmetry to keep the products small.
    let k = k.min(m - k) as u64;
    let m = m as u64;
    // Each partial product is itself a binomial so the division is exact.
    (0..k).fold(1, |acc, i| acc * (m - i) / (i + 1))
}

/// Step from one `k` bit pattern to the next larger pattern with the same
/// number of bits set.
///
/// If `x` looks like `x'01^a10^b` in binary the result is `x'10^(b+1)1^a`.
/// Returns `None` when there's no larger pattern below `limit`, or when the
/// carry would run off the top of the `u64`.
#[inline]
fn next_pattern(x: u64, limit: u64) -> Option<u64> {
    if x == 0 {
        // The empty pattern has no successor.
        return None;
    }
    // Lowest set bit.              u = 0'00^a10^b
    let u = x & x.wrapping_neg();
    // Carry into the run above it. v = x'10^a00^b
    let v = x.checked_add(u)?;
    // Repack the bits the carry cleared into the bottom.
    // v ^ x = 0'11^a10^b, divided by u that is 0'0^b1^(a+2)
    let next = v + (((v ^ x) / u) >> 2);
    (next < limit).then_some(next)
}

/// Every pattern of `k` set bits within the low `width` bits of a `u64`,
/// smallest first.
///
/// Pattern `p` stands for the subset of a pool holding the items at the
/// set bit positions of `p`. For `k == 0` exactly one pattern, the empty
/// one, is produced.
///
/// # Examples
///
/// ```
/// use holdem_odds::core::Combinations;
///
/// let all: Vec<u64> = Combinations::new(4, 2).collect();
/// assert_eq!(vec![0b0011, 0b0101, 0b0110, 0b1001, 0b1010, 0b1100], all);
///
/// let empty: Vec<u64> = Combinations::new(50, 0).collect();
/// assert_eq!(vec![0], empty);
/// ```
#[derive(Debug, Clone)]
pub struct Combinations {
    /// The pattern to hand out next, or `None` when done.
    next: Option<u64>,
    /// Exclusive upper bound on patterns.
    limit: u64,
    /// How many patterns are left to hand out.
    remaining: u64,
}

impl Combinations {
    /// All `k` subsets of a pool `width` items wide.
    ///
    /// # Panics
    ///
    /// Panics if `width` is 64 or more; a pool has to fit in the bits of a
    /// `u64` with room for the end of iteration bound.
    pub fn new(width: usize, k: usize) -> Self {
        assert!(width < 64, "pool of {} is too wide for a bit pattern", width);
        if k > width {
            return Self {
                next: None,
                limit: 0,
                remaining: 0,
            };
        }
        Self {
            next: Some((1u64 << k) - 1),
            limit: 1u64 << width,
            remaining: binomial(width, k),
        }
    }

    /// Split the patterns of `new(width, k)` into contiguous runs.
    ///
    /// All the patterns whose highest set bit is `t` are next to each other
    /// in the iteration order. So there is one run per possible highest bit,
    /// `k - 1` through `width - 1`, and chaining the runs in order gives
    /// back exactly the sequence of `new(width, k)`. Each run is independent
    /// and can be handed to a different worker.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::Combinations;
    ///
    /// let runs = Combinations::partition(6, 3);
    /// assert_eq!(4, runs.len());
    ///
    /// let chained: Vec<u64> = runs.into_iter().flatten().collect();
    /// let direct: Vec<u64> = Combinations::new(6, 3).collect();
    /// assert_eq!(direct, chained);
    /// ```
    pub fn partition(width: usize, k: usize) -> Vec<Combinations> {
        if k == 0 || k > width {
            return vec![Combinations::new(width, k)];
        }
        assert!(width < 64, "pool of {} is too wide for a bit pattern", width);
        let low_bits = (1u64 << (k - 1)) - 1;
        (k - 1..width)
            .map(|top| Combinations {
                next: Some((1u64 << top) | low_bits),
                limit: 1u64 << (top + 1),
                remaining: binomial(top, k - 1),
            })
            .collect()
    }

    /// Whether every pattern this can produce indexes inside a pool of
    /// `width` items.
    pub fn fits(&self, width: usize) -> bool {
        width >= 64 || self.limit <= 1u64 << width
    }

    /// Turn a pattern into the cards of `pool` at its set bit positions.
    ///
    /// # Panics
    ///
    /// Panics if `pattern` has a bit set at or above `pool.len()`.
    #[inline]
    pub fn select(pattern: u64, pool: &[Card]) -> CardBitSet {
        let mut result = CardBitSet::new();
        let mut bits = pattern;
        while bits != 0 {
            let idx = bits.trailing_zeros() as usize;
            result.insert(pool[idx]);
            bits &= bits - 1;
        }
        result
    }
}

impl Iterator for Combinations {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = next_pattern(current, self.limit);
        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Combinations {}

/// Given some cards create every possible group of `num_cards` of them.
///
/// Groups come out in the order of `Combinations` over the positions of
/// `possible_cards`.
#[derive(Debug, Clone)]
pub struct CardIter<'a> {
    /// All the possible cards that can be dealt
    possible_cards: &'a [Card],
    /// The bit patterns still to visit.
    patterns: Combinations,
}

impl<'a> CardIter<'a> {
    /// Create a new `CardIter` from a slice of cards.
    /// `num_cards` represents how many cards should be in each group.
    ///
    /// # Examples
    ///
    /// ```
    /// use holdem_odds::core::{CardIter, parse_cards};
    ///
    /// let pool = parse_cards("2C 3C 4C").unwrap();
    /// assert_eq!(3, CardIter::new(&pool, 2).count());
    /// ```
    pub fn new(possible_cards: &'a [Card], num_cards: usize) -> Self {
        Self::with_patterns(possible_cards, Combinations::new(possible_cards.len(), num_cards))
    }

    /// Walk only the given patterns, usually one run from
    /// `Combinations::partition`.
    ///
    /// # Panics
    ///
    /// Panics if `patterns` reaches past the end of `possible_cards`.
    pub fn with_patterns(possible_cards: &'a [Card], patterns: Combinations) -> Self {
        assert!(
            patterns.fits(possible_cards.len()),
            "patterns are wider than the pool of {}",
            possible_cards.len()
        );
        Self {
            possible_cards,
            patterns,
        }
    }
}

impl Iterator for CardIter<'_> {
    type Item = CardBitSet;

    fn next(&mut self) -> Option<CardBitSet> {
        self.patterns
            .next()
            .map(|pattern| Combinations::select(pattern, self.possible_cards))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.patterns.size_hint()
    }
}

impl ExactSizeIterator for CardIter<'_> {}
