use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, instrument, trace, warn};

use crate::core::{
    binomial, Card, CardIter, Combinations, Deck, OddsError, Rankable,
};

use super::{CalculatorConfig, HandDistribution, Situation};

/// Calculator for the odds of each final hand category in Texas Hold'em.
///
/// Given the hole cards and the board so far, this calculator will
/// enumerate every way the remaining deck can complete the board to five
/// cards, rank the best hand of each seven card holding, and tally the
/// categories.
#[derive(Debug)]
pub struct OddsCalculator {
    situation: Situation,
    /// Cards that can still be dealt, in canonical deck order.
    remaining_cards: Vec<Card>,
    config: CalculatorConfig,
}

impl OddsCalculator {
    /// Create a new OddsCalculator with the default configuration.
    ///
    /// # Arguments
    /// * `hole` - The player's two hole cards
    /// * `board` - The community cards dealt so far (0, 3, 4, or 5)
    ///
    /// # Example
    /// ```
    /// use holdem_odds::core::parse_cards;
    /// use holdem_odds::holdem::OddsCalculator;
    ///
    /// let hole = parse_cards("JS 10S").unwrap();
    /// let board = parse_cards("AS KS QS").unwrap();
    ///
    /// let calc = OddsCalculator::new(&hole, &board).unwrap();
    /// assert_eq!(47, calc.remaining_cards().len());
    /// assert_eq!(2, calc.cards_to_draw());
    /// ```
    pub fn new(hole: &[Card], board: &[Card]) -> Result<Self, OddsError> {
        Self::with_config(hole, board, CalculatorConfig::default())
    }

    /// Create a new OddsCalculator, validating both the cards and the
    /// configuration.
    pub fn with_config(
        hole: &[Card],
        board: &[Card],
        config: CalculatorConfig,
    ) -> Result<Self, OddsError> {
        let situation = Situation::new(hole, board)?;
        Self::from_situation(situation, config)
    }

    pub fn from_situation(
        situation: Situation,
        config: CalculatorConfig,
    ) -> Result<Self, OddsError> {
        config.validate()?;
        if !config.parallel && config.threads.is_some() {
            warn!(threads = ?config.threads, "Thread count is ignored when running sequentially");
        }
        let remaining_cards = Deck::standard().remaining(situation.known());
        Ok(Self {
            situation,
            remaining_cards,
            config,
        })
    }

    /// Calculate the distribution of hand categories over every possible
    /// board completion.
    ///
    /// The board in Texas Hold'em always has 5 cards total (flop + turn +
    /// river). This method determines how many cards need to be dealt based
    /// on the current board size. When the board is already complete there
    /// is exactly one completion, the empty one.
    ///
    /// # Example
    /// ```
    /// use holdem_odds::core::{Category, parse_cards};
    /// use holdem_odds::holdem::OddsCalculator;
    ///
    /// let hole = parse_cards("JS 10S").unwrap();
    /// let board = parse_cards("AS KS QS 2D").unwrap();
    ///
    /// let calc = OddsCalculator::new(&hole, &board).unwrap();
    /// let dist = calc.calculate().unwrap();
    ///
    /// assert_eq!(46, dist.total());
    /// // Already a royal flush, whatever the river.
    /// assert_eq!(46, dist.count(Category::StraightFlush));
    /// ```
    #[instrument(level = "debug", skip_all)]
    pub fn calculate(&self) -> Result<HandDistribution, OddsError> {
        let pool = self.remaining_cards.len();
        let draw = self.cards_to_draw();
        let combinations = self.combinations();
        let parallel = self.config.should_parallelize(combinations);
        debug!(
            pool,
            draw, combinations, parallel, "Enumerating board completions"
        );

        let distribution = if parallel {
            self.calculate_parallel()?
        } else {
            self.tally(Combinations::new(pool, draw))?
        };

        debug!(total = distribution.total(), "Finished enumeration");
        Ok(distribution)
    }

    /// Split the completions into runs and tally each on a worker.
    fn calculate_parallel(&self) -> Result<HandDistribution, OddsError> {
        let runs = Combinations::partition(self.remaining_cards.len(), self.cards_to_draw());
        debug!(runs = runs.len(), threads = ?self.config.threads, "Partitioned completions");

        let work = move || {
            runs.into_par_iter()
                .enumerate()
                .map(|(idx, run)| {
                    trace!(run = idx, size = run.len(), "Tallying run");
                    self.tally(run)
                })
                .try_reduce(HandDistribution::default, |a, b| Ok(a.merge(b)))
        };

        match self.config.threads {
            Some(threads) => ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?
                .install(work),
            None => work(),
        }
    }

    /// Rank every completion in `patterns` and count the categories.
    fn tally(&self, patterns: Combinations) -> Result<HandDistribution, OddsError> {
        let known = self.situation.known();
        let mut distribution = HandDistribution::new();
        for completion in CardIter::with_patterns(&self.remaining_cards, patterns) {
            let holding = known | completion;
            let rank = holding.rank()?;
            distribution.add(rank.category());
        }
        Ok(distribution)
    }

    /// How many community cards are still to be dealt.
    pub fn cards_to_draw(&self) -> usize {
        self.situation.board().cards_to_come()
    }

    /// How many completions `calculate` will evaluate.
    pub fn combinations(&self) -> u64 {
        binomial(self.remaining_cards.len(), self.cards_to_draw())
    }

    pub fn situation(&self) -> &Situation {
        &self.situation
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Get the remaining cards that can be dealt
    pub fn remaining_cards(&self) -> &[Card] {
        &self.remaining_cards
    }
}
