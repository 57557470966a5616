/// Module for the validated hole cards and board.
mod situation;
/// Export `Hole`, `Board`, and `Situation`
pub use self::situation::{Board, Hole, Situation};

/// Module with the knobs for how a calculation is run.
mod config;
/// Export `CalculatorConfig`
pub use self::config::CalculatorConfig;

/// Module for the tally of hand categories.
mod distribution;
/// Export `HandDistribution`
pub use self::distribution::HandDistribution;

/// Module for calculating hand category odds by enumerating all possible
/// board completions.
mod odds_calculator;
/// Export `OddsCalculator`
pub use self::odds_calculator::OddsCalculator;
