//! `hand_odds`: the Texas Hold'em hand odds calculator.
//!
//! Prints how likely each final hand category is, given your two hole cards
//! and whatever is on the board so far.

mod tracing_args;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use holdem_odds::core::{parse_cards, Card, Category, OddsError};
use holdem_odds::holdem::{CalculatorConfig, HandDistribution, OddsCalculator};
use thiserror::Error;
use tracing::debug;

use crate::tracing_args::TracingArgs;

#[derive(Parser, Debug)]
#[command(
    name = "hand_odds",
    about = "The Texas Hold'em poker odds calculator",
    long_about = "Calculates the odds of ending up with each kind of poker hand, \
                  given your two hole cards and the board so far.\n\n\
                  Cards are written as [value][suit].\n\
                  Suits: C = clubs, D = diamonds, H = hearts, S = spades.\n\
                  Values: A = ace, K = king, Q = queen, J = jack, 2 ... 10.\n\n\
                  Example: hand_odds -a 'KS QS'\n\
                  Finds the odds pre-flop with a king and queen of spades."
)]
struct Args {
    /// Your hand as a whitespace separated list of cards
    #[arg(short = 'a', value_name = "HAND")]
    hand: Option<String>,

    /// The board as a whitespace separated list of cards (0, 3, 4, or 5)
    #[arg(short = 'b', value_name = "BOARD", default_value = "")]
    board: String,

    /// Tracing/logging options
    #[command(flatten)]
    tracing: TracingArgs,

    /// Print the odds as JSON
    #[arg(long)]
    json: bool,

    /// List the strongest hands first
    #[arg(long)]
    strongest_first: bool,

    /// Number of worker threads (defaults to one per core)
    #[arg(long, value_name = "N")]
    threads: Option<usize>,

    /// Don't split the work across threads
    #[arg(long)]
    sequential: bool,
}

#[derive(Error, Debug)]
enum CliError {
    #[error("You must give two hole cards with -a")]
    MissingHand,

    #[error("Error parsing your hole cards: {0}")]
    Hand(#[source] OddsError),

    #[error("Error parsing the board: {0}")]
    Board(#[source] OddsError),

    #[error(transparent)]
    Odds(#[from] OddsError),

    #[error("Unable to serialize the odds: {0}")]
    Json(#[from] serde_json::Error),
}

/// One line of the JSON output.
#[derive(serde::Serialize)]
struct CategoryOdds {
    category: Category,
    name: &'static str,
    count: u64,
    percentage: f64,
}

/// The JSON output.
#[derive(serde::Serialize)]
struct Report<'a> {
    hand: &'a [Card],
    board: &'a [Card],
    total: u64,
    categories: Vec<CategoryOdds>,
}

fn cards_to_string(cards: &[Card]) -> String {
    cards
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn ordered(args: &Args, dist: &HandDistribution) -> Vec<(Category, u64, f64)> {
    if args.strongest_first {
        dist.iter_strongest_first().collect()
    } else {
        dist.iter().collect()
    }
}

fn print_table(args: &Args, dist: &HandDistribution) {
    for (category, count, pct) in ordered(args, dist) {
        println!("{:<16} {:>10} {:>7.2}%", category.name(), count, pct);
    }
    println!("Total: {} possible boards", dist.total());
}

fn print_json(
    args: &Args,
    hand: &[Card],
    board: &[Card],
    dist: &HandDistribution,
) -> Result<(), CliError> {
    let report = Report {
        hand,
        board,
        total: dist.total(),
        categories: ordered(args, dist)
            .into_iter()
            .map(|(category, count, percentage)| CategoryOdds {
                category,
                name: category.name(),
                count,
                percentage,
            })
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let hand_text = args.hand.as_deref().ok_or(CliError::MissingHand)?;

    let hand = parse_cards(hand_text).map_err(CliError::Hand)?;
    if args.tracing.echo() {
        println!("Your hole cards: {}", cards_to_string(&hand));
    }

    let board = parse_cards(&args.board).map_err(CliError::Board)?;
    if args.tracing.echo() {
        println!("The board: {}", cards_to_string(&board));
    }

    let mut config = if args.sequential {
        CalculatorConfig::sequential()
    } else {
        CalculatorConfig::new()
    };
    if let Some(threads) = args.threads {
        config = config.with_threads(threads);
    }
    debug!(?config, "Building calculator");

    let calc = OddsCalculator::with_config(&hand, &board, config)?;
    let dist = calc.calculate()?;

    if args.json {
        print_json(args, &hand, &board, &dist)
    } else {
        print_table(args, &dist);
        Ok(())
    }
}

/// Exit status for a command line clap couldn't turn into `Args`. Help
/// goes to stdout with a zero exit; usage errors are failures.
fn parse_status(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        1
    } else {
        0
    }
}

/// Exit status for the outcome of `run`.
fn run_status(result: &Result<(), CliError>) -> u8 {
    match result {
        Ok(()) => 0,
        Err(_) => 1,
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(parse_status(&e));
        }
    };
    args.tracing.init_tracing();

    let result = run(&args);
    if let Err(e) = &result {
        eprintln!("{e}");
        if matches!(e, CliError::MissingHand) {
            let _ = Args::command().print_help();
        }
    }
    ExitCode::from(run_status(&result))
}
