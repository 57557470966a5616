//! Tracing setup for the command line.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// CLI arguments for controlling verbosity and logging output.
///
/// A single `-v` only echoes the parsed cards. Each further `-v` turns up
/// the log level.
#[derive(clap::Args, Debug, Clone)]
pub struct TracingArgs {
    /// Echo the parsed hand and board. Repeat to increase logging
    /// verbosity (-vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,

    /// Suppress all logging except warnings and errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Log output format: compact, pretty, or json
    #[arg(long = "log-format", default_value = "compact")]
    pub log_format: LogFormat,
}

/// Available log output formats.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Compact single-line format (default)
    #[default]
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for machine parsing
    Json,
}

impl TracingArgs {
    /// Whether the parsed cards should be echoed back.
    pub fn echo(&self) -> bool {
        self.verbosity > 0
    }

    fn level(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbosity {
            0 | 1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Initialize the tracing subscriber based on CLI arguments.
    ///
    /// If `RUST_LOG` is set it wins, otherwise the level comes from the
    /// verbosity flags. Logs go to stderr so they never mix with the odds.
    ///
    /// # Panics
    ///
    /// Panics if the subscriber has already been set.
    pub fn init_tracing(&self) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            let level = self.level();
            EnvFilter::new(format!("{level},holdem_odds={level}"))
        };

        let registry = tracing_subscriber::registry().with(filter);
        match self.log_format {
            LogFormat::Compact => registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init(),
            LogFormat::Pretty => registry
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init(),
            LogFormat::Json => registry
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init(),
        }
    }
}
