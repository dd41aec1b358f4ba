//! fillseq binary.
//!
//! Runs two input-collection examples back to back: first a loop that
//! mutates its own control variable from a failure branch, then the
//! corrected collector that validates input without touching its index.
//!
//! # Usage
//!
//! ```bash
//! # Run both examples, typing one value per line
//! fillseq
//!
//! # Script the run
//! printf '1\n2\n3\n5\n\nabc\n7\n9\n' | fillseq
//!
//! # Use a different sequence length
//! fillseq --config demo.toml
//! ```

use clap::{Parser, ValueEnum};
use fillseq::cli::CliConfig;
use fillseq::{demo, Result};
use std::io;
use std::path::PathBuf;
use tracing::error;

#[derive(Parser)]
#[command(
    name = "fillseq",
    version = env!("CARGO_PKG_VERSION"),
    about = "Contrast a loop that mutates its own control variable with a corrected input collector",
    long_about = r#"
Runs two interactive examples back to back. The first fills a sequence with a
loop that steps its own index backwards on a failed conversion, the pattern
ISO/IEC 24772-1 (Table 1 #12) prohibits. The second collects the same number
of values with validation kept out of the index arithmetic: invalid lines are
re-prompted, and 'quit', 'cancel', or end of input stops collection.

Values are read from standard input, one per line.
    "#
)]
struct Cli {
    /// Enable verbose logging (use multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    quiet: bool,

    /// Set log level (overrides --verbose/--quiet)
    #[arg(long, value_enum)]
    log: Option<LogLevel>,

    /// Set log output format
    #[arg(long, value_enum, default_value = "pretty")]
    log_format: LogFormat,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = setup_logging(cli.verbose, cli.quiet, cli.log, cli.log_format) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    let config = match CliConfig::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    // Cancellation is handled inside the driver; anything that reaches this
    // point is a real failure.
    if let Err(e) = demo::run(&mut input, &mut output, &config) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn setup_logging(
    verbose: u8,
    quiet: bool,
    log_level: Option<LogLevel>,
    log_format: LogFormat,
) -> Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if let Some(level) = log_level {
        EnvFilter::new(match level {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        })
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr; standard output carries the demo transcript.
    let formatter = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_level(true)
        .with_writer(io::stderr);

    match log_format {
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(formatter)
                .with(filter)
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(formatter.json())
                .with(filter)
                .init();
        }
    }

    Ok(())
}
