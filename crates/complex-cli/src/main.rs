//! cplx: command-line calculator over the `lib_complex` value type.
//!
//! Operands are written `re,im` for complex values and as a bare number for
//! real scalars, e.g. `cplx calc 3,4 / -1,2`.

mod config;
mod eval;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use config::CliConfig;
use eval::{BinaryOp, Evaluator, Exponent, Operand, Report};
use output::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "cplx")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Decimal digits in text output
    #[arg(short, long)]
    precision: Option<usize>,

    /// Path to a TOML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show parts, norm, argument and conjugate of a value
    Show {
        /// Value as re,im
        #[arg(allow_hyphen_values = true)]
        value: Operand,
    },

    /// Evaluate a binary expression
    Calc {
        /// Left operand (re,im or scalar)
        #[arg(allow_hyphen_values = true)]
        lhs: Operand,

        /// Operator: + - * /
        #[arg(allow_hyphen_values = true)]
        op: BinaryOp,

        /// Right operand (re,im or scalar)
        #[arg(allow_hyphen_values = true)]
        rhs: Operand,

        /// Fail on a zero-magnitude divisor instead of returning NaN/infinity
        #[arg(long)]
        checked: bool,
    },

    /// Raise a value to an integer or real power
    Pow {
        /// Base as re,im
        #[arg(allow_hyphen_values = true)]
        value: Operand,

        /// Integer exponent
        #[arg(long, allow_negative_numbers = true, conflicts_with = "real", required_unless_present = "real")]
        int: Option<i32>,

        /// Real exponent
        #[arg(long, allow_negative_numbers = true)]
        real: Option<f64>,
    },

    /// Complex exponential
    Exp {
        /// Exponent as re,im
        #[arg(allow_hyphen_values = true)]
        value: Operand,
    },

    /// Build a value from polar form
    Polar {
        /// Magnitude
        #[arg(allow_negative_numbers = true)]
        r: f64,

        /// Angle in radians
        #[arg(allow_negative_numbers = true)]
        theta: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let base = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {:?}", path);
            config::load_config(path)?
        }
        None => CliConfig::default(),
    };

    let checked = matches!(cli.command, Commands::Calc { checked: true, .. });
    let config = base.with_overrides(cli.precision, cli.format, checked)?;
    let evaluator = Evaluator::new(config.eval.checked);

    let report = run_command(&evaluator, cli.command)?;

    let stdout = std::io::stdout();
    output::write_report(&mut stdout.lock(), &report, &config.output)?;

    Ok(())
}

fn run_command(evaluator: &Evaluator, command: Commands) -> Result<Report> {
    let report = match command {
        Commands::Show { value } => {
            tracing::info!("Showing {}", value);
            evaluator.show(value.to_complex())
        }
        Commands::Calc { lhs, op, rhs, .. } => {
            tracing::info!("Calculating {} {} {}", lhs, op, rhs);
            evaluator.binary(lhs, op, rhs)?
        }
        Commands::Pow { value, int, real } => {
            let exponent = match (int, real) {
                (Some(n), _) => Exponent::Integer(n),
                (None, Some(alpha)) => Exponent::Real(alpha),
                (None, None) => anyhow::bail!("An exponent is required: --int N or --real A"),
            };
            tracing::info!("Raising {} to {:?}", value, exponent);
            evaluator.power(value.to_complex(), exponent)
        }
        Commands::Exp { value } => {
            tracing::info!("Exponential of {}", value);
            evaluator.exp(value.to_complex())
        }
        Commands::Polar { r, theta } => {
            tracing::info!("Polar form r={} theta={}", r, theta);
            evaluator.polar(r, theta)
        }
    };
    Ok(report)
}
