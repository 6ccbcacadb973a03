use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "decfield",
    version,
    about = "Decimal-constrained input fields: validate, format, and try them in a terminal form"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Check a value against the decimal input grammar")]
    Check {
        #[arg(help = "Candidate value, as it would be typed", allow_hyphen_values = true)]
        value: String,

        #[arg(long, help = "Use the stricter amount length cap")]
        amount: bool,

        #[arg(long, default_value = "text", help = "Output format")]
        output: OutputFormat,
    },

    #[command(about = "Run a value through the commit-time formatting pass")]
    Format {
        #[arg(help = "Value to settle, grouping spaces allowed")]
        value: String,

        #[arg(long, help = "Use the stricter amount rules (zero is rejected)")]
        amount: bool,

        #[arg(long, help = "Print the raw number instead of the grouped form")]
        raw: bool,

        #[arg(long, default_value = "text", help = "Output format")]
        output: OutputFormat,
    },

    #[command(about = "Interactive terminal form with live decimal fields")]
    Form {
        #[arg(long, help = "TOML profile of field configurations")]
        config: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
