use crate::io::output::OutputFormat;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uniqmap")]
#[command(about = "Order-preserving sequence deduplication", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output flags shared by the rendering commands
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputArgs {
    /// Output format (defaults to the config file setting, then terminal)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plain output (no colors, no emoji)
    #[arg(long)]
    pub plain: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Remove repeated values from a sequence, keeping first occurrences
    Dedupe {
        /// Sequence values, e.g. `1 2 2 3` or "[1, 2, 2, 3]" (read from stdin when omitted)
        #[arg(allow_negative_numbers = true)]
        values: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render the dedupe and counter demo page
    Demo {
        /// Override the literal sequence shown on the page
        #[arg(long, allow_hyphen_values = true)]
        values: Option<String>,

        /// Override the page title
        #[arg(long)]
        title: Option<String>,

        /// Read counter actions (increment, reset, quit) from stdin
        #[arg(short, long)]
        interactive: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

pub fn parse_args() -> Cli {
    Cli::parse()
}
