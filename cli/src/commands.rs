pub mod info;
pub mod random;
pub mod sort;

use clap::{Parser, Subcommand};
use selsort_common::input::{RandomSpec, Sequence};

#[derive(Parser)]
#[command(name = "selsort")]
#[command(version)]
#[command(about = "Sorts integers with a selection sort, one minimum at a time.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops banner and headers, -qq prints only the result)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Raise log verbosity (-v debug, -vv trace every selection)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show information about the algorithm and this tool
    #[command(alias = "i")]
    Info,
    /// Sort integers given as arguments, or read from standard input
    #[command(alias = "s")]
    Sort {
        /// Print the sorted and remaining values after every selection
        #[arg(long)]
        steps: bool,
        /// Integers separated by commas or whitespace; options go before the first value
        #[arg(allow_hyphen_values = true)]
        values: Vec<Sequence>,
    },
    /// Sort a randomly generated sequence
    #[command(alias = "r")]
    Random {
        /// Number of values to generate
        #[arg(short, long, default_value_t = RandomSpec::default().count)]
        count: usize,
        /// Smallest value that may be generated
        #[arg(long, default_value_t = RandomSpec::default().min, allow_negative_numbers = true)]
        min: i64,
        /// Largest value that may be generated
        #[arg(long, default_value_t = RandomSpec::default().max, allow_negative_numbers = true)]
        max: i64,
        /// Seed for a reproducible sequence
        #[arg(long)]
        seed: Option<u64>,
        /// Print the sorted and remaining values after every selection
        #[arg(long)]
        steps: bool,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl Commands {
    /// Whether every selection pass should be printed.
    pub fn steps(&self) -> bool {
        match self {
            Commands::Sort { steps, .. } | Commands::Random { steps, .. } => *steps,
            Commands::Info => false,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
