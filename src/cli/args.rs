use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "rundist")]
#[command(about = "Compute running distance from duration and pace segments")]
#[command(long_about = "rundist - running distance calculator

Computes the distance covered from one or more segments of duration and
pace, and keeps a history of saved calculations.

TIME FORMATS:
  hh:mm:ss    1:05:30
  mm:ss       25:00
  m           42        (whole minutes)

QUICK START:
  rundist calc 30:00@5:15                 One segment
  rundist calc 10:00@6:00 20:00@4:50 -s   Two segments, saved to history
  rundist history list                    Saved calculations

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Key the session history is stored under
    #[arg(long, global = true, env = "RUNDIST_STORAGE_KEY")]
    pub storage_key: Option<String>,

    /// Path to the history database
    #[arg(long, global = true, env = "RUNDIST_DB")]
    pub database: Option<PathBuf>,

    /// Path to the config file
    #[arg(long, global = true, env = "RUNDIST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate distance for one or more segments
    ///
    /// Each segment is written DURATION@PACE, where pace is minutes per
    /// distance unit. Either side may be left empty; an incomplete or
    /// invalid segment counts as zero distance.
    ///
    /// # Examples
    ///
    ///   rundist calc 30:00@5:00          6.00
    ///   rundist calc 1:05:30@5:30        11.91
    ///   rundist calc 10:00@6:00 20:00@4:50 --save
    #[command(alias = "c")]
    Calc {
        /// Segments as DURATION@PACE
        #[arg(required = true, num_args = 1..)]
        segments: Vec<String>,

        /// Save the calculation to history
        #[arg(long, short = 's')]
        save: bool,
    },

    /// Saved calculations
    ///
    /// Entries are numbered from 1, most recent first.
    ///
    /// # Examples
    ///
    ///   rundist history list
    ///   rundist history show 1
    ///   rundist history load 2
    ///   rundist history delete 3
    ///   rundist history clear --force
    #[command(alias = "h")]
    History(HistoryArgs),

    /// Parse a duration or pace and show it in minutes
    Parse {
        /// Time as hh:mm:ss, mm:ss or minutes
        #[arg(allow_negative_numbers = true)]
        input: String,
    },

    /// Show configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        shell: String,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for history commands.
#[derive(Args)]
pub struct HistoryArgs {
    #[command(subcommand)]
    pub command: HistoryCommands,
}

/// History subcommands.
#[derive(Subcommand)]
pub enum HistoryCommands {
    /// List saved calculations
    #[command(alias = "ls")]
    List {
        /// Number of entries to show (defaults to `calculator.history_limit`)
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },

    /// Show a saved calculation with its segments recomputed
    Show {
        /// Entry number (1 = most recent)
        number: usize,
    },

    /// Print a saved calculation's segments as `calc` arguments
    Load {
        /// Entry number (1 = most recent)
        number: usize,
    },

    /// Delete one saved calculation
    #[command(alias = "rm")]
    Delete {
        /// Entry number (1 = most recent)
        number: usize,
    },

    /// Delete all saved calculations
    Clear {
        /// Confirm deletion
        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Arguments for config commands.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file and database paths
    Path,
}
