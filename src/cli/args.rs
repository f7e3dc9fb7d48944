//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::simulation::AcceptingPolicy;

#[derive(Parser)]
#[command(name = "kmp-automaton")]
#[command(about = "Build KMP string-matching automata and trace them over text")]
#[command(version)]
pub struct Cli {
    /// Custom configuration file path
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Log automaton construction and simulation details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the failure function of a pattern
    Failure {
        /// Pattern to analyze
        pattern: String,
    },

    /// Build the DFA of a pattern and print its transition table
    Build {
        /// Pattern the automaton recognizes
        pattern: String,

        /// Sample text whose characters complete the alphabet
        #[arg(short, long)]
        text: Option<String>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Run the DFA of a pattern over a text and print the step trace
    Match {
        /// Pattern to search for
        pattern: String,

        /// Text to search in
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long)]
        file: Option<PathBuf>,

        /// What to do after a full match
        #[arg(short, long)]
        policy: Option<AcceptingPolicy>,

        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Only print the matches, not every step
        #[arg(short, long)]
        summary: bool,
    },

    /// Inspect or change the persistent configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show the effective configuration
    Show,

    /// Update configuration values
    Set {
        /// Default accepting policy
        #[arg(short, long)]
        policy: Option<AcceptingPolicy>,

        /// Default output format
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Colorize text output
        #[arg(long)]
        color: Option<bool>,
    },

    /// Restore the default configuration
    Reset,
}

/// Output format for `build` and `match`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, optionally colored tables
    Text,
    /// The JSON data contracts
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}
