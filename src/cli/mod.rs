//! CLI interface for kmp-automaton
//!
//! Provides command-line utilities for building automata and tracing them.

pub mod args;
pub mod commands;
pub mod logger;
pub mod paths;

pub use args::{Cli, Commands, ConfigAction, OutputFormat};
pub use paths::{config_dir, PersistentConfig};
