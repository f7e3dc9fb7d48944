//! kmp-automaton - Build KMP string-matching automata and trace them over text

use clap::Parser;
use colored::Colorize;
use std::io;
use std::process;

use kmp_automaton::cli::commands;
use kmp_automaton::cli::{logger, Cli, PersistentConfig};

fn main() {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    let result = PersistentConfig::load_from(cli.config.as_deref()).and_then(|config| {
        if !config.color() {
            colored::control::set_override(false);
        }
        let stdout = io::stdout();
        let mut out = stdout.lock();
        commands::execute(cli.command, &config, cli.config.as_deref(), &mut out)
    });

    if let Err(e) = result {
        eprintln!("{}: {:#}", "Error".red().bold(), e);
        process::exit(1);
    }
}
