//! CLI command implementations

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::automaton::{build_dfa, compute_failure_function, Dfa};
use crate::serialization::{AutomatonSerializer, JsonSerializer};
use crate::simulation::{MatchResult, Simulator};

use super::args::{Commands, ConfigAction, OutputFormat};
use super::paths::{config_file_path_with_override, PersistentConfig};

/// Execute a CLI command, writing its output to `out`
///
/// `config` is the persisted configuration; `config_path` overrides where it
/// lives for the `config` subcommands.
pub fn execute<W: Write>(
    command: Commands,
    config: &PersistentConfig,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Failure { pattern } => cmd_failure(&pattern, out),
        Commands::Build {
            pattern,
            text,
            format,
        } => {
            let config = config.merge_with_cli(None, format, None);
            cmd_build(&pattern, text.as_deref().unwrap_or(""), &config, out)
        }
        Commands::Match {
            pattern,
            text,
            file,
            policy,
            format,
            summary,
        } => {
            let text = read_text(text, file)?;
            let config = config.merge_with_cli(policy, format, None);
            cmd_match(&pattern, &text, &config, summary, out)
        }
        Commands::Config { action } => cmd_config(action, config, config_path, out),
    }
}

fn read_text(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read text file: {}", path.display())),
        (None, None) => anyhow::bail!("No text given. Pass it as an argument or with --file."),
    }
}

fn cmd_failure<W: Write>(pattern: &str, out: &mut W) -> Result<()> {
    let failure = compute_failure_function(pattern);
    writeln!(out, "{}", "Failure function".bold())?;
    if failure.is_empty() {
        writeln!(out, "  (empty pattern)")?;
        return Ok(());
    }
    for (i, (symbol, value)) in pattern.chars().zip(&failure).enumerate() {
        writeln!(out, "  {:>4}  {:<4} {}", i, format!("{:?}", symbol), value)?;
    }
    Ok(())
}

fn cmd_build<W: Write>(
    pattern: &str,
    text: &str,
    config: &PersistentConfig,
    out: &mut W,
) -> Result<()> {
    let dfa = build_dfa(pattern, text);
    match config.format() {
        OutputFormat::Json => {
            JsonSerializer::serialize_dfa(&dfa, &mut *out)?;
            writeln!(out)?;
        }
        OutputFormat::Text => write_table(&dfa, out)?,
    }
    Ok(())
}

fn cmd_match<W: Write>(
    pattern: &str,
    text: &str,
    config: &PersistentConfig,
    summary: bool,
    out: &mut W,
) -> Result<()> {
    let dfa = build_dfa(pattern, text);
    let simulator = Simulator::with_policy(config.policy());
    let result = simulator.simulate(pattern, text, dfa.transition_table(), dfa.alphabet());

    match config.format() {
        OutputFormat::Json => {
            JsonSerializer::serialize_match_result(&result, &mut *out)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            if !summary {
                write_trace(&result, out)?;
            }
            write_summary(&result, out)?;
        }
    }
    Ok(())
}

fn cmd_config<W: Write>(
    action: ConfigAction,
    config: &PersistentConfig,
    config_path: Option<&Path>,
    out: &mut W,
) -> Result<()> {
    let updated = match action {
        ConfigAction::Show => {
            let path = config_file_path_with_override(config_path)?;
            writeln!(out, "{} {}", "Config file:".bold(), path.display())?;
            writeln!(out, "  policy: {}", config.policy())?;
            writeln!(out, "  format: {}", config.format())?;
            writeln!(out, "  color:  {}", config.color())?;
            return Ok(());
        }
        ConfigAction::Set {
            policy,
            format,
            color,
        } => config.merge_with_cli(policy, format, color),
        ConfigAction::Reset => PersistentConfig::default(),
    };

    let path = updated.save_to(config_path)?;
    writeln!(out, "{} {}", "Saved".green(), path.display())?;
    Ok(())
}

/// Write the transition table of `dfa` as aligned text
///
/// `->` marks the start state, `*` the accepting state.
pub fn write_table<W: Write>(dfa: &Dfa, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "{} {:?} ({} states, {} symbols)",
        "Pattern".bold(),
        dfa.pattern(),
        dfa.states().len(),
        dfa.alphabet().len()
    )?;

    let width = dfa.states().len().to_string().len() + 2;
    write!(out, "{:>8} |", "state")?;
    for symbol in dfa.alphabet().iter() {
        write!(out, " {:>width$}", symbol, width = width)?;
    }
    writeln!(out)?;

    for state in dfa.states() {
        let marker = match (state.is_start, state.is_accepting) {
            (true, _) => "->",
            (_, true) => "*",
            _ => "",
        };
        let label = format!("{:>2} {:>5}", marker, state.label);
        let label = if state.is_accepting {
            label.green().bold().to_string()
        } else {
            label
        };
        write!(out, "{} |", label)?;

        let row = dfa.transition_table().row(state.id).unwrap_or(&[]);
        for &target in row {
            let cell = format!("{:>width$}", format!("q{}", target), width = width);
            if target == state.id {
                write!(out, " {}", cell.dimmed())?;
            } else {
                write!(out, " {}", cell)?;
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write one line per simulation step
pub fn write_trace<W: Write>(result: &MatchResult, out: &mut W) -> Result<()> {
    writeln!(out, "{:>6}  {:<6} {}", "index", "char", "transition")?;
    for step in &result.steps {
        let transition = format!("q{} -> q{}", step.from_state, step.to_state);
        match step.match_start {
            Some(start) => writeln!(
                out,
                "{:>6}  {:<6} {}  {}",
                step.char_index,
                format!("{:?}", step.symbol),
                transition.green().bold(),
                format!("match at {}", start).green()
            )?,
            None if step.to_state == 0 && step.from_state != 0 => writeln!(
                out,
                "{:>6}  {:<6} {}",
                step.char_index,
                format!("{:?}", step.symbol),
                transition.yellow()
            )?,
            None => writeln!(
                out,
                "{:>6}  {:<6} {}",
                step.char_index,
                format!("{:?}", step.symbol),
                transition
            )?,
        }
    }
    Ok(())
}

/// Write the match positions and comparison count
pub fn write_summary<W: Write>(result: &MatchResult, out: &mut W) -> Result<()> {
    let matches = if result.matches.is_empty() {
        "none".red().to_string()
    } else {
        format!("{:?}", result.matches).green().to_string()
    };
    writeln!(
        out,
        "{} {} ({} comparisons)",
        "Matches:".bold(),
        matches,
        result.total_comparisons
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> PersistentConfig {
        colored::control::set_override(false);
        PersistentConfig {
            color: Some(false),
            ..PersistentConfig::default()
        }
    }

    fn run(command: Commands, config: &PersistentConfig) -> String {
        let mut out = Vec::new();
        execute(command, config, None, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_failure_output() {
        let output = run(
            Commands::Failure {
                pattern: "abab".to_string(),
            },
            &plain(),
        );
        assert!(output.contains("'b'"));
        assert!(output.lines().last().unwrap().trim_end().ends_with('2'));
    }

    #[test]
    fn test_build_text_output() {
        let output = run(
            Commands::Build {
                pattern: "ab".to_string(),
                text: Some("c".to_string()),
                format: None,
            },
            &plain(),
        );
        assert!(output.contains("3 states, 3 symbols"));
        assert!(output.contains("-> "));
        assert!(output.contains(" * "));
    }

    #[test]
    fn test_build_json_output() {
        let output = run(
            Commands::Build {
                pattern: "ab".to_string(),
                text: None,
                format: Some(OutputFormat::Json),
            },
            &plain(),
        );
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["alphabet"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_match_summary() {
        let output = run(
            Commands::Match {
                pattern: "aba".to_string(),
                text: Some("ababab".to_string()),
                file: None,
                policy: None,
                format: None,
                summary: true,
            },
            &plain(),
        );
        assert_eq!(output.trim(), "Matches: [0, 2] (6 comparisons)");
    }

    #[test]
    fn test_match_trace_marks_matches() {
        let output = run(
            Commands::Match {
                pattern: "ab".to_string(),
                text: Some("xab".to_string()),
                file: None,
                policy: None,
                format: None,
                summary: false,
            },
            &plain(),
        );
        assert!(output.contains("q1 -> q2  match at 1"));
        assert!(output.contains("Matches: [1]"));
    }
}
