//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use std::fs;
    use tempfile::TempDir;

    use kmp_automaton::cli::commands::execute;
    use kmp_automaton::cli::{Commands, ConfigAction, OutputFormat, PersistentConfig};
    use kmp_automaton::simulation::{AcceptingPolicy, MatchResult};

    fn run(command: Commands, config: &PersistentConfig, path: Option<&std::path::Path>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        execute(command, config, path, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_persistent_config_default() {
        let config = PersistentConfig::default();
        assert_eq!(config.policy, Some(AcceptingPolicy::Resume));
        assert_eq!(config.format, Some(OutputFormat::Text));
        assert_eq!(config.color, Some(true));
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let config = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(config, PersistentConfig::default());
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            policy: Some(AcceptingPolicy::Absorb),
            format: Some(OutputFormat::Json),
            color: Some(false),
        };
        config.save_to(Some(path.as_path())).unwrap();

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_partial_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, r#"{"policy": "absorb"}"#).unwrap();

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.policy(), AcceptingPolicy::Absorb);
        assert_eq!(loaded.format(), OutputFormat::Text);
        assert!(loaded.color());
    }

    #[test]
    fn test_config_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = PersistentConfig::load_from(Some(path.as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_merge_with_cli_prefers_cli() {
        let config = PersistentConfig {
            policy: Some(AcceptingPolicy::Absorb),
            format: Some(OutputFormat::Json),
            color: None,
        };
        let merged = config.merge_with_cli(Some(AcceptingPolicy::Resume), None, Some(false));
        assert_eq!(merged.policy, Some(AcceptingPolicy::Resume));
        assert_eq!(merged.format, Some(OutputFormat::Json));
        assert_eq!(merged.color, Some(false));
    }

    #[test]
    fn test_config_set_command_writes_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");

        let output = run(
            Commands::Config {
                action: ConfigAction::Set {
                    policy: Some(AcceptingPolicy::Absorb),
                    format: None,
                    color: None,
                },
            },
            &PersistentConfig::default(),
            Some(path.as_path()),
        );
        assert!(output.contains("Saved"));

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded.policy(), AcceptingPolicy::Absorb);
        assert_eq!(loaded.format(), OutputFormat::Text);
    }

    #[test]
    fn test_match_from_file_with_json_output() {
        let temp_dir = TempDir::new().unwrap();
        let text_path = temp_dir.path().join("input.txt");
        fs::write(&text_path, "ababab").unwrap();

        let output = run(
            Commands::Match {
                pattern: "aba".to_string(),
                text: None,
                file: Some(text_path),
                policy: None,
                format: Some(OutputFormat::Json),
                summary: false,
            },
            &PersistentConfig::default(),
            None,
        );

        let result: MatchResult = serde_json::from_str(&output).unwrap();
        assert_eq!(result.matches, vec![0, 2]);
        assert_eq!(result.total_comparisons, 6);
    }

    #[test]
    fn test_match_uses_configured_policy() {
        let config = PersistentConfig {
            policy: Some(AcceptingPolicy::Absorb),
            ..PersistentConfig::default()
        };
        let output = run(
            Commands::Match {
                pattern: "aba".to_string(),
                text: Some("ababa".to_string()),
                file: None,
                policy: None,
                format: None,
                summary: true,
            },
            &config,
            None,
        );
        assert!(output.contains("[0, 1, 2]"));
    }

    #[test]
    fn test_missing_text_file_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");

        let mut out = Vec::new();
        let err = execute(
            Commands::Match {
                pattern: "a".to_string(),
                text: None,
                file: Some(missing.clone()),
                policy: None,
                format: None,
                summary: true,
            },
            &PersistentConfig::default(),
            None,
            &mut out,
        )
        .unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }
}
