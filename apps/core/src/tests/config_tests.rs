//! Configuration Tests
//!
//! Environment-driven configuration and custom lexicon files.

use crate::analysis::{Category, Priority, SentimentAssessment, TaskAnalyzer};
use crate::config::{
    AppConfig, LogFormat, ENV_LEXICON, ENV_LOG, ENV_LOG_FORMAT, ENV_SENTIMENT_EXTRAS,
};
use crate::error::AppError;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_reads_all_variables() {
        temp_env::with_vars(
            [
                (ENV_LOG, Some("tasksense_core=debug")),
                (ENV_LOG_FORMAT, Some("json")),
                (ENV_LEXICON, Some("/etc/tasksense/lexicon.json")),
                (ENV_SENTIMENT_EXTRAS, Some("/etc/tasksense/extras.json")),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.log_filter, "tasksense_core=debug");
                assert_eq!(config.log_format, LogFormat::Json);
                assert_eq!(
                    config.lexicon_path,
                    Some(PathBuf::from("/etc/tasksense/lexicon.json"))
                );
                assert_eq!(
                    config.sentiment_extras_path,
                    Some(PathBuf::from("/etc/tasksense/extras.json"))
                );
            },
        );
    }

    #[test]
    fn test_blank_values_are_unset() {
        temp_env::with_vars(
            [
                (ENV_LOG, Some("  ")),
                (ENV_LOG_FORMAT, None),
                (ENV_LEXICON, Some("")),
                (ENV_SENTIMENT_EXTRAS, None),
            ],
            || {
                let config = AppConfig::from_env().unwrap();
                assert_eq!(config.log_filter, "info");
                assert!(config.lexicon_path.is_none());
            },
        );
    }

    #[test]
    fn test_unknown_log_format_rejected() {
        temp_env::with_var(ENV_LOG_FORMAT, Some("yaml"), || {
            let err = AppConfig::from_env().unwrap_err();
            assert!(matches!(err, AppError::Config(_)));
        });
    }
}

#[cfg(test)]
mod lexicon_file_tests {
    use super::*;

    #[test]
    fn test_custom_keyword_lexicon() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lexicon.json");
        fs::write(
            &path,
            r#"{
                "categories": {
                    "work": ["standup", "sprint"],
                    "personal": ["garden"],
                    "shopping": ["mall"]
                },
                "priorities": {
                    "high": ["blocker"],
                    "low": ["someday"]
                }
            }"#,
        )
        .unwrap();

        let config = AppConfig {
            lexicon_path: Some(path),
            ..AppConfig::default()
        };
        let analyzer = TaskAnalyzer::from_config(&config);

        assert_eq!(analyzer.classify_category("sprint planning"), Category::Work);
        assert_eq!(analyzer.classify_category("water the garden"), Category::Personal);
        // Built-in keywords are replaced, not merged.
        assert_eq!(analyzer.classify_category("client meeting"), Category::Other);
        assert_eq!(analyzer.classify_priority("blocker on release"), Priority::High);
        assert_eq!(analyzer.classify_priority("urgent"), Priority::Medium);
        assert_eq!(analyzer.classify_priority("someday"), Priority::Low);
    }

    #[test]
    fn test_malformed_lexicon_falls_back_to_builtin() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lexicon.json");
        fs::write(&path, "{ this is not json").unwrap();

        let config = AppConfig {
            lexicon_path: Some(path),
            ..AppConfig::default()
        };
        let analyzer = TaskAnalyzer::from_config(&config);

        assert_eq!(analyzer.classify_category("client meeting"), Category::Work);
        assert_eq!(analyzer.classify_priority("urgent"), Priority::High);
    }

    #[test]
    fn test_sentiment_extras() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("extras.json");
        fs::write(&path, r#"{"taxes": -4, "vacation": 3}"#).unwrap();

        let config = AppConfig {
            sentiment_extras_path: Some(path),
            ..AppConfig::default()
        };
        let analyzer = TaskAnalyzer::from_config(&config);

        let result = analyzer.score_sentiment("file taxes");
        assert_eq!(result.score, -4);
        assert_eq!(result.assessment, SentimentAssessment::VeryNegative);
        // Built-in weights still apply.
        assert_eq!(analyzer.score_sentiment("great vacation").score, 6);
    }
}
