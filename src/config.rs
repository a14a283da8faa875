// src/config.rs
use std::env;

use log::LevelFilter;

use crate::models::GenerationOptions;

// Runtime configuration for the CLI, overridable through PASSFORGE_*
// environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Password Generation
    pub default_length: usize,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Password Generation
            default_length: 16,
            exclude_similar: false,
            exclude_ambiguous: false,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables, falling back to the
    // defaults for anything unset or unparsable
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Ok(val) = env::var("PASSFORGE_DEFAULT_LENGTH") {
            if let Ok(length) = val.parse::<usize>() {
                if length > 0 {
                    config.default_length = length;
                }
            }
        }

        if let Ok(val) = env::var("PASSFORGE_EXCLUDE_SIMILAR") {
            config.exclude_similar = parse_bool(&val);
        }

        if let Ok(val) = env::var("PASSFORGE_EXCLUDE_AMBIGUOUS") {
            config.exclude_ambiguous = parse_bool(&val);
        }

        if let Ok(val) = env::var("PASSFORGE_LOG_LEVEL") {
            if let Some(level) = parse_level(&val) {
                config.log_level = level;
            }
        }

        config
    }

    /// Generation options seeded from the configured defaults
    pub fn generation_defaults(&self) -> GenerationOptions {
        GenerationOptions {
            length: self.default_length,
            exclude_similar: self.exclude_similar,
            exclude_ambiguous: self.exclude_ambiguous,
            ..GenerationOptions::default()
        }
    }
}

fn parse_bool(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true") || val.eq_ignore_ascii_case("yes")
}

fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let config = Config::default();
        assert_eq!(config.default_length, 16);
        assert!(!config.exclude_similar);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn generation_defaults_carry_config_values() {
        let config = Config {
            default_length: 24,
            exclude_similar: true,
            ..Config::default()
        };
        let options = config.generation_defaults();
        assert_eq!(options.length, 24);
        assert!(options.exclude_similar);
        assert!(options.include_symbols);
    }

    #[test]
    fn bool_parsing_accepts_common_spellings() {
        assert!(parse_bool("1"));
        assert!(parse_bool("true"));
        assert!(parse_bool("TRUE"));
        assert!(parse_bool("yes"));
        assert!(!parse_bool("0"));
        assert!(!parse_bool("no"));
        assert!(!parse_bool(""));
    }

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level("WARN"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("verbose"), None);
    }
}
