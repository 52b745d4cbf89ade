/// Logger configuration derived from command-line arguments
use super::levels::LogLevel;
use crate::arguments::get_cmd_args;
use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    /// Lines above this level are dropped (Debug/Verbose have their own gates)
    pub min_level: LogLevel,
    /// Tags with --debug-<key> enabled
    pub debug_tags: HashSet<String>,
    /// Tags with --verbose-<key> enabled
    pub verbose_tags: HashSet<String>,
    /// When non-empty only these tags are shown (from --only <a,b>)
    pub enabled_tags: HashSet<String>,
    pub colors: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
            verbose_tags: HashSet::new(),
            enabled_tags: HashSet::new(),
            colors: true,
        }
    }
}

static LOGGER_CONFIG: Lazy<RwLock<LoggerConfig>> =
    Lazy::new(|| RwLock::new(LoggerConfig::default()));

/// Build a logger configuration from an argument list
pub fn config_from_args(args: &[String]) -> LoggerConfig {
    let mut config = LoggerConfig::default();

    for (i, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "--quiet" => config.min_level = LogLevel::Warning,
            "--verbose" => config.min_level = LogLevel::Verbose,
            "--no-color" => config.colors = false,
            "--only" => {
                if let Some(list) = args.get(i + 1) {
                    add_enabled_tags(&mut config, list);
                }
            }
            other => {
                if let Some(list) = other.strip_prefix("--only=") {
                    add_enabled_tags(&mut config, list);
                } else if let Some(key) = other.strip_prefix("--debug-") {
                    config.debug_tags.insert(key.to_lowercase());
                } else if let Some(key) = other.strip_prefix("--verbose-") {
                    config.verbose_tags.insert(key.to_lowercase());
                }
            }
        }
    }

    // A module in debug mode must not be hidden by the default threshold
    if !config.debug_tags.is_empty() && config.min_level == LogLevel::Info {
        config.min_level = LogLevel::Debug;
    }

    config
}

fn add_enabled_tags(config: &mut LoggerConfig, list: &str) {
    config.enabled_tags.extend(
        list.split(',')
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty()),
    );
}

pub fn init_from_args() {
    let config = config_from_args(&get_cmd_args());
    if !config.colors {
        colored::control::set_override(false);
    }
    set_logger_config(config);
}

pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.read() {
        Ok(config) => config.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

pub fn set_logger_config(config: LoggerConfig) {
    match LOGGER_CONFIG.write() {
        Ok(mut current) => *current = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults() {
        let config = config_from_args(&args(&["nft-minter"]));
        assert_eq!(config.min_level, LogLevel::Info);
        assert!(config.debug_tags.is_empty());
        assert!(config.colors);
    }

    #[test]
    fn test_debug_flags_collected() {
        let config = config_from_args(&args(&["nft-minter", "--debug-rpc", "--debug-Minter"]));
        assert!(config.debug_tags.contains("rpc"));
        assert!(config.debug_tags.contains("minter"));
        assert_eq!(config.min_level, LogLevel::Debug);
    }

    #[test]
    fn test_quiet_keeps_threshold_with_debug_flags() {
        let config = config_from_args(&args(&["nft-minter", "--quiet", "--debug-rpc"]));
        assert_eq!(config.min_level, LogLevel::Warning);
    }

    #[test]
    fn test_only_list() {
        let config = config_from_args(&args(&["nft-minter", "--only", "minter, summary"]));
        assert_eq!(config.enabled_tags.len(), 2);
        assert!(config.enabled_tags.contains("summary"));
    }

    #[test]
    fn test_only_list_inline_form() {
        let config = config_from_args(&args(&["nft-minter", "--only=rpc,TX"]));
        assert!(config.enabled_tags.contains("rpc"));
        assert!(config.enabled_tags.contains("tx"));
    }
}
