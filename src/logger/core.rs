/// Core logging logic with automatic filtering
use super::config::{get_logger_config, LoggerConfig};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed under the given configuration
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Warning and Info follow the minimum level threshold
/// 3. Debug requires --verbose, or --debug-<module> with a threshold of Debug
/// 4. Verbose requires --verbose, or --verbose-<module> unless --quiet is set
/// 5. If enabled_tags is non-empty, tag must be in the set
pub fn should_log_with(config: &LoggerConfig, tag: &LogTag, level: LogLevel) -> bool {
    if level == LogLevel::Error {
        return true;
    }

    let tag_key = tag.to_debug_key();
    let all = config.min_level == LogLevel::Verbose;

    let level_enabled = match level {
        LogLevel::Verbose => {
            all || (config.min_level >= LogLevel::Info && config.verbose_tags.contains(&tag_key))
        }
        LogLevel::Debug => {
            all || (config.min_level >= LogLevel::Debug && config.debug_tags.contains(&tag_key))
        }
        _ => level <= config.min_level,
    };

    level_enabled && (config.enabled_tags.is_empty() || config.enabled_tags.contains(&tag_key))
}

pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log_with(&get_logger_config(), &tag, level) {
        return;
    }

    super::format::format_and_log(&tag, level, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_logged() {
        let config = LoggerConfig {
            min_level: LogLevel::Warning,
            ..Default::default()
        };
        assert!(should_log_with(&config, &LogTag::Minter, LogLevel::Error));
        assert!(!should_log_with(&config, &LogTag::Minter, LogLevel::Info));
    }

    #[test]
    fn test_debug_requires_tag_flag() {
        let mut config = LoggerConfig {
            min_level: LogLevel::Debug,
            ..Default::default()
        };
        config.debug_tags.insert("rpc".to_string());

        assert!(should_log_with(&config, &LogTag::Rpc, LogLevel::Debug));
        assert!(!should_log_with(&config, &LogTag::Minter, LogLevel::Debug));
        assert!(should_log_with(&config, &LogTag::Minter, LogLevel::Info));
    }

    #[test]
    fn test_verbose_shows_everything() {
        let config = LoggerConfig {
            min_level: LogLevel::Verbose,
            ..Default::default()
        };
        assert!(should_log_with(&config, &LogTag::Transactions, LogLevel::Debug));
        assert!(should_log_with(&config, &LogTag::Transactions, LogLevel::Verbose));
    }

    #[test]
    fn test_enabled_tags_filter() {
        let mut config = LoggerConfig::default();
        config.enabled_tags.insert("summary".to_string());

        assert!(should_log_with(&config, &LogTag::Summary, LogLevel::Info));
        assert!(!should_log_with(&config, &LogTag::Minter, LogLevel::Info));
        assert!(should_log_with(&config, &LogTag::Minter, LogLevel::Error));
    }

    #[test]
    fn test_quiet_hides_module_verbose_lines() {
        let mut config = LoggerConfig {
            min_level: LogLevel::Warning,
            ..Default::default()
        };
        config.verbose_tags.insert("rpc".to_string());

        assert!(!should_log_with(&config, &LogTag::Rpc, LogLevel::Verbose));
        assert!(!should_log_with(&config, &LogTag::Rpc, LogLevel::Info));

        config.min_level = LogLevel::Info;
        assert!(should_log_with(&config, &LogTag::Rpc, LogLevel::Verbose));
        assert!(!should_log_with(&config, &LogTag::Minter, LogLevel::Verbose));
    }

    #[test]
    fn test_enabled_tags_filter_verbose_lines() {
        let mut config = LoggerConfig {
            min_level: LogLevel::Verbose,
            ..Default::default()
        };
        config.enabled_tags.insert("minter".to_string());

        assert!(should_log_with(&config, &LogTag::Minter, LogLevel::Verbose));
        assert!(!should_log_with(&config, &LogTag::Transactions, LogLevel::Verbose));
        assert!(!should_log_with(&config, &LogTag::Transactions, LogLevel::Debug));
    }
}
