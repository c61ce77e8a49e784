// Configuration module for fixit
// Reads from environment variables with sensible defaults

use std::env;
use std::sync::OnceLock;

/// Global configuration instance
static CONFIG: OnceLock<Config> = OnceLock::new();

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Context lines around each hunk in emitted diffs (FIXIT_DIFF_CONTEXT_LINES)
    pub diff_context_lines: usize,

    /// Maximum accepted report payload size in bytes (FIXIT_MAX_REPORT_BYTES)
    pub max_report_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            diff_context_lines: 3,
            max_report_bytes: 8 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(val) = env::var("FIXIT_DIFF_CONTEXT_LINES") {
            if let Ok(parsed) = val.parse() {
                config.diff_context_lines = parsed;
            } else {
                eprintln!(
                    "fixit: Warning: Invalid FIXIT_DIFF_CONTEXT_LINES value: {}, using default: {}",
                    val, config.diff_context_lines
                );
            }
        }

        if let Ok(val) = env::var("FIXIT_MAX_REPORT_BYTES") {
            if let Ok(parsed) = val.parse() {
                config.max_report_bytes = parsed;
            } else {
                eprintln!(
                    "fixit: Warning: Invalid FIXIT_MAX_REPORT_BYTES value: {}, using default: {}",
                    val, config.max_report_bytes
                );
            }
        }

        config
    }

    /// Get the global configuration instance
    pub fn get() -> &'static Config {
        CONFIG.get_or_init(Config::from_env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.diff_context_lines, 3);
        assert_eq!(config.max_report_bytes, 8 * 1024 * 1024);
    }
}
