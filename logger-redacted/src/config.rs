// Logger configuration
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggerConfig {
    pub json_output: bool,
    pub log_level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            json_output: false,
            log_level: "info".to_string(),
        }
    }
}

impl LoggerConfig {
    /// Load logger configuration from `LOG_LEVEL` and `LOG_FORMAT`
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let log_level = std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        let json_output = std::env::var("LOG_FORMAT")
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(defaults.json_output);

        Self {
            json_output,
            log_level,
        }
    }
}
