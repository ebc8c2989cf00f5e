use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;

/// Server settings, layered from an optional YAML file and `ERROR_RELAY__*` variables
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Deployment name stamped onto every report
    pub deployment_name: String,
    /// Message id to translated text for user-visible replies
    #[serde(default)]
    pub translations: HashMap<String, String>,
}

impl Settings {
    /// Load settings. A missing file at `path` is not an error.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080_i64)?
            .set_default("deployment_name", "localhost")?;

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(false));
        }

        builder
            .add_source(Environment::with_prefix("ERROR_RELAY").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
