use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub data: DataSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Locations of the tables loaded at startup
#[derive(Debug, Clone, Deserialize)]
pub struct DataSettings {
    pub prices_path: String,
    pub catalog_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_max_radius_km")]
    pub max_radius_km: f64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            max_radius_km: default_max_radius_km(),
        }
    }
}

fn default_max_radius_km() -> f64 { 50.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` values on top of the loaded settings
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|value| !value.trim().is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|value| !value.trim().is_empty()) {
            self.format = format;
        }
        self
    }

    /// Same as [`with_overrides`](Self::with_overrides), reading the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var("LOG_LEVEL").ok(),
            std::env::var("LOG_FORMAT").ok(),
        )
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with ADVISOR)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., ADVISOR__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("ADVISOR")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_search() {
        let search = SearchSettings::default();
        assert_eq!(search.max_radius_km, 50.0);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_logging_overrides() {
        let logging = LoggingSettings::default()
            .with_overrides(Some("debug".to_string()), Some("pretty".to_string()));
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "pretty");

        let logging = LoggingSettings::default().with_overrides(None, Some(String::new()));
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[server]
host = "127.0.0.1"
port = 8000

[data]
prices_path = "data/prices.csv"
catalog_path = "config/chains.toml"

[search]
max_radius_km = 2.0
"#
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.server.port, 8000);
        assert_eq!(settings.server.workers, None);
        assert_eq!(settings.data.catalog_path, "config/chains.toml");
        assert_eq!(settings.search.max_radius_km, 2.0);
        assert_eq!(settings.logging.format, "json");
    }
}
