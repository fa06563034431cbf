use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::{RecommenderProfile, Variant};
use crate::services::DEFAULT_ENDPOINT;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub google_books: GoogleBooksSettings,
    pub recommender: RecommenderSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    /// Falls back to the variant's default port
    pub port: Option<u16>,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleBooksSettings {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl GoogleBooksSettings {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommenderSettings {
    pub variant: Variant,
    pub max_results: Option<u8>,
    pub selection_count: Option<usize>,
    pub description_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with BOOKBOT__)
    /// 5. `PORT` and `GOOGLE_BOOKS_API_KEY`
    pub fn load() -> Result<Self, ConfigError> {
        let settings = with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., BOOKBOT__SERVER__PORT -> server.port
            .add_source(environment())
            .build()?;

        apply_plain_env_vars(settings, |name| std::env::var(name).ok())?.try_deserialize()
    }

    /// Load configuration from a custom path
    ///
    /// `PORT` and `GOOGLE_BOOKS_API_KEY` still override the file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Self::load_from_with(path, |name| std::env::var(name).ok())
    }

    fn load_from_with<P, F>(path: P, lookup: F) -> Result<Self, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let settings = with_defaults(Config::builder())?
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        apply_plain_env_vars(settings, lookup)?.try_deserialize()
    }

    /// Port to listen on
    pub fn port(&self) -> u16 {
        self.server
            .port
            .unwrap_or_else(|| self.recommender.variant.default_port())
    }

    /// Variant preset with configured overrides applied
    pub fn profile(&self) -> RecommenderProfile {
        let mut profile = self.recommender.variant.profile();
        if let Some(max_results) = self.recommender.max_results {
            profile.max_results = max_results;
        }
        if let Some(count) = self.recommender.selection_count {
            profile.selection_count = count;
        }
        if let Some(limit) = self.recommender.description_limit {
            profile.description_limit = limit;
        }
        profile
    }
}

fn with_defaults(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("google_books.endpoint", DEFAULT_ENDPOINT)?
        .set_default("recommender.variant", "generic")?
        .set_default("logging.level", default_log_level())?
        .set_default("logging.format", default_log_format())
}

fn environment() -> Environment {
    Environment::with_prefix("BOOKBOT")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

/// Honour the unprefixed variables chat hosting platforms usually set
fn apply_plain_env_vars<F>(settings: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut builder = Config::builder().add_source(settings);

    if let Some(port) = lookup("PORT") {
        builder = builder.set_override("server.port", port)?;
    }
    if let Some(api_key) = lookup("GOOGLE_BOOKS_API_KEY") {
        builder = builder.set_override("google_books.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "bookbot-config-{}-{}.toml",
            std::process::id(),
            name
        ));
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_logging() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "compact");
    }

    #[test]
    fn test_load_from_file_with_overrides() {
        let path = write_config(
            "overrides",
            r#"
[server]
host = "127.0.0.1"

[recommender]
variant = "webhook"
description_limit = 120
"#,
        );

        let settings = Settings::load_from_with(&path, |_| None).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(settings.port(), 3001);
        assert_eq!(settings.google_books.endpoint, DEFAULT_ENDPOINT);
        assert!(settings.google_books.timeout().is_none());

        let profile = settings.profile();
        assert_eq!(profile.variant, Variant::Webhook);
        assert_eq!(profile.description_limit, 120);
        assert_eq!(profile.selection_count, 1);
        assert_eq!(profile.max_results, 5);
    }

    #[test]
    fn test_explicit_port_wins() {
        let path = write_config(
            "port",
            r#"
[server]
host = "0.0.0.0"
port = 8080

[google_books]
endpoint = "http://localhost:9999/volumes"
timeout_secs = 10
"#,
        );

        let settings = Settings::load_from_with(&path, |_| None).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.recommender.variant, Variant::Generic);
        assert_eq!(settings.google_books.timeout(), Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_plain_env_vars_override_custom_file() {
        let path = write_config(
            "plain-env",
            r#"
[server]
host = "0.0.0.0"
port = 8080

[recommender]
variant = "webhook"
"#,
        );

        let settings = Settings::load_from_with(&path, |name| match name {
            "PORT" => Some("4242".to_string()),
            "GOOGLE_BOOKS_API_KEY" => Some("from-env".to_string()),
            _ => None,
        })
        .unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.port(), 4242);
        assert_eq!(settings.google_books.api_key.as_deref(), Some("from-env"));
    }
}
