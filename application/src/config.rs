//! [`Config`]-related definitions.

use std::time;

use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use service::StaleFetchPolicy;
use smart_default::SmartDefault;

/// Application configuration.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote listing endpoint configuration.
    pub remote: Remote,

    /// Search configuration.
    pub search: Search,

    /// Store configuration.
    pub store: Store,

    /// Log configuration.
    pub log: Log,
}

impl Config {
    /// Creates a new [`Config`] by:
    /// - loading it from the provided `path` (if any);
    /// - merging it with the environment variables (if any);
    /// - using default values for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(path: impl AsRef<str>) -> Result<Self, ConfigError> {
        ConfigBuilder::<DefaultState>::default()
            .add_source(config::File::with_name(path.as_ref()).required(false))
            .add_source(config::Environment::with_prefix("CONF").separator("."))
            .build()?
            .try_deserialize()
    }
}

/// Remote listing endpoint configuration.
#[derive(Clone, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Remote {
    /// URL of the listing endpoint.
    #[default("https://jsonplaceholder.typicode.com/users".to_owned())]
    pub url: String,

    /// Timeout of a single request to the listing endpoint.
    #[default(time::Duration::from_secs(10))]
    #[serde(with = "humantime_serde")]
    pub timeout: time::Duration,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Deserialize, SmartDefault)]
#[serde(default)]
pub struct Search {
    /// Delay the search term should stay unchanged for to be applied.
    #[default(time::Duration::from_millis(300))]
    #[serde(with = "humantime_serde")]
    pub debounce: time::Duration,
}

/// Store configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Store {
    /// Resolution of a fetch completed after local changes.
    pub on_stale_fetch: StaleFetchPolicy,
}

impl From<Store> for service::Config {
    fn from(value: Store) -> Self {
        let Store { on_stale_fetch } = value;
        Self {
            stale_fetch: on_stale_fetch,
        }
    }
}

/// Log configuration.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Log {
    /// Log level.
    pub level: LogLevel,
}

/// Log level.
#[derive(Clone, Copy, Debug, Default, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogLevel {
    /// Designates very low priority, often extremely verbose, information.
    Trace,

    /// Designates lower priority information.
    Debug,

    /// Designates useful information.
    #[default]
    Info,

    /// Designates hazardous situations.
    Warn,

    /// Designates very serious errors.
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}

#[cfg(test)]
mod spec {
    use std::time::Duration;

    use config::{builder::DefaultState, ConfigBuilder, File, FileFormat};
    use service::StaleFetchPolicy;

    use super::Config;

    #[test]
    fn defaults_without_file() {
        let config = Config::new("definitely/missing/config").unwrap();

        assert_eq!(
            config.remote.url,
            "https://jsonplaceholder.typicode.com/users",
        );
        assert_eq!(config.remote.timeout, Duration::from_secs(10));
        assert_eq!(config.search.debounce, Duration::from_millis(300));
        assert_eq!(config.store.on_stale_fetch, StaleFetchPolicy::Overwrite);
        assert_eq!(
            service::Config::from(config.store).stale_fetch,
            StaleFetchPolicy::Overwrite,
        );
    }

    #[test]
    fn reads_partial_file() {
        let config = ConfigBuilder::<DefaultState>::default()
            .add_source(File::from_str(
                "[store]\non_stale_fetch = \"MERGE\"\n\
                 [search]\ndebounce = \"1s\"\n",
                FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize::<Config>()
            .unwrap();

        assert_eq!(config.store.on_stale_fetch, StaleFetchPolicy::Merge);
        assert_eq!(config.search.debounce, Duration::from_secs(1));
        assert_eq!(config.remote.timeout, Duration::from_secs(10));
    }
}
