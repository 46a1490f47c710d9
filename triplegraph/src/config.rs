//! Configuration shared by the graph builder, the serializers and the
//! progress poller.
//!
//! All fields have defaults, so an empty TOML document is a valid
//! configuration:
//!
//! ```
//! let config = triplegraph::Config::from_toml_str("wrap_width = 40").unwrap();
//! assert_eq!(config.wrap_width, 40);
//! assert_eq!(config.separators, "/#");
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::builder::{LiteralStyle, DEFAULT_WRAP_WIDTH};
use crate::error::Result;
use crate::namespace::{DEFAULT_MAX_ALIAS_LEN, DEFAULT_SEPARATORS};
use crate::progress::{DEFAULT_ENDPOINT, DEFAULT_POLL_INTERVAL};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Characters that terminate a namespace prefix.
    pub separators: String,
    /// Maximum length of a generated namespace alias.
    pub max_alias_len: usize,
    /// Width at which literal labels are wrapped; `0` disables wrapping.
    pub wrap_width: usize,
    /// How literal labels are rendered.
    pub literal_style: LiteralStyle,
    /// Delay between two progress requests, in milliseconds.
    pub poll_interval_ms: u64,
    /// Path of the progress endpoint, relative to the server base URL.
    pub progress_endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_owned(),
            max_alias_len: DEFAULT_MAX_ALIAS_LEN,
            wrap_width: DEFAULT_WRAP_WIDTH,
            literal_style: LiteralStyle::default(),
            poll_interval_ms: u64::try_from(DEFAULT_POLL_INTERVAL.as_millis()).unwrap_or(500),
            progress_endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`](crate::Error::Config) on malformed TOML or
    /// unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Returns the poll interval as a [`Duration`].
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.separators, "/#");
        assert_eq!(config.max_alias_len, 30);
        assert_eq!(config.wrap_width, 30);
        assert_eq!(config.literal_style, LiteralStyle::Annotated);
        assert_eq!(config.poll_interval(), Duration::from_millis(500));
        assert_eq!(config.progress_endpoint, "/api/v1/progress");
    }

    #[test]
    fn overrides() {
        let config = Config::from_toml_str(
            r#"
            separators = "/"
            literal_style = "plain"
            poll_interval_ms = 250
            "#,
        )
        .unwrap();
        assert_eq!(config.separators, "/");
        assert_eq!(config.literal_style, LiteralStyle::Plain);
        assert_eq!(config.poll_interval(), Duration::from_millis(250));
        assert_eq!(config.wrap_width, 30);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(Config::from_toml_str("colour = \"red\"").is_err());
    }
}
