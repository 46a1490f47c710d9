//! Error type shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors produced while loading graph data, configuration, or progress reports.
#[derive(Debug, Error)]
pub enum Error {
    /// Embedded graph data or a progress report was not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A page contained no `<script data-render-graph="true">` element.
    #[error("no embedded graph data found")]
    NoGraphData,

    /// A configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A status endpoint URL could not be constructed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A progress request failed.
    #[cfg(feature = "http")]
    #[error("progress request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A widget was missing one of its required `data-*` attributes.
    #[error("missing required attribute `data-{0}`")]
    MissingAttribute(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
