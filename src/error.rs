// src/error.rs

use std::path::PathBuf;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Transport failure retrieving a listing or detail page.
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// A card or page lacks an element the extractor needs.
    #[error("missing {what} on {url}")]
    Extraction { what: &'static str, url: String },

    /// Date text matches neither month-name convention.
    #[error("unrecognized date text: {raw:?}")]
    Format { raw: String },

    #[error("config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: Box<Error>,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("config lists no [[sources]]")]
    EmptySources,

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("no listing source could be fetched")]
    NoSources,
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn extraction(what: &'static str, url: impl Into<String>) -> Self {
        Error::Extraction { what, url: url.into() }
    }
}
