// src/config/options.rs
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use super::consts::*;
use crate::error::{Error, Result};
use crate::schedule::{ListingKind, Source};

/// Everything a run needs. `Default` reproduces the venue's three listings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppOptions {
    pub sources: Vec<Source>,
    pub output: OutputOptions,
    pub net: NetOptions,
    /// Abort on the first failed fetch instead of skipping the item.
    pub strict: bool,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            sources: default_sources(),
            output: OutputOptions::default(),
            net: NetOptions::default(),
            strict: false,
        }
    }
}

pub fn default_sources() -> Vec<Source> {
    vec![
        Source::new(NOW_PLAYING_URL, ListingKind::Film),
        Source::new(COMING_SOON_URL, ListingKind::Film),
        Source::new(ALL_EVENTS_URL, ListingKind::Event),
    ]
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputOptions {
    pub dir: PathBuf,
    pub full_file: String,
    pub today_file: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            full_file: s!(FULL_FILE),
            today_file: s!(TODAY_FILE),
        }
    }
}

impl OutputOptions {
    pub fn full_path(&self) -> PathBuf {
        self.dir.join(&self.full_file)
    }
    pub fn today_path(&self) -> PathBuf {
        self.dir.join(&self.today_file)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NetOptions {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub workers: usize,
    pub pause_ms: u64,
}

impl Default for NetOptions {
    fn default() -> Self {
        Self {
            timeout_secs: TIMEOUT_SECS,
            user_agent: s!(USER_AGENT),
            workers: WORKERS,
            pause_ms: REQUEST_PAUSE_MS,
        }
    }
}

impl NetOptions {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    /// Clamped to `1..=MAX_WORKERS`.
    pub fn workers(&self) -> usize {
        self.workers.clamp(1, MAX_WORKERS)
    }
}

impl AppOptions {
    /// Read a TOML file; missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text).map_err(|e| Error::Config { path: path.to_path_buf(), source: Box::new(e) })
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let opts: AppOptions = toml::from_str(text)?;
        if opts.sources.is_empty() {
            return Err(Error::EmptySources);
        }
        Ok(opts)
    }
}
