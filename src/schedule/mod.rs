// src/schedule/mod.rs
//! Core records of the pipeline and the ordering over them.
//!
//! ```text
//! specs::listing → EntityRef ──┐
//! specs::{film,event} ─────────┴→ Occurrence* → Schedule → sort::sort → render
//! ```
//!
//! `date` turns scraped date text into a [`date::SortKey`]; `sort` orders a
//! [`Schedule`] by that key.

pub mod date;
pub mod sort;

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

pub use date::SortKey;
pub use sort::sort;

/// Which kind of listing a source publishes. Picks both the card policy on the
/// listing page and the layout of the detail pages behind it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    Film,
    Event,
}

impl ListingKind {
    pub fn label(&self) -> &'static str {
        match self {
            ListingKind::Film => "film",
            ListingKind::Event => "event",
        }
    }
}

impl fmt::Display for ListingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for ListingKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "film" | "films" | "movie" => Ok(ListingKind::Film),
            "event" | "events" => Ok(ListingKind::Event),
            other => Err(format!("Unknown listing kind: {other}")),
        }
    }
}

/// One listing page to scrape.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Source {
    pub url: String,
    pub kind: ListingKind,
}

impl Source {
    pub fn new(url: impl Into<String>, kind: ListingKind) -> Self {
        Self { url: url.into(), kind }
    }
}

/// A schedulable thing (film or event) as found on a listing card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntityRef {
    pub title: String,
    pub detail_url: String,
}

impl EntityRef {
    pub fn new(title: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self { title: title.into(), detail_url: detail_url.into() }
    }
}

/// One concrete showing. Several occurrences may share one entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Occurrence {
    pub entity: Arc<EntityRef>,
    pub raw_date: String,
    pub raw_time: String,
}

impl Occurrence {
    pub fn new(entity: &Arc<EntityRef>, raw_date: impl Into<String>, raw_time: impl Into<String>) -> Self {
        Self {
            entity: Arc::clone(entity),
            raw_date: raw_date.into(),
            raw_time: raw_time.into(),
        }
    }

    /// Derived on demand; never stored.
    pub fn sort_key(&self) -> SortKey {
        date::sort_key(&self.raw_date)
    }
}

/// Occurrences in discovery order until [`sort`] reorders them.
pub type Schedule = Vec<Occurrence>;
