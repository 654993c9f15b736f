// src/specs/mod.rs
//! # Page specs
//!
//! Each module here knows how to read **one kind of page** on the venue site
//! and nothing else: no fetching, no ordering, no output.
//!
//! - `listing` – listing pages → [`EntityRef`]s, driven by a [`CardPolicy`].
//! - `film`    – film detail pages → many occurrences per page.
//! - `event`   – event detail pages → exactly one occurrence per page.
//!
//! ## Typical call chain
//! ```text
//! scrape::build → net::fetch → Document::parse
//!                            ↘ specs::listing::extract_listings
//!                            ↘ specs::extract_occurrences(layout)
//! ```
//!
//! ## Conventions
//! - Elements are picked with `core::html::Match` value predicates.
//! - Malformed cards are skipped; malformed showtimes degrade to `TBD`.
//! - Specs are tested offline against inline HTML snippets.

pub mod event;
pub mod film;
pub mod listing;

use std::sync::Arc;

use crate::core::html::Document;
use crate::error::Result;
use crate::schedule::{EntityRef, ListingKind, Occurrence};

pub use listing::{CardPolicy, extract_listings};

/// Detail-page shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    /// Show-info blocks with many dated showtimes.
    MultiOccurrence,
    /// One `"<date> at <time>"` line.
    SingleOccurrence,
}

impl Layout {
    pub fn for_kind(kind: ListingKind) -> Self {
        match kind {
            ListingKind::Film => Layout::MultiOccurrence,
            ListingKind::Event => Layout::SingleOccurrence,
        }
    }
}

pub fn extract_occurrences(
    doc: &Document,
    entity: &Arc<EntityRef>,
    layout: Layout,
) -> Result<Vec<Occurrence>> {
    match layout {
        Layout::MultiOccurrence => Ok(film::extract(doc, entity)),
        Layout::SingleOccurrence => event::extract(doc, entity),
    }
}
