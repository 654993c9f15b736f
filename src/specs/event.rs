// src/specs/event.rs
//! Event detail pages: exactly one showing, written as one line.
//!
//! ```html
//! <li class="showInfo__date">Sat, March 12 at 7:00 PM</li>
//! ```
//!
//! The line is split on `" at "`: the first piece is the date, the second the
//! time, anything after that (usually the hall) is dropped. If it doesn't
//! split cleanly the event is still listed, with `TBD` for both date and time.

use std::sync::Arc;

use crate::core::html::{Document, Match};
use crate::error::{Error, Result};
use crate::schedule::date::{DateLayout, UNKNOWN_TEXT, detect_layout};
use crate::schedule::{EntityRef, Occurrence};

pub const SHOW_LINE: Match = Match::class("li", "showInfo__date");
pub const SEPARATOR: &str = " at ";

/// Outcome of splitting a show line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventTime {
    Known { date: String, time: String },
    /// Named fallback: the line didn't split; shown as `TBD`/`TBD`.
    Unknown,
}

impl EventTime {
    pub fn parse(line: &str) -> Self {
        let mut parts = line.trim().split(SEPARATOR);
        let (Some(date), Some(time)) = (parts.next(), parts.next()) else {
            return EventTime::Unknown;
        };
        let (date, time) = (date.trim(), time.trim());
        let Some((first, second)) = date.split_once(", ") else {
            return EventTime::Unknown;
        };
        if first.is_empty() || second.is_empty() || time.is_empty() {
            return EventTime::Unknown;
        }

        let date = match detect_layout(date) {
            Some(DateLayout::WeekdayFirst) => join!(second, ", ", first),
            _ => s!(date),
        };
        EventTime::Known { date, time: s!(time) }
    }

    pub fn into_parts(self) -> (String, String) {
        match self {
            EventTime::Known { date, time } => (date, time),
            EventTime::Unknown => (s!(UNKNOWN_TEXT), s!(UNKNOWN_TEXT)),
        }
    }
}

/// One occurrence, or an extraction error when the page has no show line.
pub fn extract(doc: &Document, entity: &Arc<EntityRef>) -> Result<Vec<Occurrence>> {
    let line = doc
        .find_first(&SHOW_LINE)
        .ok_or_else(|| Error::extraction("show date line", entity.detail_url.as_str()))?
        .text();

    let parsed = EventTime::parse(&line);
    if parsed == EventTime::Unknown {
        logd!("{}: unparsed show line {line:?}, using {UNKNOWN_TEXT}", entity.detail_url);
    }
    let (date, time) = parsed.into_parts();
    Ok(vec![Occurrence::new(entity, date, time)])
}
