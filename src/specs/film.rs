// src/specs/film.rs
//! Film detail pages: any number of showings.
//!
//! ```html
//! <div class="sidebar__showInfo">
//!   <ul>
//!     <li class="showInfo__date--weekday">
//!       <span class="date">Fri, Mar 12</span>
//!       <span class="time">4:00 PM</span>
//!       <span class="time">7:00 PM</span>
//!     </li>
//!   </ul>
//! </div>
//! ```
//!
//! The date `li` carries a site-specific suffix, so it is matched by prefix.
//! Each (date, time) pair becomes one occurrence; the date is rewritten into
//! the `"Mar 12, Fri"` display layout.

use std::sync::Arc;

use crate::core::html::{Document, Match};
use crate::schedule::date::display_date;
use crate::schedule::{EntityRef, Occurrence};

pub const SHOW_INFO: Match = Match::class("div", "sidebar__showInfo");
pub const DATE_BLOCK: Match = Match::prefix("li", "showInfo__date");
pub const DATE_TEXT: Match = Match::class("span", "date");
pub const TIME_TEXT: Match = Match::class("span", "time");

pub fn extract(doc: &Document, entity: &Arc<EntityRef>) -> Vec<Occurrence> {
    let mut out = Vec::new();

    for block in doc.find_all(&SHOW_INFO) {
        for day in block.find_all(&DATE_BLOCK) {
            let Some(date) = day.find_first(&DATE_TEXT) else {
                logd!("{}: date block without a date span", entity.detail_url);
                continue;
            };
            let date = display_date(&date.text());

            for time in day.find_all(&TIME_TEXT) {
                out.push(Occurrence::new(entity, date.clone(), time.text()));
            }
        }
    }
    out
}
