// src/render.rs
//! Schedule → HTML fragment. One `<tr>` per occurrence:
//! `date | time | <a href=url>title</a>`. Text goes out exactly as scraped.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::schedule::Occurrence;
use crate::schedule::date::today_label;

pub fn render(schedule: &[Occurrence]) -> String {
    render_rows(schedule.iter())
}

/// Only occurrences whose date text is exactly today's label
/// (`"Mar 12, Fri"`). Plain string equality: `"Mar 12,  Fri"` or
/// `"March 12, Fri"` do not count.
pub fn render_today(schedule: &[Occurrence], today: NaiveDate) -> String {
    let label = today_label(today);
    render_rows(schedule.iter().filter(|o| o.raw_date == label))
}

fn render_rows<'a>(rows: impl Iterator<Item = &'a Occurrence>) -> String {
    let mut html = s!("<table>");
    for o in rows {
        // writing into a String can't fail
        let _ = write!(
            html,
            r#"<tr><td>{}</td><td>{}</td><td><a href="{}">{}</a></td></tr>"#,
            o.raw_date, o.raw_time, o.entity.detail_url, o.entity.title
        );
    }
    html.push_str("</table>");
    html
}
