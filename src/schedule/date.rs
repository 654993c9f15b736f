// src/schedule/date.rs
//! Date text → comparable key.
//!
//! The venue writes dates two ways, always without a year:
//! - `"Fri, Mar 12"`   (weekday first, as on film pages)
//! - `"March 12, Fri"` (month first, the display layout)
//!
//! Month/day fragments are parsed with a fixed leap reference year so that
//! `Feb 29` is valid. Nothing here knows which year a date belongs to: a
//! `Jan 2` always sorts before a `Dec 30`.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Placeholder the site (and our event fallback) uses for an unknown date.
pub const UNKNOWN_TEXT: &str = "TBD";

pub const REFERENCE_YEAR: i32 = 2000;

/// Today's label in the display layout, e.g. `"Mar 12, Fri"`. The day is not
/// zero-padded (`"Mar 1, Sat"`) because that is how the site writes it.
pub const TODAY_FORMAT: &str = "%b %-d, %a";

/// Ordering key. `Unknown` is declared last so the derived `Ord` puts it
/// after every concrete date.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SortKey {
    Date(NaiveDate),
    Unknown,
}

/// Month-name conventions, in the order they are tried.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MonthStyle {
    Full,
    Abbreviated,
}

pub const STRATEGIES: [MonthStyle; 2] = [MonthStyle::Full, MonthStyle::Abbreviated];

impl MonthStyle {
    fn pattern(self) -> &'static str {
        match self {
            MonthStyle::Full => "%B %d %Y",
            MonthStyle::Abbreviated => "%b %d %Y",
        }
    }

    pub fn parse(self, fragment: &str) -> Result<NaiveDate> {
        let candidate = format!("{} {}", fragment.trim(), REFERENCE_YEAR);
        NaiveDate::parse_from_str(&candidate, self.pattern())
            .map_err(|_| Error::Format { raw: s!(fragment) })
    }
}

/// Where the month/day fragment sits in a date string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLayout {
    /// `"Mar 12"`
    Bare,
    /// `"March 12, Fri"`
    MonthFirst,
    /// `"Fri, Mar 12"`
    WeekdayFirst,
}

/// Parse one `"<month> <day>"` fragment, first matching strategy wins.
pub fn parse_month_day(fragment: &str) -> Result<NaiveDate> {
    let mut last = Error::Format { raw: s!(fragment) };
    for style in STRATEGIES {
        match style.parse(fragment) {
            Ok(d) => return Ok(d),
            Err(e) => last = e,
        }
    }
    Err(last)
}

pub fn detect_layout(raw: &str) -> Option<DateLayout> {
    match raw.trim().split_once(", ") {
        None => parse_month_day(raw).ok().map(|_| DateLayout::Bare),
        Some((head, tail)) => {
            if parse_month_day(head).is_ok() {
                Some(DateLayout::MonthFirst)
            } else if parse_month_day(tail).is_ok() {
                Some(DateLayout::WeekdayFirst)
            } else {
                None
            }
        }
    }
}

/// Strict parse. `"TBD"` is a known value, not an error.
pub fn parse_date(raw: &str) -> Result<SortKey> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case(UNKNOWN_TEXT) {
        return Ok(SortKey::Unknown);
    }
    let fragment = match (detect_layout(raw), raw.split_once(", ")) {
        (Some(DateLayout::Bare), _) => raw,
        (Some(DateLayout::MonthFirst), Some((head, _))) => head,
        (Some(DateLayout::WeekdayFirst), Some((_, tail))) => tail,
        _ => return Err(Error::Format { raw: s!(raw) }),
    };
    parse_month_day(fragment).map(SortKey::Date)
}

/// Sorting policy: anything unparseable is `Unknown`.
pub fn sort_key(raw: &str) -> SortKey {
    match parse_date(raw) {
        Ok(key) => key,
        Err(e) => {
            logd!("{e}; sorting as {UNKNOWN_TEXT}");
            SortKey::Unknown
        }
    }
}

/// Rewrite `"Fri, Mar 12"` as `"Mar 12, Fri"`. Anything else comes back as-is.
pub fn display_date(raw: &str) -> String {
    match (detect_layout(raw), raw.trim().split_once(", ")) {
        (Some(DateLayout::WeekdayFirst), Some((weekday, month_day))) => {
            join!(month_day, ", ", weekday)
        }
        _ => s!(raw),
    }
}

/// Unpadded on purpose: a padded `"Mar 01, Sat"` would never equal the
/// scraped `"Mar 1, Sat"`, so early-month showings would drop out of today's table.
pub fn today_label(today: NaiveDate) -> String {
    today.format(TODAY_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(m: u32, d: u32) -> SortKey {
        SortKey::Date(NaiveDate::from_ymd_opt(REFERENCE_YEAR, m, d).unwrap())
    }

    #[test]
    fn both_layouts_and_month_styles_agree() {
        assert_eq!(parse_date("Fri, Mar 12").unwrap(), ymd(3, 12));
        assert_eq!(parse_date("March 12, Fri").unwrap(), ymd(3, 12));
        assert_eq!(sort_key("Fri, Mar 12"), sort_key("March 12, Fri"));
    }

    #[test]
    fn bare_month_day_is_accepted() {
        assert_eq!(parse_date("Jan 1").unwrap(), ymd(1, 1));
        assert_eq!(parse_date(" September 9 ").unwrap(), ymd(9, 9));
    }

    #[test]
    fn abbreviated_strategy_parses_short_names() {
        assert!(MonthStyle::Abbreviated.parse("Oct 3").is_ok());
        assert!(parse_month_day("Oct 3").is_ok());
    }

    #[test]
    fn leap_day_parses() {
        assert_eq!(parse_date("Thu, Feb 29").unwrap(), ymd(2, 29));
    }

    #[test]
    fn tbd_is_unknown_not_error() {
        assert_eq!(parse_date("TBD").unwrap(), SortKey::Unknown);
        assert_eq!(parse_date("tbd").unwrap(), SortKey::Unknown);
    }

    #[test]
    fn garbage_is_format_error_and_sorts_unknown() {
        let err = parse_date("Someday soon").unwrap_err();
        assert!(matches!(err, Error::Format { .. }));
        assert_eq!(sort_key("Someday soon"), SortKey::Unknown);
        assert_eq!(sort_key(""), SortKey::Unknown);
        assert_eq!(sort_key("Fri, Smarch 12"), SortKey::Unknown);
    }

    #[test]
    fn unknown_sorts_after_every_date() {
        assert!(SortKey::Unknown > ymd(12, 31));
        assert!(ymd(1, 2) < ymd(12, 30)); // no year rollover
    }

    #[test]
    fn layout_detection() {
        assert_eq!(detect_layout("Mar 12"), Some(DateLayout::Bare));
        assert_eq!(detect_layout("March 12, Sat"), Some(DateLayout::MonthFirst));
        assert_eq!(detect_layout("Sat, Mar 12"), Some(DateLayout::WeekdayFirst));
        assert_eq!(detect_layout("Sat, Soon"), None);
    }

    #[test]
    fn display_date_reorders_weekday_first_only() {
        assert_eq!(display_date("Fri, Mar 12"), "Mar 12, Fri");
        assert_eq!(display_date("March 12, Sat"), "March 12, Sat");
        assert_eq!(display_date("TBD"), "TBD");
        assert_eq!(display_date("Every Friday"), "Every Friday");
    }

    #[test]
    fn today_label_matches_site_layout() {
        let d = NaiveDate::from_ymd_opt(2021, 3, 12).unwrap();
        assert_eq!(today_label(d), "Mar 12, Fri");
        let d = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        assert_eq!(today_label(d), "Mar 1, Sat");
    }
}
