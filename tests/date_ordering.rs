// tests/date_ordering.rs
//
// Ordering rules as seen from outside the crate.
//
use std::sync::Arc;

use showtimes::schedule::date::{SortKey, parse_date, sort_key};
use showtimes::schedule::{self, EntityRef, Occurrence};

fn occ(title: &str, date: &str) -> Occurrence {
    Occurrence::new(&Arc::new(EntityRef::new(title, "http://u")), date, "7:00 PM")
}

#[test]
fn layouts_and_month_styles_share_a_key() {
    assert_eq!(sort_key("Fri, Mar 12"), sort_key("March 12, Fri"));
    assert_eq!(sort_key("Mar 12, Fri"), sort_key("Fri, March 12"));
    assert_ne!(sort_key("Mar 12, Fri"), SortKey::Unknown);
}

#[test]
fn unknown_always_last() {
    let sorted = schedule::sort(vec![occ("a", "Mar 5"), occ("b", "TBD"), occ("c", "Jan 1")]);
    let dates: Vec<_> = sorted.iter().map(|o| o.raw_date.as_str()).collect();
    assert_eq!(dates, vec!["Jan 1", "Mar 5", "TBD"]);
}

#[test]
fn equal_keys_keep_insertion_order() {
    let sorted = schedule::sort(vec![occ("A", "Fri, Mar 12"), occ("B", "March 12, Fri")]);
    let titles: Vec<_> = sorted.iter().map(|o| o.entity.title.as_str()).collect();
    assert_eq!(titles, vec!["A", "B"]);
}

#[test]
fn format_error_is_distinct_from_tbd() {
    assert_eq!(parse_date("TBD").unwrap(), SortKey::Unknown);
    assert!(parse_date("Opening night").is_err());
    assert_eq!(sort_key("Opening night"), SortKey::Unknown);
}

#[test]
fn no_year_rollover() {
    let sorted = schedule::sort(vec![occ("dec", "Tue, Dec 30"), occ("jan", "Fri, Jan 2")]);
    assert_eq!(sorted[0].entity.title, "jan");
}
