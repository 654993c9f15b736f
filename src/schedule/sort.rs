// src/schedule/sort.rs

use super::{Occurrence, Schedule};

/// Order by date only. `sort_by_cached_key` is stable, so showings on the
/// same date (and all `TBD`s) keep their discovery order; time of day is not
/// consulted.
pub fn sort(mut schedule: Schedule) -> Schedule {
    schedule.sort_by_cached_key(Occurrence::sort_key);
    schedule
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::schedule::EntityRef;

    fn occ(title: &str, date: &str, time: &str) -> Occurrence {
        let e = Arc::new(EntityRef::new(title, format!("http://venue/{title}")));
        Occurrence::new(&e, date, time)
    }

    fn dates(s: &Schedule) -> Vec<&str> {
        s.iter().map(|o| o.raw_date.as_str()).collect()
    }

    #[test]
    fn unknown_goes_last() {
        let sched = vec![occ("a", "Mar 5", ""), occ("b", "TBD", ""), occ("c", "Jan 1", "")];
        assert_eq!(dates(&sort(sched)), vec!["Jan 1", "Mar 5", "TBD"]);
    }

    #[test]
    fn ties_keep_discovery_order() {
        let sched = vec![
            occ("A", "Mar 12, Fri", "7:00 PM"),
            occ("Z", "Mar 11, Thu", "1:00 PM"),
            occ("B", "March 12, Fri", "7:00 PM"),
        ];
        let titles: Vec<_> = sort(sched).iter().map(|o| o.entity.title.clone()).collect();
        assert_eq!(titles, vec!["Z", "A", "B"]);
    }

    #[test]
    fn time_of_day_is_not_ordered() {
        let sched = vec![occ("late", "Mar 12, Fri", "9:00 PM"), occ("early", "Mar 12, Fri", "1:00 PM")];
        let titles: Vec<_> = sort(sched).iter().map(|o| o.entity.title.clone()).collect();
        assert_eq!(titles, vec!["late", "early"]);
    }

    #[test]
    fn unparseable_dates_sort_with_tbd_in_order() {
        let sched = vec![occ("x", "Soon", ""), occ("y", "TBD", ""), occ("z", "Dec 30", "")];
        assert_eq!(dates(&sort(sched)), vec!["Dec 30", "Soon", "TBD"]);
    }

    #[test]
    fn january_sorts_before_december() {
        let sched = vec![occ("x", "Dec 30, Tue", ""), occ("y", "Jan 2, Fri", "")];
        assert_eq!(dates(&sort(sched)), vec!["Jan 2, Fri", "Dec 30, Tue"]);
    }
}
