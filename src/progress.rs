// src/progress.rs
/// Progress reporting for a scrape run. The CLI draws a bar; tests pass `None`.
pub trait Progress {
    /// A listing source was read and `total` detail pages are about to be fetched.
    fn begin(&mut self, _source: &str, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One detail page produced `occurrences` showings.
    fn item_done(&mut self, _title: &str, _occurrences: usize) {}

    fn item_failed(&mut self, _title: &str) {}

    /// Called once for every `begin`, including when a strict run aborts
    /// part way through the source. Sources whose listing failed never begin.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
