// src/scrape/mod.rs
mod scrape;

pub use scrape::{BuildOptions, BuildSummary, build};
