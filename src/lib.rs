// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod error;
pub mod file;
pub mod progress;
pub mod render;
pub mod schedule;
pub mod scrape;
pub mod specs;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{Error, Result};
pub use schedule::{EntityRef, ListingKind, Occurrence, Schedule, Source};
