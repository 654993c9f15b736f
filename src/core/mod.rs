// src/core/mod.rs

pub mod html;
pub mod net;

pub use html::{ClassRule, Document, Match, Node};
pub use net::{Fetch, HttpFetcher};
