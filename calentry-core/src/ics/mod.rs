//! ICS document generation and re-parsing.
//!
//! Generation writes the RFC 5545 subset this app needs directly, line by
//! line, keeping the output byte-stable across calls. Parsing leans on the
//! `icalendar` crate's parser and only recovers the fields generation emits.

mod escape;
mod generate;
mod parse;

pub use escape::{escape_text, unescape_text};
pub use generate::serialize;
pub use parse::parse_records;
