//! Small text helpers exposed as standalone subcommands.
//!
//! - [`codec`] — Base64 encode/decode over UTF-8 or UTF-16LE text.
//! - [`csv`] — free text to single-column CSV.

pub mod codec;
pub mod csv;
