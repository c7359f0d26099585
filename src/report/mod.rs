//! Report renderers for classification and removal results.
//!
//! - [`terminal`] — colored tables with a summary box; respects `--verbose` / `--quiet`.
//! - [`csv`] — one quoted record per (user, license) row, for export.

pub mod csv;
pub mod terminal;
