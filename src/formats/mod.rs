//! On-disk forms of the translation catalog.
//!
//! - [`xcstrings`]: the Apple String Catalog the app ships with.
//! - [`csv`]: a spreadsheet form of the translation table for translators.

pub mod csv;
pub mod xcstrings;

pub use xcstrings::{Format as XcstringsFormat, serialize};
