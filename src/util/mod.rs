//! Utility functions module
//!
//! Contains helpers for clock and duration labels and Spanish dates.

pub mod format;

pub use format::{format_clock, format_duration, percent, spanish_long_date};
