//! # ethio-core
//!
//! Core types, traits, and error definitions for ethiocal.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace: the integer aliases used for calendar
//! fields, the error hierarchy, and the holiday settings that callers feed
//! in from their own configuration source.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Holiday query settings and remote-config day offsets.
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A calendar year in any of the supported calendars.
pub type Year = i32;

/// A signed count of days.
pub type Days = i32;

/// A Julian Day Number (days since 1 January 4713 BC, proleptic Julian).
pub type JulianDay = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{DayOffsets, HolidaySettings};
