//! HID protocol support for multi-axis USB foot pedals
//!
//! This crate parses raw input reports from three-axis foot controllers
//! into a canonical [`PedalState`] and suppresses redundant updates:
//! - fixed per-profile byte offsets for the three analog axes
//! - 8-bit (0-255) and 7-bit (0-127) reporting ranges
//! - change-based suppression via [`AxisNormalizer`]
//!
//! Parsing is total: short or malformed reports read as zero at the
//! missing offsets, and over-range values clamp to the profile maximum.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod input;
pub mod types;

pub use input::*;
pub use types::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Report too short: expected at least {expected} bytes, got {actual}")]
    ReportTooShort { expected: usize, actual: usize },

    #[error("Unknown device profile: {0}")]
    UnknownProfile(String),
}

pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Axis count for all supported pedal profiles.
pub const AXIS_COUNT: usize = 3;
