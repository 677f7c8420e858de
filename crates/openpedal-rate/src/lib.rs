//! Repeat stream control for pedal-driven editor actions
//!
//! Converts directional pedal intensity into a variable-rate stream of
//! editor actions: the further the pedal travels, the faster the stream
//! repeats. One cancellable timer drives the stream; accept and delete
//! directions are mutually exclusive, and a session-sticky fallback
//! downgrades to whole-suggestion commits when the editor cannot accept
//! at finer granularity.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod controller;
pub mod interval;

pub use controller::*;
pub use interval::*;
