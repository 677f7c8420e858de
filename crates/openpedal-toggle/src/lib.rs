//! Threshold crossing detection for analog toggle pedals
//!
//! Converts a continuous axis into one-shot toggle events: a crossing of
//! the configured threshold in either direction fires exactly once, which
//! debounces jitter on the near side of the threshold into silence. The
//! detector holds no feature state — whether the toggled feature is on or
//! off belongs to the collaborator that receives the event.

#![deny(unsafe_op_in_unsafe_fn)]
#![deny(clippy::unwrap_used)]

pub mod detector;

pub use detector::*;
