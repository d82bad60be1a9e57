//! # slot-engine
//!
//! Deterministic common free-slot computation across multi-participant busy
//! schedules.
//!
//! Given every participant's busy intervals for a day and a requested
//! duration in minutes, the engine merges all busy time into one disjoint
//! timeline, derives the free gaps against the `[midnight, midnight+24h)`
//! window of the earliest busy interval, and offers up to five
//! fixed-duration slots carved from the start of each qualifying gap.
//!
//! The whole computation is a pure function over in-memory values: no clock
//! reads, no I/O, no shared state. It is safe to call concurrently from any
//! number of threads.
//!
//! ## Modules
//!
//! - [`interval`] — wire types, ISO-8601 parsing, flatten+sort
//! - [`merge`] — collapse overlapping/touching intervals into busy blocks
//! - [`freebusy`] — free-gap derivation against the day window
//! - [`availability`] — slot selection and the public entry point
//! - [`error`] — error types

pub mod availability;
pub mod error;
pub mod freebusy;
pub mod interval;
pub mod merge;

pub use availability::{find_available_slots, FreeSlot, MAX_SLOTS};
pub use error::SlotError;
pub use interval::BusyInterval;
