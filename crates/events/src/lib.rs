//! Domain events for the variant editing sessions.
//!
//! Sessions emit events from pure `handle` calls; this crate holds the
//! event contract and the tenant-scoped envelope used to append them to a
//! per-session stream.

pub mod envelope;
pub mod event;

pub use envelope::EventEnvelope;
pub use event::Event;
