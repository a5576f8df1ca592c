//! Core types for calentry: the event model, the session store, and ICS
//! serialization.
//!
//! The presentation layer constructs validated [`EventRecord`]s, appends them
//! to an [`EventStore`], and exports the store's contents as an iCalendar
//! document with [`ics::serialize`]. All operations are synchronous, pure,
//! and in-memory; nothing here persists beyond the session.

pub mod error;
pub mod event;
pub mod ics;
pub mod store;

// Re-export the main types at crate root for convenience
pub use error::{SerializationError, ValidationError};
pub use event::{EventRecord, Recurrence};
pub use store::EventStore;
