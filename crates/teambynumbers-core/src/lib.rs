//! teambynumbers core: record model, validation, flat-file line codec and the
//! error surface shared by the server and tooling.
//!
//! This crate carries no I/O or runtime dependencies. Everything here works
//! on in-memory values and strings so it can be tested without touching disk.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! A malformed line in a backing file must surface as a warning or a skipped
//! record, never as a crash.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod codec;
pub mod error;
pub mod person;
pub mod record;

pub use error::{Result, TbnError, ValidationError};
pub use person::PersonRecord;
pub use record::{RecordView, StatRecord};
