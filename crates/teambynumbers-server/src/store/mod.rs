//! Flat-file persistence.
//!
//! Both stores rewrite their whole backing file on every change. That keeps
//! the file trivially readable and is fine for the few hundred rows a team
//! dashboard accumulates; it is the first thing to revisit if that changes.

pub mod flatfile;
pub mod records;
pub mod teams;

pub use records::RecordStore;
pub use teams::TeamDirectory;
