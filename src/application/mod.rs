//! Application services (use cases).
//!
//! These services turn a loaded snapshot into reports. They depend only on
//! the domain types and the [`CompetitionSource`](crate::port::CompetitionSource)
//! port, never on a concrete document format.

pub mod dump;
pub mod ranking;
pub mod reporter;
pub mod summary;

pub use reporter::{ReportSettings, Reporter};
