//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`CompetitionSource`] - Loads competitions from a snapshot document

mod source;

pub use source::{CompetitionSource, SourceFormat};
