//! Snapshot document adapters for the [`CompetitionSource`] port.
//!
//! - [`JsonSource`] - `{"options": {"option": [...]}}` documents
//! - [`XmlSource`] - `<options><option/></options>` documents
//! - [`SourceFactory`] - Picks an adapter for a format or file path

mod field;
pub mod json;
pub mod xml;

use std::path::Path;

pub use json::JsonSource;
pub use xml::XmlSource;

use crate::error::Result;
use crate::port::{CompetitionSource, SourceFormat};

/// Factory for format-specific source adapters.
///
/// All factory methods are static; no instance state is required.
pub struct SourceFactory;

impl SourceFactory {
    /// Create an empty source for `format`.
    #[must_use]
    pub fn create(format: SourceFormat) -> Box<dyn CompetitionSource> {
        match format {
            SourceFormat::Json => Box::new(JsonSource::new()),
            SourceFormat::Xml => Box::new(XmlSource::new()),
        }
    }

    /// Create a source for `path`, using `format` when given and the file
    /// extension otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error when no format is given and the extension is not
    /// `.json` or `.xml`.
    pub fn for_path(path: &Path, format: Option<SourceFormat>) -> Result<Box<dyn CompetitionSource>> {
        let format = match format {
            Some(format) => format,
            None => SourceFormat::from_path(path)?,
        };
        Ok(Self::create(format))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_source_for_extension() {
        let source = SourceFactory::for_path(Path::new("options.xml"), None).unwrap();
        assert_eq!(source.format(), SourceFormat::Xml);
    }

    #[test]
    fn explicit_format_wins_over_extension() {
        let source =
            SourceFactory::for_path(Path::new("snapshot.txt"), Some(SourceFormat::Json)).unwrap();
        assert_eq!(source.format(), SourceFormat::Json);
    }

    #[test]
    fn unknown_extension_without_format_fails() {
        assert!(SourceFactory::for_path(Path::new("snapshot.txt"), None).is_err());
    }
}
