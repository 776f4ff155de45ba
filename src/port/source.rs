//! Source port for loading competitions from a snapshot document.
//!
//! A source turns raw document text (JSON, XML) into [`Competition`]
//! records. Reporting code depends only on this trait and never on a
//! concrete document format.

use std::fmt;
use std::path::Path;

use crate::domain::Competition;
use crate::error::{Result, SourceError};

/// Document formats a source can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// `{"options": {"option": [...]}}` documents.
    Json,
    /// `<options><option .../></options>` documents.
    Xml,
}

impl SourceFormat {
    /// Detect the format from a file extension (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::UnsupportedFormat`] for any extension other
    /// than `.json` or `.xml`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("xml") => Ok(Self::Xml),
            _ => Err(SourceError::UnsupportedFormat {
                path: path.display().to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Xml => write!(f, "xml"),
        }
    }
}

/// Parsed snapshot of competitions.
///
/// Implementations parse the whole document eagerly so that a malformed
/// document fails before any report runs. A successful `parse` replaces
/// everything loaded by a previous call.
pub trait CompetitionSource {
    /// Format this source reads.
    fn format(&self) -> SourceFormat;

    /// Parse a complete document from raw bytes.
    ///
    /// The adapter owns character decoding, so undecodable input is a
    /// [`SourceError`] like any other malformed document. On error the
    /// source is left empty.
    fn parse_bytes(&mut self, input: &[u8]) -> Result<()>;

    /// Parse a complete document already held as text.
    fn parse(&mut self, input: &str) -> Result<()> {
        self.parse_bytes(input.as_bytes())
    }

    /// Number of top-level option records in the document.
    fn option_count(&self) -> usize;

    /// All competitions in document order.
    fn competitions(&self) -> &[Competition];

    /// Competitions whose series name equals `name`, in document order.
    fn competitions_by_name(&self, name: &str) -> Vec<&Competition> {
        self.competitions()
            .iter()
            .filter(|c| c.competition() == name)
            .collect()
    }
}
