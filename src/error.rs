use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised while turning a source document into competitions.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("unsupported file format for '{path}'")]
    UnsupportedFormat { path: String },

    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed XML document: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid integer for {field}: '{value}'")]
    InvalidNumber { field: &'static str, value: String },

    #[error("invalid text in {field}: {reason}")]
    InvalidText { field: &'static str, reason: String },

    #[error("malformed document: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON output error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error, following `sysexits.h`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 64,
            Error::Source(_) => 65,
            Error::Io(_) => 74,
            Error::Config(_) => 78,
            Error::Json(_) => 1,
        }
    }
}

impl From<quick_xml::events::attributes::AttrError> for SourceError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        SourceError::Xml(quick_xml::Error::from(err))
    }
}
