//! Field conversion shared by the document adapters.

use std::str::FromStr;

use crate::error::SourceError;

/// Parse an optional integer attribute. Missing values default to zero;
/// surrounding whitespace is ignored.
pub(super) fn int_from_text<T>(field: &'static str, raw: Option<&str>) -> Result<T, SourceError>
where
    T: FromStr + Default,
{
    match raw {
        None => Ok(T::default()),
        Some(text) => text
            .trim()
            .parse()
            .map_err(|_| SourceError::InvalidNumber {
                field,
                value: text.to_string(),
            }),
    }
}

/// Narrow an integer that was already parsed as `i64` into the field type.
pub(super) fn int_from_i64<T>(field: &'static str, value: i64) -> Result<T, SourceError>
where
    T: TryFrom<i64>,
{
    T::try_from(value).map_err(|_| SourceError::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
