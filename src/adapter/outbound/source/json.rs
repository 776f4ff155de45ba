//! JSON snapshot adapter.
//!
//! Reads documents shaped as:
//!
//! ```text
//! {"options": {"option": [
//!     {"venue": ..., "competition": ..., "closes": ..., "name": ...,
//!      "number": ..., "sport": ..., "game": ...,
//!      "selections": {"selection": [{"number", "name", "odds", "status"}]}}
//! ]}}
//! ```
//!
//! Integer fields may be JSON integers or integer strings.

use serde::Deserialize;
use tracing::debug;

use super::field::{int_from_i64, int_from_text};
use crate::domain::{Competition, CompetitionInfo, Selection};
use crate::error::{Result, SourceError};
use crate::port::{CompetitionSource, SourceFormat};

#[derive(Debug, Default, Deserialize)]
struct DocumentDto {
    #[serde(default)]
    options: Option<OptionsDto>,
}

#[derive(Debug, Default, Deserialize)]
struct OptionsDto {
    #[serde(default)]
    option: Vec<OptionDto>,
}

#[derive(Debug, Deserialize)]
struct OptionDto {
    #[serde(default)]
    venue: Option<String>,
    #[serde(default)]
    competition: Option<String>,
    #[serde(default)]
    closes: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    number: Option<IntDto>,
    #[serde(default)]
    sport: Option<String>,
    #[serde(default)]
    game: Option<String>,
    #[serde(default)]
    selections: Option<SelectionsDto>,
}

#[derive(Debug, Default, Deserialize)]
struct SelectionsDto {
    #[serde(default)]
    selection: Vec<SelectionDto>,
}

#[derive(Debug, Deserialize)]
struct SelectionDto {
    #[serde(default)]
    number: Option<IntDto>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    odds: Option<IntDto>,
    #[serde(default)]
    status: Option<String>,
}

/// Integer field written either as a JSON number or as a string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum IntDto {
    Number(i64),
    Text(String),
}

impl IntDto {
    fn into_int<T>(field: &'static str, value: Option<Self>) -> std::result::Result<T, SourceError>
    where
        T: TryFrom<i64> + std::str::FromStr + Default,
    {
        match value {
            None => Ok(T::default()),
            Some(Self::Number(n)) => int_from_i64(field, n),
            Some(Self::Text(text)) => int_from_text(field, Some(&text)),
        }
    }
}

impl SelectionDto {
    fn into_selection(self) -> std::result::Result<Selection, SourceError> {
        Ok(Selection::new(
            IntDto::into_int("selection.number", self.number)?,
            self.name.unwrap_or_default(),
            IntDto::into_int("selection.odds", self.odds)?,
            self.status.unwrap_or_default(),
        ))
    }
}

impl OptionDto {
    fn into_competition(self) -> std::result::Result<Competition, SourceError> {
        let mut competition = Competition::new(CompetitionInfo {
            venue: self.venue.unwrap_or_default(),
            competition: self.competition.unwrap_or_default(),
            closes: self.closes.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            number: IntDto::into_int("option.number", self.number)?,
            sport: self.sport.unwrap_or_default(),
            game: self.game.unwrap_or_default(),
        });

        for selection in self.selections.unwrap_or_default().selection {
            competition.add_selection(selection.into_selection()?);
        }

        Ok(competition)
    }
}

/// [`CompetitionSource`] backed by a JSON document.
#[derive(Debug, Default)]
pub struct JsonSource {
    competitions: Vec<Competition>,
}

impl JsonSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompetitionSource for JsonSource {
    fn format(&self) -> SourceFormat {
        SourceFormat::Json
    }

    fn parse_bytes(&mut self, input: &[u8]) -> Result<()> {
        self.competitions.clear();

        let document: DocumentDto = serde_json::from_slice(input).map_err(SourceError::Json)?;
        let options = document.options.unwrap_or_default().option;

        let competitions = options
            .into_iter()
            .map(OptionDto::into_competition)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        debug!(options = competitions.len(), "parsed JSON document");
        self.competitions = competitions;
        Ok(())
    }

    fn option_count(&self) -> usize {
        self.competitions.len()
    }

    fn competitions(&self) -> &[Competition] {
        &self.competitions
    }
}
