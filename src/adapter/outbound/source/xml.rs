//! XML snapshot adapter.
//!
//! Every `option` element whose parent is `options` is a competition,
//! wherever it sits in the tree. Its attributes carry the competition
//! fields; `selections/selection` children carry the selections:
//!
//! ```text
//! <data>
//!   <options>
//!     <option venue="Eden Park" competition="Super Rugby" number="1" ...>
//!       <selections>
//!         <selection number="1" name="Blues" odds="195" status="OK"/>
//!       </selections>
//!     </option>
//!   </options>
//! </data>
//! ```

use std::collections::HashMap;

use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::debug;

use super::field::int_from_text;
use crate::domain::{Competition, CompetitionInfo, Selection};
use crate::error::{Result, SourceError};
use crate::port::{CompetitionSource, SourceFormat};

const OPTIONS: &[u8] = b"options";
const OPTION: &[u8] = b"option";
const SELECTIONS: &[u8] = b"selections";
const SELECTION: &[u8] = b"selection";

type Attributes = HashMap<String, String>;

fn read_attributes(
    element: &BytesStart<'_>,
    decoder: Decoder,
) -> std::result::Result<Attributes, SourceError> {
    let mut attributes = HashMap::new();
    for attribute in element.attributes() {
        let attribute = attribute?;
        let key = decoder
            .decode(attribute.key.as_ref())
            .map_err(quick_xml::Error::from)?;
        let value = attribute.decode_and_unescape_value(decoder)?;
        attributes.insert(key.into_owned(), value.into_owned());
    }
    Ok(attributes)
}

fn text(attributes: &Attributes, key: &str) -> String {
    attributes.get(key).cloned().unwrap_or_default()
}

fn competition_from(attributes: &Attributes) -> std::result::Result<Competition, SourceError> {
    Ok(Competition::new(CompetitionInfo {
        venue: text(attributes, "venue"),
        competition: text(attributes, "competition"),
        closes: text(attributes, "closes"),
        name: text(attributes, "name"),
        number: int_from_text(
            "option.number",
            attributes.get("number").map(String::as_str),
        )?,
        sport: text(attributes, "sport"),
        game: text(attributes, "game"),
    }))
}

fn selection_from(attributes: &Attributes) -> std::result::Result<Selection, SourceError> {
    Ok(Selection::new(
        int_from_text(
            "selection.number",
            attributes.get("number").map(String::as_str),
        )?,
        text(attributes, "name"),
        int_from_text("selection.odds", attributes.get("odds").map(String::as_str))?,
        text(attributes, "status"),
    ))
}

/// An `option` element that has not been closed yet.
struct OpenOption {
    /// Position of its competition in the output.
    index: usize,
    /// Depth of the `option` element.
    depth: usize,
}

/// Walks the element tree and collects competitions in document order.
///
/// Options may nest inside other options; each one is its own competition
/// and only owns the selections under its direct `selections` child.
#[derive(Default)]
struct DocumentWalker {
    /// Names of the currently open elements, outermost first.
    path: Vec<Vec<u8>>,
    /// Open options, innermost last.
    open: Vec<OpenOption>,
    competitions: Vec<Competition>,
    saw_root: bool,
}

impl DocumentWalker {
    fn parent_is(&self, name: &[u8]) -> bool {
        self.path.last().is_some_and(|parent| parent == name)
    }

    fn enter(
        &mut self,
        element: &BytesStart<'_>,
        decoder: Decoder,
    ) -> std::result::Result<(), SourceError> {
        self.saw_root = true;
        let name = element.name();
        let name = name.as_ref();
        let depth = self.path.len();

        if name == OPTION && self.parent_is(OPTIONS) {
            let competition = competition_from(&read_attributes(element, decoder)?)?;
            self.open.push(OpenOption {
                index: self.competitions.len(),
                depth,
            });
            self.competitions.push(competition);
        } else if name == SELECTION && self.parent_is(SELECTIONS) {
            if let Some(option) = self.open.last().filter(|o| depth == o.depth + 2) {
                let selection = selection_from(&read_attributes(element, decoder)?)?;
                self.competitions[option.index].add_selection(selection);
            }
        }
        Ok(())
    }

    fn leave(&mut self) {
        let depth = self.path.len();
        if self.open.last().is_some_and(|o| o.depth == depth) {
            self.open.pop();
        }
    }

    fn walk(mut self, input: &[u8]) -> std::result::Result<Vec<Competition>, SourceError> {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        let mut buf = Vec::new();

        loop {
            buf.clear();
            match reader.read_event_into(&mut buf)? {
                Event::Start(element) => {
                    self.enter(&element, reader.decoder())?;
                    self.path.push(element.name().as_ref().to_vec());
                }
                Event::Empty(element) => {
                    self.enter(&element, reader.decoder())?;
                    self.leave();
                }
                Event::End(_) => {
                    self.path.pop();
                    self.leave();
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !self.saw_root {
            return Err(SourceError::Malformed("document has no root element".into()));
        }
        if !self.path.is_empty() {
            return Err(SourceError::Malformed(format!(
                "unexpected end of document inside <{}>",
                String::from_utf8_lossy(self.path.last().map(Vec::as_slice).unwrap_or_default())
            )));
        }

        Ok(self.competitions)
    }
}

/// [`CompetitionSource`] backed by an XML document.
///
/// Bytes are decoded according to the document's BOM or `encoding`
/// declaration, defaulting to UTF-8.
#[derive(Debug, Default)]
pub struct XmlSource {
    competitions: Vec<Competition>,
}

impl XmlSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompetitionSource for XmlSource {
    fn format(&self) -> SourceFormat {
        SourceFormat::Xml
    }

    fn parse_bytes(&mut self, input: &[u8]) -> Result<()> {
        self.competitions.clear();

        let competitions = DocumentWalker::default().walk(input)?;

        debug!(options = competitions.len(), "parsed XML document");
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
