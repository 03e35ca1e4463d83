//! Builds an element tree from raw bytes using `quick-xml` events

use std::str;

use quick_xml::{
    escape::resolve_predefined_entity,
    events::{BytesRef, BytesStart, Event},
    Reader,
};
use tracing::debug;

use crate::config::DecoderConfig;
use crate::error::{ParseError, ParseErrorKind};
use crate::xml::model::{Content, Document, Element};

/// XML parser
#[derive(Debug)]
pub struct Parser<'a> {
    input: &'a [u8],
    config: DecoderConfig,
}

impl<'a> Parser<'a> {
    /// Create a new XML parser with default limits
    pub fn new(input: &'a [u8]) -> Self {
        Self::with_config(input, DecoderConfig::default())
    }

    pub fn with_config(input: &'a [u8], config: DecoderConfig) -> Self {
        Self { input, config }
    }

    /// Parse up to the end of the first root element.
    ///
    /// Anything before the root other than markup (declaration, comments,
    /// doctype, stray text) is skipped, as is anything after it.
    pub fn parse(&mut self) -> Result<Document, ParseError> {
        if self.input.len() > self.config.max_size {
            return Err(ParseError::new(ParseErrorKind::MaxSizeExceeded {
                max: self.config.max_size,
            }));
        }

        let mut reader = Reader::from_reader(self.input);
        let mut open: Vec<Element> = Vec::new();

        loop {
            let event = reader
                .read_event()
                .map_err(|e| ParseError::syntax(e.to_string()).with_offset(reader.error_position()))?;

            match event {
                Event::Start(start) => {
                    self.check_depth(open.len() + 1, reader.buffer_position())?;
                    open.push(element_from_start(&start)?);
                }
                Event::Empty(start) => {
                    self.check_depth(open.len() + 1, reader.buffer_position())?;
                    let element = element_from_start(&start)?;
                    if let Some(root) = attach(&mut open, element) {
                        return Ok(finish(root));
                    }
                }
                Event::End(end) => {
                    let Some(element) = open.pop() else {
                        let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                        return Err(ParseError::syntax(format!("unexpected end element </{name}>"))
                            .with_offset(reader.buffer_position()));
                    };
                    if let Some(root) = attach(&mut open, element) {
                        return Ok(finish(root));
                    }
                }
                Event::Text(text) => {
                    if let Some(parent) = open.last_mut() {
                        let text = text
                            .decode()
                            .map_err(|e| invalid_text(&e, reader.buffer_position()))?;
                        parent.push_text(&text);
                    }
                }
                Event::CData(data) => {
                    if let Some(parent) = open.last_mut() {
                        let text = str::from_utf8(&data)
                            .map_err(|e| invalid_text(&e, reader.buffer_position()))?;
                        parent.push_text(text);
                    }
                }
                Event::GeneralRef(reference) => {
                    if let Some(parent) = open.last_mut() {
                        let resolved = resolve_reference(&reference)
                            .map_err(|e| e.with_offset(reader.buffer_position()))?;
                        parent.push_text(&resolved);
                    }
                }
                Event::Eof => {
                    return Err(match open.last() {
                        None => ParseError::new(ParseErrorKind::NoRoot),
                        Some(element) => ParseError::syntax(format!(
                            "unexpected EOF inside <{}>",
                            element.name
                        ))
                        .with_offset(reader.buffer_position()),
                    });
                }
                _ => {}
            }
        }
    }

    fn check_depth(&self, depth: usize, position: u64) -> Result<(), ParseError> {
        if depth > self.config.max_depth {
            return Err(ParseError::new(ParseErrorKind::MaxDepthExceeded {
                max: self.config.max_depth,
            })
            .with_offset(position));
        }
        Ok(())
    }
}

/// Hands a closed element to its parent; returns it when it was the root
fn attach(open: &mut [Element], element: Element) -> Option<Element> {
    match open.last_mut() {
        Some(parent) => {
            parent.children.push(Content::Element(element));
            None
        }
        None => Some(element),
    }
}

fn finish(root: Element) -> Document {
    debug!(root = %root.name, children = root.children.len(), "parsed element tree");
    Document { root }
}

fn element_from_start(start: &BytesStart<'_>) -> Result<Element, ParseError> {
    let local = start.local_name();
    let name = str::from_utf8(local.as_ref())
        .map_err(|e| ParseError::syntax(format!("invalid element name: {e}")))?;
    let mut element = Element::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| ParseError::syntax(e.to_string()))?;
        let key = attr.key.local_name();
        let key = str::from_utf8(key.as_ref())
            .map_err(|e| ParseError::syntax(format!("invalid attribute name: {e}")))?;
        let value = attr
            .unescape_value()
            .map_err(|e| ParseError::syntax(format!("attribute {key}: {e}")))?;
        // Later duplicates of a local name overwrite earlier ones
        element
            .attributes
            .insert(key.to_string(), value.into_owned());
    }

    Ok(element)
}

fn resolve_reference(reference: &BytesRef<'_>) -> Result<String, ParseError> {
    if let Some(ch) = reference
        .resolve_char_ref()
        .map_err(|e| ParseError::syntax(e.to_string()))?
    {
        return Ok(ch.to_string());
    }

    let name = reference
        .decode()
        .map_err(|e| ParseError::syntax(e.to_string()))?;
    resolve_predefined_entity(&name)
        .map(str::to_string)
        .ok_or_else(|| ParseError::syntax(format!("invalid character entity &{name};")))
}

fn invalid_text(err: &impl std::fmt::Display, position: u64) -> ParseError {
    ParseError::syntax(format!("invalid text: {err}")).with_offset(position)
}
