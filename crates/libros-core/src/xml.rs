//! Reading and formatting the catalog's XML documents.
//!
//! Query responses look like
//!
//! ```xml
//! <books>
//!   <book><isbn>1</isbn><title>..</title><author>A, B</author><format>..</format></book>
//! </books>
//! ```
//!
//! and mutation or error responses carry a `<message>` element.

use std::collections::BTreeSet;
use std::fmt;

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::Event;
use serde::Serialize;

use crate::Result;
use crate::error::{Error, XmlError};

/// Author and format choices offered by the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogOptions {
    /// Individual author names, sorted and de-duplicated.
    pub authors: Vec<String>,
    /// Format names, sorted and de-duplicated.
    pub formats: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Field {
    Author,
    Format,
}

fn reader(xml: &str) -> Reader<&[u8]> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);
    reader
}

fn malformed(reader: &Reader<&[u8]>, err: impl fmt::Display) -> Error {
    XmlError::Malformed {
        position: reader.buffer_position() as u64,
        message: err.to_string(),
    }
    .into()
}

/// Text of the first `<message>` element, if the body has a non-empty one.
///
/// Unparsable bodies yield `None`; the caller falls back to a generic text.
pub fn message(xml: &str) -> Option<String> {
    let mut reader = reader(xml);
    let mut capturing = false;
    let mut text = String::new();

    loop {
        match reader.read_event().ok()? {
            Event::Start(e) if !capturing && e.local_name().as_ref() == b"message" => {
                capturing = true;
            }
            Event::Text(t) if capturing => text.push_str(&t.unescape().ok()?),
            Event::CData(c) if capturing => text.push_str(&String::from_utf8_lossy(&c)),
            Event::End(e) if capturing && e.local_name().as_ref() == b"message" => break,
            Event::Eof => break,
            _ => {}
        }
    }

    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Number of `<book>` elements in a query response.
pub fn count_books(xml: &str) -> Result<usize> {
    let mut reader = reader(xml);
    let mut count = 0;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) if e.local_name().as_ref() == b"book" => {
                count += 1;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(&reader, e)),
        }
    }

    Ok(count)
}

/// Collect the author and format choices from a list-all response.
///
/// Only the first `<author>` and `<format>` of each `<book>` count. Author
/// texts are comma-separated lists of names.
pub fn catalog_options(xml: &str) -> Result<CatalogOptions> {
    let mut reader = reader(xml);
    let mut authors = BTreeSet::new();
    let mut formats = BTreeSet::new();

    let mut book_depth = 0usize;
    let mut seen_author = false;
    let mut seen_format = false;
    let mut capture: Option<Field> = None;
    let mut text = String::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => return Err(malformed(&reader, e)),
        };

        match event {
            Event::Start(e) => match e.local_name().as_ref() {
                b"book" => {
                    book_depth += 1;
                    seen_author = false;
                    seen_format = false;
                }
                b"author" if book_depth > 0 && !seen_author && capture.is_none() => {
                    capture = Some(Field::Author);
                    text.clear();
                }
                b"format" if book_depth > 0 && !seen_format && capture.is_none() => {
                    capture = Some(Field::Format);
                    text.clear();
                }
                _ => {}
            },
            Event::Text(t) if capture.is_some() => {
                let unescaped = t.unescape().map_err(|e| malformed(&reader, e))?;
                text.push_str(&unescaped);
            }
            Event::CData(c) if capture.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c));
            }
            Event::End(e) => match (e.local_name().as_ref(), capture) {
                (b"author", Some(Field::Author)) => {
                    for name in text.split(',').map(str::trim).filter(|n| !n.is_empty()) {
                        authors.insert(name.to_string());
                    }
                    seen_author = true;
                    capture = None;
                }
                (b"format", Some(Field::Format)) => {
                    let format = text.trim();
                    if !format.is_empty() {
                        formats.insert(format.to_string());
                    }
                    seen_format = true;
                    capture = None;
                }
                (b"book", _) => book_depth = book_depth.saturating_sub(1),
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(CatalogOptions {
        authors: authors.into_iter().collect(),
        formats: formats.into_iter().collect(),
    })
}

/// Re-indent a document for the text view: two spaces per level, elements
/// holding only text stay on one line.
pub fn format_xml(xml: &str) -> Result<String> {
    let mut reader = reader(xml);
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    loop {
        match reader.read_event() {
            Ok(Event::Eof) => break,
            Ok(event) => writer.write_event(event).map_err(|e| XmlError::Write {
                message: e.to_string(),
            })?,
            Err(e) => return Err(malformed(&reader, e)),
        }
    }

    let bytes = writer.into_inner();
    let formatted = String::from_utf8(bytes).map_err(|e| XmlError::Write {
        message: e.to_string(),
    })?;
    Ok(formatted.trim().to_string())
}
