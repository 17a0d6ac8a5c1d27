//! Text document parsing

use std::fs;
use std::path::Path;

use super::TextDocument;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Header,
    Index,
}

/// Read and parse a document file (UTF-8).
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails, plus the [`parse_document`] errors.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<TextDocument> {
    let content = fs::read_to_string(path)?;
    parse_document(&content)
}

/// Parse a document from text.
///
/// Lines are whitespace-trimmed; blank lines separate sections and are never
/// part of string content. Consecutive non-empty lines of one `[Index=N]`
/// section join with `\n`. Sections must appear in strict 1-based ascending
/// order with no gaps or duplicates; any violation rejects the whole
/// document with no partial result.
///
/// # Errors
///
/// Returns [`Error::IndexOutOfOrder`] for a section ordering violation,
/// [`Error::MalformedSection`] for an unparseable `[Index=...]` header, and
/// [`Error::MissingHeaderField`] / [`Error::InvalidHeaderValue`] when the
/// `[Header]` block lacks or garbles a required count.
pub fn parse_document(content: &str) -> Result<TextDocument> {
    let mut string_count: Option<i32> = None;
    let mut text_count: Option<i32> = None;
    let mut description = String::new();
    let mut strings: Vec<String> = Vec::new();
    let mut section = Section::None;

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with('[') {
            if line == "[Header]" {
                section = Section::Header;
            } else if let Some(rest) = line.strip_prefix("[Index=") {
                let number = rest.strip_suffix(']').ok_or_else(|| {
                    Error::MalformedSection(line.to_string())
                })?;
                let found: usize = number
                    .parse()
                    .map_err(|_| Error::MalformedSection(line.to_string()))?;
                let expected = strings.len() + 1;
                if found != expected {
                    return Err(Error::IndexOutOfOrder { expected, found });
                }
                strings.push(String::new());
                section = Section::Index;
            } else {
                section = Section::None;
            }
            continue;
        }

        match section {
            Section::Header => {
                if let Some((key, value)) = line.split_once('=') {
                    match key.trim() {
                        "STRING_COUNT" => {
                            string_count = Some(parse_count("STRING_COUNT", value)?);
                        }
                        "TEXT_COUNT" => {
                            text_count = Some(parse_count("TEXT_COUNT", value)?);
                        }
                        "FILE_DESCRIPTION" => value.trim().clone_into(&mut description),
                        _ => {}
                    }
                }
            }
            Section::Index => {
                // consecutive non-empty lines join into one multi-line string
                if let Some(current) = strings.last_mut() {
                    if !current.is_empty() {
                        current.push('\n');
                    }
                    current.push_str(line);
                }
            }
            Section::None => {}
        }
    }

    Ok(TextDocument {
        string_count: string_count.ok_or(Error::MissingHeaderField("STRING_COUNT"))?,
        text_count: text_count.ok_or(Error::MissingHeaderField("TEXT_COUNT"))?,
        description,
        strings,
    })
}

fn parse_count(field: &'static str, value: &str) -> Result<i32> {
    value.trim().parse().map_err(|_| Error::InvalidHeaderValue {
        field,
        value: value.trim().to_string(),
    })
}
