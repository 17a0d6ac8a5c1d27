//! Text document serialization

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use super::TextDocument;
use crate::error::Result;

/// Serialize a document to its editable text form.
///
/// Emits the `[Header]` block then one `[Index=N]` section per string in
/// ascending order. A string containing `\n` becomes consecutive lines inside
/// its section; the parser's line-joining rule reverses this exactly.
#[must_use]
pub fn document_to_string(document: &TextDocument) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[Header]");
    let _ = writeln!(out, "STRING_COUNT = {}", document.string_count);
    let _ = writeln!(out, "TEXT_COUNT = {}", document.text_count);
    let _ = writeln!(out, "FILE_DESCRIPTION = {}", document.description);
    let _ = writeln!(out);

    for (i, text) in document.strings.iter().enumerate() {
        let _ = writeln!(out, "[Index={}]", i + 1);
        let _ = writeln!(out, "{text}");
        let _ = writeln!(out);
    }

    out
}

/// Serialize a document and write it to disk as UTF-8.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
///
/// [`Error::Io`]: crate::Error::Io
pub fn write_document<P: AsRef<Path>>(path: P, document: &TextDocument) -> Result<()> {
    fs::write(path, document_to_string(document))?;
    Ok(())
}
