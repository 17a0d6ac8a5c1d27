//! SCW container rebuilding
//!
//! Rebuilds a container around an edited string table: the string region is
//! repacked contiguously, string-group index entries are rewritten, and the
//! header's `content_length` / `string_size` are patched. Command and addon
//! regions plus their index entries pass through byte-for-byte.

use std::fs;
use std::path::Path;

use super::{ScwScript, write_header, write_index};
use crate::encoding::TextCodec;
use crate::error::{Error, Result};
use crate::formats::document::TextDocument;

/// A rebuilt container image plus non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct RebuildOutput {
    /// The complete serialized container.
    pub bytes: Vec<u8>,
    /// One message per string that needed encoding substitution.
    pub warnings: Vec<String>,
}

/// Rebuild a container from its original parse and an edited document.
///
/// Validation is all-or-nothing: on any error no bytes are produced. Encoding
/// substitutions are not errors; they are collected into
/// [`RebuildOutput::warnings`].
///
/// # Errors
///
/// Returns [`Error::CountMismatch`] if the document's `STRING_COUNT` or
/// `TEXT_COUNT` disagrees with the original header, or if the number of
/// `[Index=N]` sections differs from the header's string count.
pub fn rebuild_scw(
    original: &ScwScript,
    document: &TextDocument,
    codec: &TextCodec,
) -> Result<RebuildOutput> {
    let header = &original.header;

    if document.string_count != header.string_count {
        return Err(Error::CountMismatch {
            field: "STRING_COUNT",
            expected: header.string_count,
            found: document.string_count,
        });
    }
    if document.text_count != header.text_count {
        return Err(Error::CountMismatch {
            field: "TEXT_COUNT",
            expected: header.text_count,
            found: document.text_count,
        });
    }
    if document.strings.len() as i32 != header.string_count {
        return Err(Error::CountMismatch {
            field: "STRING_COUNT",
            expected: header.string_count,
            found: document.strings.len() as i32,
        });
    }

    // Encode every string up front, one NUL terminator each
    let mut warnings = Vec::new();
    let mut encoded = Vec::with_capacity(document.strings.len());
    for (i, text) in document.strings.iter().enumerate() {
        let (mut bytes, substituted) = codec.encode(text);
        if substituted {
            let message = format!(
                "string {} contains characters not representable in {}: {text}",
                i + 1,
                codec.name()
            );
            tracing::warn!("{message}");
            warnings.push(message);
        }
        bytes.push(0);
        encoded.push(bytes);
    }

    // Repack gapless: entry i starts where entry i-1 ended
    let mut entries = original.entries.clone();
    let command_count = header.command_count.max(0) as usize;
    let mut offset = 0u32;
    for (entry, bytes) in entries[command_count..].iter_mut().zip(&encoded) {
        entry.start = offset;
        entry.length = bytes.len() as u32;
        offset += entry.length;
    }

    let string_region: Vec<u8> = encoded.concat();

    let mut content = write_index(&entries);
    content.extend_from_slice(&original.command_region);
    content.extend_from_slice(&string_region);
    content.extend_from_slice(&original.addon_region);

    let mut new_header = header.clone();
    new_header.content_length = content.len() as i32;
    new_header.string_size = string_region.len() as i32;

    let mut bytes = write_header(&new_header);
    bytes.extend_from_slice(&content);

    Ok(RebuildOutput { bytes, warnings })
}

/// Rebuild and write a container to disk.
///
/// The image is assembled fully in memory before the file is created, so a
/// failed rebuild never leaves a partial file behind.
///
/// # Errors
///
/// Returns the [`rebuild_scw`] errors, or [`Error::Io`] if writing fails.
///
/// [`Error::Io`]: crate::Error::Io
pub fn write_scw<P: AsRef<Path>>(
    path: P,
    original: &ScwScript,
    document: &TextDocument,
    codec: &TextCodec,
) -> Result<RebuildOutput> {
    let output = rebuild_scw(original, document, codec)?;
    fs::write(path, &output.bytes)?;
    Ok(output)
}
