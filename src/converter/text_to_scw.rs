//! Text document to SCW conversion

use std::path::Path;

use crate::encoding::TextCodec;
use crate::error::Result;
use crate::formats::document::read_document;
use crate::formats::scw::{read_scw, write_scw};

/// Result of a single repack.
#[derive(Debug, Clone)]
pub struct RepackOutcome {
    /// Strings written into the rebuilt container.
    pub string_count: usize,
    /// Non-fatal encoding substitution messages.
    pub warnings: Vec<String>,
}

/// Rebuild a container from an edited document, using the original container
/// as the structural template.
///
/// Validation failures (counts, ordering) abort before anything is written;
/// the output path is only created for a complete, valid container.
///
/// # Errors
///
/// Returns an error if the original container or the document cannot be
/// parsed, if their counts disagree, or if the output cannot be written.
pub fn repack_text_to_scw<P: AsRef<Path>>(
    original: P,
    document_path: P,
    dest: P,
    codec: &TextCodec,
) -> Result<RepackOutcome> {
    tracing::info!(
        "Repacking text→SCW: {:?} + {:?} → {:?}",
        original.as_ref(),
        document_path.as_ref(),
        dest.as_ref()
    );

    let script = read_scw(&original, codec)?;
    let document = read_document(&document_path)?;

    let output = write_scw(&dest, &script, &document, codec)?;
    tracing::info!(
        "Rebuilt container with {} strings ({} warnings)",
        document.strings.len(),
        output.warnings.len()
    );

    Ok(RepackOutcome {
        string_count: document.strings.len(),
        warnings: output.warnings,
    })
}
