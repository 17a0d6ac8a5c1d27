//! SCW to text document conversion

use std::path::Path;

use crate::encoding::TextCodec;
use crate::error::Result;
use crate::formats::document::{TextDocument, write_document};
use crate::formats::scw::read_scw;

/// Result of a single extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractOutcome {
    /// A document with this many strings was written.
    Extracted(usize),
    /// The container declares `TEXT_COUNT = 0`; nothing to translate, no
    /// document written.
    SkippedNoText,
}

/// Extract a container's string table into an editable document file.
///
/// Containers with `TEXT_COUNT = 0` are skipped explicitly rather than
/// producing an empty document, matching the behavior translators expect:
/// only files that actually carry text show up in the output tree.
///
/// # Errors
///
/// Returns an error if the container cannot be read or parsed, or if the
/// document cannot be written.
pub fn extract_scw_to_text<P: AsRef<Path>>(
    source: P,
    dest: P,
    codec: &TextCodec,
) -> Result<ExtractOutcome> {
    tracing::info!(
        "Extracting SCW→text: {:?} → {:?}",
        source.as_ref(),
        dest.as_ref()
    );

    let script = read_scw(&source, codec)?;

    if script.header.text_count == 0 {
        tracing::info!("TEXT_COUNT is 0, skipping {:?}", source.as_ref());
        return Ok(ExtractOutcome::SkippedNoText);
    }

    let document = TextDocument {
        string_count: script.header.string_count,
        text_count: script.header.text_count,
        description: script.header.description_text(codec),
        strings: script.strings,
    };
    let count = document.strings.len();

    write_document(dest, &document)?;
    tracing::info!("Extracted {count} strings");
    Ok(ExtractOutcome::Extracted(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::document::read_document;
    use crate::formats::scw::test_support::{ContainerSpec, build_container};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_extract_writes_document() {
        let dir = tempfile::tempdir().unwrap();
        let scw_path = dir.path().join("scene");
        let txt_path = dir.path().join("scene.txt");
        std::fs::write(
            &scw_path,
            build_container(&ContainerSpec {
                description: "opening",
                ..ContainerSpec::default()
            }),
        )
        .unwrap();

        let outcome =
            extract_scw_to_text(&scw_path, &txt_path, &TextCodec::shift_jis()).unwrap();
        assert_eq!(outcome, ExtractOutcome::Extracted(2));

        let document = read_document(&txt_path).unwrap();
        assert_eq!(document.string_count, 2);
        assert_eq!(document.description, "opening");
        assert_eq!(document.strings, vec!["AB".to_string(), "CD".to_string()]);
    }

    #[test]
    fn test_zero_text_count_skips_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let scw_path = dir.path().join("scene");
        let txt_path = dir.path().join("scene.txt");
        std::fs::write(
            &scw_path,
            build_container(&ContainerSpec {
                text_count: Some(0),
                ..ContainerSpec::default()
            }),
        )
        .unwrap();

        let outcome =
            extract_scw_to_text(&scw_path, &txt_path, &TextCodec::shift_jis()).unwrap();
        assert_eq!(outcome, ExtractOutcome::SkippedNoText);
        assert!(!txt_path.exists());
    }
}
