//! Editable text document format
//!
//! The human-editable serialization of a container's string table: a
//! `[Header]` block carrying the counts and description, then one `[Index=N]`
//! section per string in strictly ascending 1-based order.
//!
//! ```text
//! [Header]
//! STRING_COUNT = 2
//! TEXT_COUNT = 2
//! FILE_DESCRIPTION = scene01
//!
//! [Index=1]
//! first string
//!
//! [Index=2]
//! second string,
//! continued on a second line
//! ```

mod reader;
mod writer;

pub use reader::{parse_document, read_document};
pub use writer::{document_to_string, write_document};

/// A parsed text document: declared counts plus the ordered string table.
///
/// `string_count` / `text_count` are the document's declarations, not derived
/// from `strings` — the repack step checks them against the original
/// container before accepting the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDocument {
    pub string_count: i32,
    pub text_count: i32,
    pub description: String,
    pub strings: Vec<String>,
}
