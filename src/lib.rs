//! # scwkit
//!
//! A pure-Rust library for working with SCW4.x script containers, the binary
//! script format used by GsPack-engine games. It round-trips the container's
//! localizable string table through a plain-text document so translators can
//! edit game text and pack it back without touching the bytecode.
//!
//! ## Supported operations
//!
//! - **Extract** - decode a container's string table into an editable
//!   `[Header]` / `[Index=N]` text document
//! - **Repack** - rebuild a container from an edited document, preserving the
//!   command/addon regions byte-for-byte and patching only the string region
//!   and the header fields that describe it
//! - **Batch** - process whole directory trees in parallel, mirroring the
//!   input structure
//!
//! ## Quick Start
//!
//! ```no_run
//! use scwkit::converter::{extract_scw_to_text, repack_text_to_scw};
//! use scwkit::encoding::TextCodec;
//!
//! let codec = TextCodec::shift_jis();
//!
//! // Extract strings into an editable document
//! extract_scw_to_text("SCR/opening", "TXT/opening.txt", &codec)?;
//!
//! // ... edit TXT/opening.txt ...
//!
//! // Rebuild the container around the edited text
//! repack_text_to_scw("SCR/opening", "TXT/opening.txt", "NEW_SCR/opening", &codec)?;
//! # Ok::<(), scwkit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `scwkit` command-line binary

pub mod converter;
pub mod encoding;
pub mod error;
pub mod formats;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::converter::{
        BatchScriptResult, ExtractOutcome, RepackOutcome, batch_extract, batch_repack,
        extract_scw_to_text, find_document_files, find_script_files, repack_text_to_scw,
    };
    pub use crate::encoding::TextCodec;
    pub use crate::error::{Error, Result};
    pub use crate::formats::document::{TextDocument, parse_document, read_document};
    pub use crate::formats::scw::{
        IndexEntry, ScwHeader, ScwScript, parse_scw_bytes, read_scw, rebuild_scw, write_scw,
    };
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
