//! Container / document conversions
//!
//! File-to-file conversions between SCW containers and their editable text
//! documents, plus the parallel batch layer for whole directory trees.

mod batch;
mod scw_to_text;
mod text_to_scw;

pub use batch::{
    BatchProgress, BatchScriptResult, batch_extract, batch_repack, find_document_files,
    find_script_files,
};
pub use scw_to_text::{ExtractOutcome, extract_scw_to_text};
pub use text_to_scw::{RepackOutcome, repack_text_to_scw};
