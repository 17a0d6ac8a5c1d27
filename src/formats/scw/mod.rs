//! SCW4.x script container format
//!
//! Binary container used by GsPack-engine games to hold compiled script
//! bytecode, an addon blob, and the table of in-game text strings. Only the
//! string table is interpreted; command and addon regions pass through
//! byte-for-byte when a container is rebuilt.

mod header;
mod index;
mod reader;
mod regions;
mod writer;

#[cfg(test)]
pub(crate) mod test_support;

pub use header::{parse_header, write_header};
pub use index::{parse_index, write_index};
pub use reader::{parse_scw_bytes, read_scw};
pub use regions::{ContentRegions, split_content};
pub use writer::{RebuildOutput, rebuild_scw, write_scw};

/// "Scw4.x" magic, NUL-padded to the 16-byte magic field
pub const SCW_MAGIC: &[u8] = b"Scw4.x";

/// Size of the magic field
pub const MAGIC_SIZE: usize = 16;

/// Size of the fixed header (0x1C4 = 452 bytes)
pub const HEADER_SIZE: usize = 0x1C4;

/// Size of each index table entry (start u32 + length u32)
pub const INDEX_ENTRY_SIZE: usize = 8;

/// Size of the second padding block
pub const PADDING2_SIZE: usize = 128;

/// Size of the description field (NUL-terminated locale text)
pub const DESCRIPTION_SIZE: usize = 256;

/// Fixed 0x1C4-byte container header.
///
/// Every field is copied through unchanged on rebuild except `content_length`
/// and `string_size`, which are recomputed from the repacked string region.
/// `padding2` and `description` are kept as raw bytes so untouched containers
/// round-trip byte-exact.
#[derive(Debug, Clone)]
pub struct ScwHeader {
    pub magic: [u8; MAGIC_SIZE],
    pub main_version: i32,
    pub is_compressed: i32,
    pub content_length: i32,
    pub compressed_length: i32,
    pub minor_version: i32,
    pub command_count: i32,
    pub string_count: i32,
    pub addon_count: i32,
    pub command_size: i32,
    pub string_size: i32,
    pub addon_size: i32,
    pub padding1: i32,
    pub text_count: i32,
    pub padding2: [u8; PADDING2_SIZE],
    pub description: [u8; DESCRIPTION_SIZE],
}

impl ScwHeader {
    /// Total number of index table entries (command + string + addon groups).
    ///
    /// Widened arithmetic: count fields come straight from the file, so the
    /// sum must not be allowed to overflow `i32`. Oversized totals are caught
    /// downstream when the index table fails to fit the content region.
    #[must_use]
    pub fn total_entries(&self) -> usize {
        let total = i64::from(self.command_count.max(0))
            + i64::from(self.string_count.max(0))
            + i64::from(self.addon_count.max(0));
        usize::try_from(total).unwrap_or(usize::MAX)
    }

    /// Byte size of the index table.
    #[must_use]
    pub fn index_table_size(&self) -> usize {
        self.total_entries().saturating_mul(INDEX_ENTRY_SIZE)
    }

    /// Description bytes up to the first NUL, decoded with the given codec.
    #[must_use]
    pub fn description_text(&self, codec: &crate::encoding::TextCodec) -> String {
        let end = self
            .description
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(DESCRIPTION_SIZE);
        codec.decode(&self.description[..end]).trim().to_string()
    }
}

/// One (start, length) pair from the index table.
///
/// For string-group entries, `start` is relative to the byte immediately after
/// the index table and command region. Command and addon entries are never
/// reinterpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexEntry {
    pub start: u32,
    pub length: u32,
}

/// A fully parsed container: header, index table, opaque regions, and the
/// decoded string table.
#[derive(Debug, Clone)]
pub struct ScwScript {
    pub header: ScwHeader,
    /// All index entries in container order (commands, strings, addons).
    pub entries: Vec<IndexEntry>,
    /// Command region, opaque pass-through.
    pub command_region: Vec<u8>,
    /// String region as stored (kept for diagnostics; rebuilt on repack).
    pub string_region: Vec<u8>,
    /// Addon region, opaque pass-through.
    pub addon_region: Vec<u8>,
    /// Decoded strings, one per string-group index entry.
    pub strings: Vec<String>,
}

impl ScwScript {
    /// Index entries of the string group, in extraction order.
    #[must_use]
    pub fn string_entries(&self) -> &[IndexEntry] {
        let start = self.header.command_count.max(0) as usize;
        let count = self.header.string_count.max(0) as usize;
        &self.entries[start..start + count]
    }
}
