//! Index table parsing and serialization
//!
//! The index table sits at the start of the content region: one 8-byte
//! (start, length) entry per command, string, and addon, in that group order.

use std::io::Cursor;

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{INDEX_ENTRY_SIZE, IndexEntry};
use crate::error::{Error, Result};

/// Parse `total` entries from the front of `data`.
///
/// # Errors
///
/// Returns [`Error::TruncatedIndex`] if `data` holds fewer than
/// `8 * total` bytes.
pub fn parse_index(data: &[u8], total: usize) -> Result<Vec<IndexEntry>> {
    let expected = total * INDEX_ENTRY_SIZE;
    if data.len() < expected {
        return Err(Error::TruncatedIndex {
            expected,
            actual: data.len(),
        });
    }

    let mut cursor = Cursor::new(&data[..expected]);
    let mut entries = Vec::with_capacity(total);
    for _ in 0..total {
        let start = cursor.read_u32::<LittleEndian>()?;
        let length = cursor.read_u32::<LittleEndian>()?;
        entries.push(IndexEntry { start, length });
    }

    Ok(entries)
}

/// Serialize entries back to their 8-byte stride, preserving order.
#[must_use]
pub fn write_index(entries: &[IndexEntry]) -> Vec<u8> {
    let mut out = Vec::with_capacity(entries.len() * INDEX_ENTRY_SIZE);
    for entry in entries {
        let _ = out.write_u32::<LittleEndian>(entry.start);
        let _ = out.write_u32::<LittleEndian>(entry.length);
    }
    out
}
