//! SCW container reading and string extraction

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::{HEADER_SIZE, ScwScript, parse_header, parse_index, split_content};
use crate::encoding::TextCodec;
use crate::error::{Error, Result};

/// Read and parse an SCW container from disk.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be opened or read, and any of the
/// [`parse_scw_bytes`] errors for malformed containers.
///
/// [`Error::Io`]: crate::Error::Io
pub fn read_scw<P: AsRef<Path>>(path: P, codec: &TextCodec) -> Result<ScwScript> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    parse_scw_bytes(&buffer, codec)
}

/// Parse an SCW container from bytes.
///
/// Decodes the header, slices the content region, and extracts the string
/// table via the string-group index entries. Command and addon regions are
/// kept as opaque blobs so the container can be rebuilt around them.
///
/// # Errors
///
/// Returns [`Error::InvalidScwMagic`] / [`Error::TruncatedHeader`] for a bad
/// header, [`Error::TruncatedContent`] if fewer than `content_length` bytes
/// follow it, [`Error::RegionOverflow`] / [`Error::TruncatedIndex`] for bad
/// region declarations, and [`Error::StringOutOfRange`] if a string entry
/// points past its region.
pub fn parse_scw_bytes(data: &[u8], codec: &TextCodec) -> Result<ScwScript> {
    let header = parse_header(data)?;

    for (field, value) in [
        ("commandCount", header.command_count),
        ("stringCount", header.string_count),
        ("addonCount", header.addon_count),
    ] {
        if value < 0 {
            return Err(Error::NegativeField { field, value });
        }
    }

    let content_length = usize::try_from(header.content_length).map_err(|_| {
        Error::NegativeField {
            field: "contentLength",
            value: header.content_length,
        }
    })?;

    let available = data.len() - HEADER_SIZE;
    if content_length > available {
        return Err(Error::TruncatedContent {
            expected: content_length,
            actual: available,
        });
    }
    let content = &data[HEADER_SIZE..HEADER_SIZE + content_length];

    let regions = split_content(&header, content)?;
    let entries = parse_index(regions.index_table, header.total_entries())?;

    let command_count = header.command_count.max(0) as usize;
    let string_count = header.string_count.max(0) as usize;

    let mut strings = Vec::with_capacity(string_count);
    for (i, entry) in entries[command_count..command_count + string_count]
        .iter()
        .enumerate()
    {
        let start = entry.start as usize;
        let end = start + entry.length as usize;
        if end > regions.string.len() {
            return Err(Error::StringOutOfRange {
                index: i,
                start: entry.start,
                length: entry.length,
                region: regions.string.len(),
            });
        }
        let raw = &regions.string[start..end];
        // Payloads are NUL-terminated and may be NUL-padded to their slot
        let trimmed_len = raw.iter().rposition(|&b| b != 0).map_or(0, |p| p + 1);
        strings.push(codec.decode(&raw[..trimmed_len]));
    }

    tracing::debug!(
        strings = strings.len(),
        commands = command_count,
        "parsed SCW container"
    );

    Ok(ScwScript {
        header,
        entries,
        command_region: regions.command.to_vec(),
        string_region: regions.string.to_vec(),
        addon_region: regions.addon.to_vec(),
        strings,
    })
}
