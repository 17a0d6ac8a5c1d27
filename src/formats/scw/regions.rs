//! Content region splitting
//!
//! The content region is laid out as index table + command region + string
//! region + addon region, with every size declared by the header.

use super::ScwHeader;
use crate::error::{Error, Result};

/// The four slices of a container's content region.
#[derive(Debug, Clone, Copy)]
pub struct ContentRegions<'a> {
    /// Raw index table bytes.
    pub index_table: &'a [u8],
    /// Command bytecode, opaque.
    pub command: &'a [u8],
    /// String payloads, located via string-group index entries.
    pub string: &'a [u8],
    /// Addon blob, opaque.
    pub addon: &'a [u8],
}

fn region_len(field: &'static str, value: i32) -> Result<usize> {
    usize::try_from(value).map_err(|_| Error::NegativeField { field, value })
}

/// Slice `content` into its four regions using the header's declared sizes.
///
/// # Errors
///
/// Returns [`Error::NegativeField`] if a size field is negative, or
/// [`Error::RegionOverflow`] if the declared sizes do not fit in `content`.
pub fn split_content<'a>(header: &ScwHeader, content: &'a [u8]) -> Result<ContentRegions<'a>> {
    let index_size = header.index_table_size();
    let command_size = region_len("commandSize", header.command_size)?;
    let string_size = region_len("stringSize", header.string_size)?;
    let addon_size = region_len("addonSize", header.addon_size)?;

    let needed = index_size + command_size + string_size + addon_size;
    if needed > content.len() {
        return Err(Error::RegionOverflow {
            needed,
            available: content.len(),
        });
    }

    let command_end = index_size + command_size;
    let string_end = command_end + string_size;
    let addon_end = string_end + addon_size;

    Ok(ContentRegions {
        index_table: &content[..index_size],
        command: &content[index_size..command_end],
        string: &content[command_end..string_end],
        addon: &content[string_end..addon_end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::scw::{DESCRIPTION_SIZE, MAGIC_SIZE, PADDING2_SIZE};
    use pretty_assertions::assert_eq;

    fn header_with_sizes(command: i32, string: i32, addon: i32) -> ScwHeader {
        let mut magic = [0u8; MAGIC_SIZE];
        magic[..6].copy_from_slice(b"Scw4.x");
        ScwHeader {
            magic,
            main_version: 0,
            is_compressed: 0,
            content_length: 0,
            compressed_length: 0,
            minor_version: 0,
            command_count: 1,
            string_count: 1,
            addon_count: 0,
            command_size: command,
            string_size: string,
            addon_size: addon,
            padding1: 0,
            text_count: 1,
            padding2: [0u8; PADDING2_SIZE],
            description: [0u8; DESCRIPTION_SIZE],
        }
    }

    #[test]
    fn test_split_in_declared_order() {
        let header = header_with_sizes(4, 3, 2);
        // 2 entries -> 16-byte index table
        let content: Vec<u8> = (0u8..25).collect();
        let regions = split_content(&header, &content).unwrap();
        assert_eq!(regions.index_table.len(), 16);
        assert_eq!(regions.command, &[16, 17, 18, 19]);
        assert_eq!(regions.string, &[20, 21, 22]);
        assert_eq!(regions.addon, &[23, 24]);
    }

    #[test]
    fn test_overflow_rejected() {
        let header = header_with_sizes(4, 3, 2);
        let content = vec![0u8; 24]; // one byte short
        let err = split_content(&header, &content).unwrap_err();
        assert!(matches!(
            err,
            Error::RegionOverflow {
                needed: 25,
                available: 24
            }
        ));
    }

    #[test]
    fn test_negative_size_rejected() {
        let header = header_with_sizes(4, -1, 0);
        let err = split_content(&header, &[0u8; 64]).unwrap_err();
        assert!(matches!(
            err,
            Error::NegativeField {
                field: "stringSize",
                value: -1
            }
        ));
    }

    #[test]
    fn test_trailing_bytes_tolerated() {
        // content longer than the declared regions is fine; extra bytes ignored
        let header = header_with_sizes(0, 0, 0);
        let content = vec![0u8; 100];
        let regions = split_content(&header, &content).unwrap();
        assert_eq!(regions.index_table.len(), 16);
        assert!(regions.command.is_empty());
    }
}
