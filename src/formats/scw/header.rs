//! SCW header parsing and serialization

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use super::{DESCRIPTION_SIZE, HEADER_SIZE, MAGIC_SIZE, PADDING2_SIZE, SCW_MAGIC, ScwHeader};
use crate::error::{Error, Result};

/// Parse the fixed 0x1C4-byte header from the start of `data`.
///
/// Only the magic is validated; every other field is taken as declared. The
/// container corpus contains headers with odd padding values, so no range
/// checks happen here — region arithmetic validates what it actually uses.
///
/// # Errors
///
/// Returns [`Error::TruncatedHeader`] if `data` is shorter than 0x1C4 bytes,
/// or [`Error::InvalidScwMagic`] if the magic tag is not `Scw4.x`.
pub fn parse_header(data: &[u8]) -> Result<ScwHeader> {
    if data.len() < HEADER_SIZE {
        return Err(Error::TruncatedHeader {
            expected: HEADER_SIZE,
            actual: data.len(),
        });
    }

    let mut cursor = Cursor::new(data);

    let mut magic = [0u8; MAGIC_SIZE];
    cursor.read_exact(&mut magic)?;

    // The tag is NUL-padded to the full field; stray bytes after the
    // terminator are not a valid magic
    let mut expected = [0u8; MAGIC_SIZE];
    expected[..SCW_MAGIC.len()].copy_from_slice(SCW_MAGIC);
    if magic != expected {
        return Err(Error::InvalidScwMagic(
            String::from_utf8_lossy(&magic)
                .trim_end_matches('\0')
                .to_owned(),
        ));
    }

    let main_version = cursor.read_i32::<LittleEndian>()?;
    let is_compressed = cursor.read_i32::<LittleEndian>()?;
    let content_length = cursor.read_i32::<LittleEndian>()?;
    let compressed_length = cursor.read_i32::<LittleEndian>()?;
    let minor_version = cursor.read_i32::<LittleEndian>()?;
    let command_count = cursor.read_i32::<LittleEndian>()?;
    let string_count = cursor.read_i32::<LittleEndian>()?;
    let addon_count = cursor.read_i32::<LittleEndian>()?;
    let command_size = cursor.read_i32::<LittleEndian>()?;
    let string_size = cursor.read_i32::<LittleEndian>()?;
    let addon_size = cursor.read_i32::<LittleEndian>()?;
    let padding1 = cursor.read_i32::<LittleEndian>()?;
    let text_count = cursor.read_i32::<LittleEndian>()?;

    let mut padding2 = [0u8; PADDING2_SIZE];
    cursor.read_exact(&mut padding2)?;

    let mut description = [0u8; DESCRIPTION_SIZE];
    cursor.read_exact(&mut description)?;

    Ok(ScwHeader {
        magic,
        main_version,
        is_compressed,
        content_length,
        compressed_length,
        minor_version,
        command_count,
        string_count,
        addon_count,
        command_size,
        string_size,
        addon_size,
        padding1,
        text_count,
        padding2,
        description,
    })
}

/// Serialize a header back to its fixed 0x1C4-byte layout.
///
/// Byte-exact inverse of [`parse_header`] for every field, including the raw
/// padding and description blocks.
#[must_use]
pub fn write_header(header: &ScwHeader) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_SIZE);

    // Infallible: Vec<u8> writes cannot fail
    let _ = out.write_all(&header.magic);
    let _ = out.write_i32::<LittleEndian>(header.main_version);
    let _ = out.write_i32::<LittleEndian>(header.is_compressed);
    let _ = out.write_i32::<LittleEndian>(header.content_length);
    let _ = out.write_i32::<LittleEndian>(header.compressed_length);
    let _ = out.write_i32::<LittleEndian>(header.minor_version);
    let _ = out.write_i32::<LittleEndian>(header.command_count);
    let _ = out.write_i32::<LittleEndian>(header.string_count);
    let _ = out.write_i32::<LittleEndian>(header.addon_count);
    let _ = out.write_i32::<LittleEndian>(header.command_size);
    let _ = out.write_i32::<LittleEndian>(header.string_size);
    let _ = out.write_i32::<LittleEndian>(header.addon_size);
    let _ = out.write_i32::<LittleEndian>(header.padding1);
    let _ = out.write_i32::<LittleEndian>(header.text_count);
    let _ = out.write_all(&header.padding2);
    let _ = out.write_all(&header.description);

    debug_assert_eq!(out.len(), HEADER_SIZE);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_header_bytes() -> Vec<u8> {
        let mut data = Vec::new();
        let mut magic = [0u8; MAGIC_SIZE];
        magic[..6].copy_from_slice(b"Scw4.x");
        data.extend_from_slice(&magic);
        for value in [3i32, 0, 100, 0, 1, 2, 2, 1, 16, 12, 8, 0, 2] {
            data.extend_from_slice(&value.to_le_bytes());
        }
        data.extend_from_slice(&[0xAB; PADDING2_SIZE]);
        let mut desc = [0u8; DESCRIPTION_SIZE];
        desc[..4].copy_from_slice(b"test");
        data.extend_from_slice(&desc);
        data
    }

    #[test]
    fn test_parse_valid_header() {
        let header = parse_header(&sample_header_bytes()).unwrap();
        assert_eq!(header.main_version, 3);
        assert_eq!(header.content_length, 100);
        assert_eq!(header.command_count, 2);
        assert_eq!(header.string_count, 2);
        assert_eq!(header.addon_count, 1);
        assert_eq!(header.string_size, 12);
        assert_eq!(header.text_count, 2);
        assert_eq!(header.total_entries(), 5);
        assert_eq!(header.index_table_size(), 40);
    }

    #[test]
    fn test_header_round_trip_is_byte_exact() {
        let bytes = sample_header_bytes();
        let header = parse_header(&bytes).unwrap();
        assert_eq!(write_header(&header), bytes);
    }

    #[test]
    fn test_bad_magic_rejected() {
        let mut bytes = sample_header_bytes();
        bytes[0] = b'X';
        assert!(matches!(
            parse_header(&bytes),
            Err(Error::InvalidScwMagic(_))
        ));
    }

    #[test]
    fn test_junk_after_magic_terminator_rejected() {
        let mut bytes = sample_header_bytes();
        // "Scw4.x\0junk\0..." is not a NUL-padded tag
        bytes[7..11].copy_from_slice(b"junk");
        assert!(matches!(
            parse_header(&bytes),
            Err(Error::InvalidScwMagic(_))
        ));
    }

    #[test]
    fn test_short_input_rejected() {
        let bytes = sample_header_bytes();
        let err = parse_header(&bytes[..HEADER_SIZE - 1]).unwrap_err();
        assert!(matches!(err, Error::TruncatedHeader { .. }));
    }
}
