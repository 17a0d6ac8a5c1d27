//! Synthetic container builder shared by the format unit tests.

use encoding_rs::SHIFT_JIS;

use super::{IndexEntry, MAGIC_SIZE, write_index};

/// Description of a container to synthesize.
///
/// Each string is given as `(text, slot)` where `slot` is the byte length of
/// its index entry; the encoded text plus terminator is NUL-padded to `slot`.
pub struct ContainerSpec<'a> {
    pub strings: &'a [(&'a str, u32)],
    pub command_region: &'a [u8],
    pub addon_region: &'a [u8],
    /// TEXT_COUNT override; `None` mirrors the string count.
    pub text_count: Option<i32>,
    pub description: &'a str,
    /// Signed adjustment to the built string region length (pads with NULs or
    /// truncates), applied to both the bytes and the declared `stringSize`.
    pub string_region_pad: i64,
}

impl Default for ContainerSpec<'_> {
    fn default() -> Self {
        Self {
            strings: &[("AB", 6), ("CD", 6)],
            command_region: b"",
            addon_region: b"",
            text_count: None,
            description: "",
            string_region_pad: 0,
        }
    }
}

/// Build the full byte image of a container matching `spec`.
pub fn build_container(spec: &ContainerSpec<'_>) -> Vec<u8> {
    let command_count = i32::from(!spec.command_region.is_empty());
    let addon_count = i32::from(!spec.addon_region.is_empty());

    let mut entries = Vec::new();
    if command_count == 1 {
        entries.push(IndexEntry {
            start: 0,
            length: spec.command_region.len() as u32,
        });
    }

    let mut string_region = Vec::new();
    let mut offset = 0u32;
    for (text, slot) in spec.strings {
        let (encoded, _, _) = SHIFT_JIS.encode(text);
        assert!(
            (encoded.len() as u32) < *slot || *slot == 0,
            "slot too small for {text:?}"
        );
        string_region.extend_from_slice(&encoded);
        string_region.resize(string_region.len() + (*slot as usize - encoded.len()), 0);
        entries.push(IndexEntry {
            start: offset,
            length: *slot,
        });
        offset += slot;
    }
    let adjusted = (string_region.len() as i64 + spec.string_region_pad) as usize;
    string_region.resize(adjusted, 0);

    if addon_count == 1 {
        entries.push(IndexEntry {
            start: 0,
            length: spec.addon_region.len() as u32,
        });
    }

    let index_table = write_index(&entries);
    let mut content = index_table;
    content.extend_from_slice(spec.command_region);
    content.extend_from_slice(&string_region);
    content.extend_from_slice(spec.addon_region);

    let mut out = Vec::new();
    let mut magic = [0u8; MAGIC_SIZE];
    magic[..6].copy_from_slice(b"Scw4.x");
    out.extend_from_slice(&magic);

    let text_count = spec.text_count.unwrap_or(spec.strings.len() as i32);
    let fields = [
        4,                             // mainVersion
        0,                             // isCompressed
        content.len() as i32,          // contentLength
        0,                             // compressedLength
        2,                             // minorVersion
        command_count,                 // commandCount
        spec.strings.len() as i32,     // stringCount
        addon_count,                   // addonCount
        spec.command_region.len() as i32,
        string_region.len() as i32,
        spec.addon_region.len() as i32,
        0,                             // padding1
        text_count,
    ];
    for value in fields {
        out.extend_from_slice(&value.to_le_bytes());
    }
    out.extend_from_slice(&[0u8; super::PADDING2_SIZE]);

    let mut description = [0u8; super::DESCRIPTION_SIZE];
    let (desc_bytes, _, _) = SHIFT_JIS.encode(spec.description);
    description[..desc_bytes.len()].copy_from_slice(&desc_bytes);
    out.extend_from_slice(&description);

    out.extend_from_slice(&content);
    out
}
