//! CLI command for inspecting container headers

use std::path::Path;

use crate::formats::scw::read_scw;

/// Print a container's parsed header.
pub fn execute(source: &Path, encoding: &str) -> anyhow::Result<()> {
    let codec = super::resolve_codec(encoding)?;
    let script = read_scw(source, &codec)?;
    let header = &script.header;

    println!("File:           {}", source.display());
    println!(
        "Version:        {}.{}",
        header.main_version, header.minor_version
    );
    println!("Compressed:     {}", header.is_compressed != 0);
    println!("Content length: {}", header.content_length);
    println!("Commands:       {} ({} bytes)", header.command_count, header.command_size);
    println!("Strings:        {} ({} bytes)", header.string_count, header.string_size);
    println!("Addons:         {} ({} bytes)", header.addon_count, header.addon_size);
    println!("Text count:     {}", header.text_count);
    println!("Description:    {}", header.description_text(&codec));

    if header.is_compressed != 0 {
        eprintln!(
            "note: the compression flag is set; string extraction assumes \
             decompressed content and may misread this file"
        );
    }

    Ok(())
}
