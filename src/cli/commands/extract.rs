//! CLI command for extracting string tables

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{self, DOCUMENT, LOOKING_GLASS};
use crate::converter::{ExtractOutcome, batch_extract, extract_scw_to_text, find_script_files};

/// Extract one container or a whole directory tree.
pub fn execute(source: &Path, destination: &Path, encoding: &str, quiet: bool) -> anyhow::Result<()> {
    let codec = super::resolve_codec(encoding)?;
    let started = Instant::now();

    if source.is_file() {
        match extract_scw_to_text(source, destination, &codec)? {
            ExtractOutcome::Extracted(count) => {
                if !quiet {
                    println!("Extracted {count} strings to {}", destination.display());
                }
            }
            ExtractOutcome::SkippedNoText => {
                println!("{}: TEXT_COUNT is 0, nothing to extract", source.display());
            }
        }
        return Ok(());
    }

    if !quiet {
        progress::print_step(1, 2, LOOKING_GLASS, "Scanning for script files...");
    }
    let scripts = find_script_files(source);

    if !quiet {
        progress::print_step(2, 2, DOCUMENT, "Extracting string tables...");
    }
    let bar = if quiet {
        None
    } else {
        Some(progress::simple_bar(scripts.len() as u64, "Extracting"))
    };

    let result = batch_extract(&scripts, source, destination, &codec, |p| {
        if let Some(bar) = &bar {
            bar.set_position(p.current as u64);
            bar.set_message(p.file.clone());
        }
    });
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }

    if !quiet {
        for line in &result.results {
            println!("  {line}");
        }
        progress::print_done(started.elapsed());
    }
    println!(
        "Processed: {} | Extracted: {} | Skipped: {} | Failed: {}",
        result.processed(),
        result.success_count,
        result.skipped_count,
        result.fail_count
    );

    if result.processed() == 0 {
        println!("\nNo files were processed. Make sure:");
        println!("  1. Your script files are in {}", source.display());
        println!("  2. The files have no extension (e.g. 'opening', not 'opening.scw')");
        println!("  3. The files are valid SCW4.x containers");
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} file(s) failed to extract", result.fail_count);
    }
    Ok(())
}
