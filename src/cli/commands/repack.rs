//! CLI command for rebuilding containers from edited documents

use std::path::Path;
use std::time::Instant;

use crate::cli::progress::{self, LOOKING_GLASS, PACKAGE};
use crate::converter::{batch_repack, find_document_files, repack_text_to_scw};

/// Repack one container or a whole directory tree.
pub fn execute(
    scripts: &Path,
    texts: &Path,
    destination: &Path,
    encoding: &str,
    quiet: bool,
) -> anyhow::Result<()> {
    let codec = super::resolve_codec(encoding)?;
    let started = Instant::now();

    if texts.is_file() {
        let outcome = repack_text_to_scw(scripts, texts, destination, &codec)?;
        for warning in &outcome.warnings {
            eprintln!("warning: {warning}");
        }
        if !quiet {
            println!(
                "Repacked {} strings into {}",
                outcome.string_count,
                destination.display()
            );
        }
        return Ok(());
    }

    if !quiet {
        progress::print_step(1, 2, LOOKING_GLASS, "Scanning for text documents...");
    }
    let documents = find_document_files(texts);

    if !quiet {
        progress::print_step(2, 2, PACKAGE, "Rebuilding containers...");
    }
    let bar = if quiet {
        None
    } else {
        Some(progress::simple_bar(documents.len() as u64, "Repacking"))
    };

    let result = batch_repack(&documents, scripts, texts, destination, &codec, |p| {
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
        "Processed: {} | Repacked: {} | Skipped: {} | Failed: {} | Encoding warnings: {}",
        result.processed(),
        result.success_count,
        result.skipped_count,
        result.fail_count,
        result.warning_count
    );

    if result.processed() == 0 {
        println!("\nNo files were processed. Make sure:");
        println!("  1. Your edited .txt documents are in {}", texts.display());
        println!("  2. The original containers are in {}", scripts.display());
        println!("  3. Each document's base name matches its container's filename");
    }

    if result.fail_count > 0 {
        anyhow::bail!("{} file(s) failed to repack", result.fail_count);
    }
    Ok(())
}
