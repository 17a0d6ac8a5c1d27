use clap::Subcommand;
use std::path::PathBuf;

pub mod extract;
pub mod info;
pub mod repack;

#[derive(Subcommand)]
pub enum Commands {
    /// Extract string tables from SCW containers into editable text documents
    Extract {
        /// Container file, or directory of extension-less containers
        #[arg(short, long)]
        source: PathBuf,

        /// Output file or directory for the text documents
        #[arg(short, long)]
        destination: PathBuf,

        /// Text encoding of the string region (label, e.g. "shift_jis")
        #[arg(long, default_value = "shift_jis")]
        encoding: String,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Rebuild SCW containers from edited text documents
    Repack {
        /// Original container file, or directory of containers
        #[arg(short, long)]
        scripts: PathBuf,

        /// Edited text document, or directory of .txt documents
        #[arg(short, long)]
        texts: PathBuf,

        /// Output file or directory for rebuilt containers
        #[arg(short, long)]
        destination: PathBuf,

        /// Text encoding of the string region (label, e.g. "shift_jis")
        #[arg(long, default_value = "shift_jis")]
        encoding: String,

        /// Suppress progress output
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print a container's header fields
    Info {
        /// Container file
        #[arg(short, long)]
        source: PathBuf,

        /// Text encoding used for the description field
        #[arg(long, default_value = "shift_jis")]
        encoding: String,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Extract {
                source,
                destination,
                encoding,
                quiet,
            } => extract::execute(source, destination, encoding, *quiet),
            Commands::Repack {
                scripts,
                texts,
                destination,
                encoding,
                quiet,
            } => repack::execute(scripts, texts, destination, encoding, *quiet),
            Commands::Info { source, encoding } => info::execute(source, encoding),
        }
    }
}

/// Resolve an encoding label to a codec, erroring on unknown labels.
pub(crate) fn resolve_codec(label: &str) -> anyhow::Result<crate::encoding::TextCodec> {
    encoding_rs::Encoding::for_label(label.as_bytes())
        .map(crate::encoding::TextCodec::new)
        .ok_or_else(|| anyhow::anyhow!("unknown encoding label: {label}"))
}
