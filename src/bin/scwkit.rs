//! scwkit command-line binary

fn main() -> anyhow::Result<()> {
    scwkit::cli::run_cli()
}
