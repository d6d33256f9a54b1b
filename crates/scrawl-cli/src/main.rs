//! scrawl-cli
//!
//! Draws the requested shapes to the standard output, one description per line.

// Modules
pub(crate) mod cli;

fn main() -> anyhow::Result<()> {
    setup_tracing();
    cli::run()
}

fn setup_tracing() {
    // Logs go to stderr, stdout carries only the rendered shape lines.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
