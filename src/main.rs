use anyhow::Context;
use tracing_subscriber::EnvFilter;

mod catalog;
mod download_sprites;
mod error;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Fetch the minesweeper.online HD skin into assets/ next to the binary
    let summary = download_sprites::run().context("sprite download aborted")?;

    tracing::info!(
        files = summary.files_written,
        bytes = summary.bytes_written,
        "✓ Sprites downloaded successfully"
    );
    Ok(())
}
