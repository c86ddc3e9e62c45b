use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::blocking::Client;

use crate::catalog::build_catalog;
use crate::error::{SpriteError, SpriteResult};

pub const ASSETS_DIR_NAME: &str = "assets";

/// Per-request limit for a single sprite download.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_millis(1000);

/// Source of sprite bytes. The real one speaks HTTP; tests swap in fixtures.
pub trait Fetch {
    fn fetch(&self, url: &str, timeout: Duration) -> SpriteResult<Vec<u8>>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new() -> SpriteResult<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| SpriteError::network("<client>", e))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetcher {
    fn fetch(&self, url: &str, timeout: Duration) -> SpriteResult<Vec<u8>> {
        download_asset(&self.client, url, timeout)
    }
}

/// Blocking GET of `url`, failing on connect errors, non-2xx status or timeout.
pub fn download_asset(client: &Client, url: &str, timeout: Duration) -> SpriteResult<Vec<u8>> {
    tracing::debug!(url, timeout_ms = timeout.as_millis() as u64, "GET");

    let response = client
        .get(url)
        .timeout(timeout)
        .send()
        .and_then(|resp| resp.error_for_status())
        .map_err(|e| SpriteError::network(url, e))?;

    let bytes = response
        .bytes()
        .map_err(|e| SpriteError::network(url, e))?;

    Ok(bytes.to_vec())
}

/// Creates `path` (and parents) unless it is already a directory.
pub fn ensure_directory(path: &Path) -> SpriteResult<()> {
    if path.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(path).map_err(|e| SpriteError::io(path, e))
}

/// Writes `bytes` to `directory/filename`, replacing any existing file.
pub fn save_asset(directory: &Path, filename: &str, bytes: &[u8]) -> SpriteResult<PathBuf> {
    let path = directory.join(filename);

    let mut file = fs::File::create(&path).map_err(|e| SpriteError::io(&path, e))?;
    file.write_all(bytes)
        .map_err(|e| SpriteError::io(&path, e))?;

    Ok(path)
}

/// `assets/` beside the running executable.
pub fn default_assets_dir() -> SpriteResult<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| SpriteError::io(ASSETS_DIR_NAME, e))?;
    let base = exe.parent().unwrap_or_else(|| Path::new("."));
    Ok(base.join(ASSETS_DIR_NAME))
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub files_written: usize,
    pub bytes_written: u64,
}

/// Downloads the whole catalog into `dir`, one asset at a time.
///
/// Stops at the first failure; files already written are left in place.
pub fn run_with(fetcher: &impl Fetch, dir: &Path) -> SpriteResult<RunSummary> {
    let catalog = build_catalog();
    ensure_directory(dir)?;

    tracing::info!(count = catalog.len(), dir = %dir.display(), "downloading sprites");

    let mut summary = RunSummary::default();
    for asset in &catalog {
        let bytes = fetcher.fetch(&asset.url, DOWNLOAD_TIMEOUT)?;
        let path = save_asset(dir, asset.file_name(), &bytes)?;

        summary.files_written += 1;
        summary.bytes_written += bytes.len() as u64;
        tracing::info!(
            name = %asset.name,
            group = ?asset.group,
            bytes = bytes.len(),
            path = %path.display(),
            "saved"
        );
    }

    Ok(summary)
}

pub fn run() -> SpriteResult<RunSummary> {
    let dir = default_assets_dir()?;
    let fetcher = HttpFetcher::new()?;
    run_with(&fetcher, &dir)
}
