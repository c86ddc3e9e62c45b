use std::path::PathBuf;
use thiserror::Error;

pub type SpriteResult<T> = Result<T, SpriteError>;

#[derive(Error, Debug)]
pub enum SpriteError {
    /// Connection failure, non-success status or timeout
    #[error("failed to download {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Directory or file could not be created or written
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SpriteError {
    pub fn network(
        url: &str,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::Network {
            url: url.to_string(),
            source: source.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
