mod file;

pub use file::FileSource;

use std::path::PathBuf;

use thiserror::Error;

/// Supplies the complete text of one icon file.
pub trait TextSource {
    fn read_text(&mut self) -> Result<String, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("icon file not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
