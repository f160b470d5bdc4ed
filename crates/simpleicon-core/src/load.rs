use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::format::{DecodeError, decode};
use crate::icon::Icon;
use crate::source::{FileSource, SourceError, TextSource};

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),
}

pub fn load_icon_file(path: &Path) -> Result<Icon, LoadError> {
    let source = FileSource::open(path)?;
    load_icon(source)
}

pub fn load_icon<S: TextSource>(mut source: S) -> Result<Icon, LoadError> {
    let text = source.read_text()?;
    let icon = decode(&text)?;
    debug!(
        "loaded icon '{}' ({}x{}, version {})",
        icon.name(),
        icon.width(),
        icon.height(),
        icon.file_version()
    );
    Ok(icon)
}
