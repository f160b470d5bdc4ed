use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::{Path, PathBuf};

use log::debug;

use super::{SourceError, TextSource};

/// Icon text read from a file on disk.
///
/// The file handle is owned by the source and closed when it is dropped.
pub struct FileSource {
    path: PathBuf,
    file: File,
}

impl FileSource {
    pub fn open(path: &Path) -> Result<Self, SourceError> {
        let file = File::open(path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => SourceError::NotFound {
                path: path.to_path_buf(),
            },
            _ => SourceError::Io(err),
        })?;
        Ok(Self {
            path: path.to_path_buf(),
            file,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn read_text(&mut self) -> Result<String, SourceError> {
        let mut text = String::new();
        self.file.read_to_string(&mut text)?;
        debug!("read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }
}
