use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::DataError;

use super::DataManager;

/// Keeps the best score as a decimal number in a plain text file.
#[derive(Debug, Clone)]
pub struct FileDataManager {
    path: PathBuf,
}

impl FileDataManager {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> DataError {
        DataError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DataManager for FileDataManager {
    fn load_best_score(&mut self) -> Result<u64, DataError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // first launch
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(self.io_error(e)),
        };
        content
            .trim()
            .parse()
            .map_err(|_| DataError::Malformed {
                path: self.path.clone(),
                content,
            })
    }

    /// Writes a sibling temp file and renames it over the target, so a crash
    /// mid-save leaves either the old score or the new one.
    fn save_best_score(&mut self, score: u64) -> Result<(), DataError> {
        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
                parent
            }
            None => Path::new("."),
        };

        let mut buffer = itoa::Buffer::new();
        let mut file = NamedTempFile::new_in(dir).map_err(|e| self.io_error(e))?;
        file.write_all(buffer.format(score).as_bytes())
            .map_err(|e| self.io_error(e))?;
        file.persist(&self.path).map_err(|e| self.io_error(e.error))?;
        Ok(())
    }
}
