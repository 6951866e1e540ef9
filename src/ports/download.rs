//! Filesystem Downloads

use std::fs;
use std::path::{Path, PathBuf};

use super::{FileDownloader, PortError};

/// Saves downloads as files inside a single directory
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn target(&self, filename: &str) -> Result<PathBuf, PortError> {
        let invalid = filename.is_empty()
            || filename == "."
            || filename == ".."
            || filename.contains(['/', '\\']);
        if invalid {
            return Err(PortError::InvalidFilename(filename.to_string()));
        }
        Ok(self.dir.join(filename))
    }
}

impl FileDownloader for DirectoryDownloader {
    fn save(&mut self, bytes: &[u8], filename: &str) -> Result<(), PortError> {
        let path = self.target(filename)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(&path, bytes)?;
        log::info!("Saved {} bytes to {:?}", bytes.len(), path);
        Ok(())
    }
}
