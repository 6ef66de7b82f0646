//! File export

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::PromptError;

/// MIME type of exported prompt documents
pub const MARKDOWN_MIME: &str = "text/markdown; charset=utf-8";

/// Hands a named file to the host for saving
pub trait Downloader {
    /// Save `bytes` under `filename`, returning where it ended up
    fn download(&mut self, filename: &str, mime: &str, bytes: &[u8]) -> Result<PathBuf, PromptError>;
}

/// Writes files into a directory, creating it if needed
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl Downloader for DirectoryDownloader {
    fn download(&mut self, filename: &str, mime: &str, bytes: &[u8]) -> Result<PathBuf, PromptError> {
        debug!(%filename, %mime, len = bytes.len(), "DirectoryDownloader::download: called");
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(filename);
        fs::write(&path, bytes)?;
        info!("Exported {} to {}", filename, path.display());
        Ok(path)
    }
}

/// A file handed to a [`MemoryDownloader`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadedFile {
    pub filename: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Keeps downloads in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryDownloader {
    pub files: Vec<DownloadedFile>,
}

impl MemoryDownloader {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Downloader for MemoryDownloader {
    fn download(&mut self, filename: &str, mime: &str, bytes: &[u8]) -> Result<PathBuf, PromptError> {
        self.files.push(DownloadedFile {
            filename: filename.to_string(),
            mime: mime.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(PathBuf::from(filename))
    }
}
