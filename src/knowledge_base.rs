use crate::error::Result;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory used when no explicit location is given, matching the layout the
/// chatbot UI expects.
pub const DEFAULT_KNOWLEDGE_BASE_DIR: &str = "knowledgeBase";

/// Filesystem archive of raw uploads, keyed by original filename. Writes are
/// once-per-upload with silent overwrite; there is no versioning and no
/// deletion.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    dir: PathBuf,
}

impl KnowledgeBase {
    /// Open (creating if needed) a knowledge base rooted at `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn open_default() -> Result<Self> {
        Self::new(DEFAULT_KNOWLEDGE_BASE_DIR)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Archive the raw bytes of an upload under its original filename.
    /// The filename is reduced to its final component so uploads cannot
    /// address paths outside the storage directory.
    pub fn save(&self, filename: &str, bytes: &[u8]) -> Result<PathBuf> {
        let name = Path::new(filename).file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("'{}' has no file name component", filename),
            )
        })?;
        let path = self.dir.join(name);
        fs::write(&path, bytes)?;
        debug!("Archived upload to {}", path.display());
        Ok(path)
    }
}
