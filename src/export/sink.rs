//! File-delivery sinks.
//!
//! The export client never touches the filesystem directly; it hands the
//! finished document to a [`FileSink`]. [`DirectorySink`] writes to disk,
//! [`BufferSink`] captures in memory for tests and non-disk hosts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Capability to deliver bytes as a named downloadable file.
///
/// Implementations own any intermediate handle they allocate and must
/// release it on every path, success or failure.
pub trait FileSink: Send + Sync {
    fn deliver(&self, bytes: &[u8], mime: &str, file_name: &str) -> io::Result<()>;
}

/// Writes delivered files into a target directory, creating it on demand.
///
/// Only the final path component of the suggested name is used, so a
/// hostile `Content-Disposition` cannot escape the directory.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl FileSink for DirectorySink {
    fn deliver(&self, bytes: &[u8], _mime: &str, file_name: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let name = Path::new(file_name)
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "BaoCaoThue.docx".into());
        fs::write(self.dir.join(name), bytes)
    }
}

/// A file as captured by [`BufferSink`].
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveredFile {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Collects delivered files in memory instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct BufferSink {
    files: Mutex<Vec<DeliveredFile>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all captured files.
    pub fn take(&self) -> Vec<DeliveredFile> {
        self.files
            .lock()
            .map(|mut files| std::mem::take(&mut *files))
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.files.lock().map(|files| files.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FileSink for BufferSink {
    fn deliver(&self, bytes: &[u8], mime: &str, file_name: &str) -> io::Result<()> {
        let mut files = self
            .files
            .lock()
            .map_err(|_| io::Error::other("buffer sink poisoned"))?;
        files.push(DeliveredFile {
            file_name: file_name.to_string(),
            mime: mime.to_string(),
            bytes: bytes.to_vec(),
        });
        Ok(())
    }
}
