//! Sources producing raw delimited text.

use crate::common::{Error, Result, decode_text};
use std::future::Future;
use std::path::{Path, PathBuf};

/// File extensions accepted at the source boundary (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Something that yields raw text when asked.
pub trait Source {
    /// Deliver the full text content.
    fn load(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Reject paths whose extension is not `.csv` or `.txt`.
///
/// # Errors
///
/// [`Error::UnsupportedExtension`] naming the offending extension (empty when
/// the path has none).
pub fn check_extension(path: &Path) -> Result<()> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    if ACCEPTED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(())
    } else {
        tracing::warn!(path = %path.display(), extension = %extension, "rejected source file");
        Err(Error::UnsupportedExtension(extension))
    }
}

/// A delimited text file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for `path` after checking its extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        check_extension(path)?;
        Ok(FileSource {
            path: path.to_path_buf(),
        })
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Source for FileSource {
    async fn load(&self) -> Result<String> {
        let bytes = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "read source file");
        Ok(decode_text(&bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_extension() {
        assert!(check_extension(Path::new("data.csv")).is_ok());
        assert!(check_extension(Path::new("DATA.TXT")).is_ok());
        assert!(matches!(
            check_extension(Path::new("report.xlsx")),
            Err(Error::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
        assert!(matches!(
            check_extension(Path::new("no_extension")),
            Err(Error::UnsupportedExtension(ext)) if ext.is_empty()
        ));
    }

    #[tokio::test]
    async fn test_load_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("people.csv");
        std::fs::write(&path, b"\xEF\xBB\xBFname,age\nAna,30\n").unwrap();

        let source = FileSource::open(&path).unwrap();
        let text = source.load().await.unwrap();
        assert_eq!(text, "name,age\nAna,30\n");
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::open(dir.path().join("missing.txt")).unwrap();
        assert!(matches!(source.load().await, Err(Error::Io(_))));
    }
}
