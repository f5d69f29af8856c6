//! Sinks accepting exported text.

use crate::common::Result;
use crate::view::ExportPayload;
use std::future::Future;
use std::path::{Path, PathBuf};

/// Something that accepts an export.
pub trait Sink {
    /// Accept the payload, returning where it ended up.
    fn accept(&self, payload: &ExportPayload) -> impl Future<Output = Result<PathBuf>> + Send;
}

#[derive(Debug, Clone)]
enum Target {
    /// Directory; the payload's suggested filename is used
    Dir(PathBuf),
    /// Exact file path; the suggested filename is ignored
    File(PathBuf),
}

/// Writes exports to the filesystem.
#[derive(Debug, Clone)]
pub struct FileSink {
    target: Target,
}

impl FileSink {
    /// Write into `dir` under the payload's suggested filename.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        FileSink {
            target: Target::Dir(dir.as_ref().to_path_buf()),
        }
    }

    /// Write to exactly `path`.
    pub fn to_path<P: AsRef<Path>>(path: P) -> Self {
        FileSink {
            target: Target::File(path.as_ref().to_path_buf()),
        }
    }

    fn resolve(&self, payload: &ExportPayload) -> PathBuf {
        match &self.target {
            Target::Dir(dir) => dir.join(&payload.filename),
            Target::File(path) => path.clone(),
        }
    }
}

impl Sink for FileSink {
    async fn accept(&self, payload: &ExportPayload) -> Result<PathBuf> {
        let path = self.resolve(payload);
        tokio::fs::write(&path, payload.text.as_bytes()).await?;
        tracing::info!(path = %path.display(), bytes = payload.text.len(), "wrote export");
        Ok(path)
    }
}
