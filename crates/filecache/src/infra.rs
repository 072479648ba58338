use std::path::Path;

/// A service for reading files.
///
/// This trait abstracts file reading so the reader and the cached adapter can
/// run against the real filesystem or a test double.
#[async_trait::async_trait]
pub trait FsReadService: Send + Sync {
    /// Reads the content of the file at `path` as UTF-8.
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String>;
}

#[async_trait::async_trait]
pub trait FsWriteService: Send + Sync {
    /// Writes `contents` to `path`, replacing any existing content.
    async fn write(&self, path: &Path, contents: String) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FsCreateDirsService: Send + Sync {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()>;
}

#[async_trait::async_trait]
pub trait FsMetaService: Send + Sync {
    async fn is_file(&self, path: &Path) -> bool;
    async fn is_dir(&self, path: &Path) -> bool;
}
