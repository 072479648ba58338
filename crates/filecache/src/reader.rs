use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use filecache_fs::FileFS;

use crate::{FileParser, FsReadService, Identity, LocalFs};

/// Reads whole UTF-8 files and optionally parses them into a typed value.
///
/// Read failures and parser failures are both reported as `Err`; the error's
/// context chain tells them apart.
pub struct FileReader<F = LocalFs> {
    infra: Arc<F>,
}

impl FileReader {
    pub fn new() -> Self {
        Self::with_infra(Arc::new(LocalFs))
    }
}

impl Default for FileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FileReader<F> {
    pub fn with_infra(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F: FsReadService> FileReader<F> {
    /// Reads the raw text content of the file at `path`.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<String> {
        self.read_with(path, &Identity).await
    }

    /// Reads the file at `path` and applies `parser` to its content.
    pub async fn read_with<T, P>(&self, path: impl AsRef<Path>, parser: &P) -> Result<T>
    where
        P: FileParser<T> + ?Sized,
    {
        let path = FileFS::resolve(path);
        self.try_read(&path, parser).await.inspect_err(|error| {
            tracing::debug!(path = %path.display(), error = %error, "File read failed");
        })
    }

    async fn try_read<T, P>(&self, path: &Path, parser: &P) -> Result<T>
    where
        P: FileParser<T> + ?Sized,
    {
        let content = self.infra.read_utf8(path).await?;
        parser
            .parse(content)
            .await
            .with_context(|| format!("Failed to parse file {}", path.display()))
    }
}
