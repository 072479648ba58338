use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use filecache_fs::FileFS;

use crate::{FileSerializer, FsCreateDirsService, FsWriteService, Identity, LocalFs};

/// Writes UTF-8 files, creating missing parent directories first.
pub struct FileWriter<F = LocalFs> {
    infra: Arc<F>,
}

impl FileWriter {
    pub fn new() -> Self {
        Self::with_infra(Arc::new(LocalFs))
    }
}

impl Default for FileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> FileWriter<F> {
    pub fn with_infra(infra: Arc<F>) -> Self {
        Self { infra }
    }
}

impl<F: FsWriteService + FsCreateDirsService> FileWriter<F> {
    /// Writes `content` to `path` as-is.
    pub async fn write(&self, path: impl AsRef<Path>, content: impl Into<String>) -> Result<()> {
        let content = content.into();
        self.write_with(path, &content, &Identity).await
    }

    /// Serializes `data` with `serializer` and writes the result to `path`.
    ///
    /// Serialization happens before any filesystem mutation, so a failing
    /// serializer leaves the disk untouched.
    pub async fn write_with<T, S>(
        &self,
        path: impl AsRef<Path>,
        data: &T,
        serializer: &S,
    ) -> Result<()>
    where
        S: FileSerializer<T> + ?Sized,
    {
        let path = FileFS::resolve(path);
        self.try_write(&path, data, serializer)
            .await
            .inspect_err(|error| {
                tracing::debug!(path = %path.display(), error = %error, "File write failed");
            })
    }

    async fn try_write<T, S>(&self, path: &Path, data: &T, serializer: &S) -> Result<()>
    where
        S: FileSerializer<T> + ?Sized,
    {
        let content = serializer
            .serialize(data)
            .await
            .with_context(|| format!("Failed to serialize data for {}", path.display()))?;

        if let Some(parent) = path.parent() {
            self.infra.create_dirs(parent).await?;
        }

        self.infra.write(path, content).await
    }
}
