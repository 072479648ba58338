use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use filecache_fs::FileFS;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{
    CachedFileConfig, Clock, FileCache, FileParser, FileReader, FileSerializer, FileWriter,
    FsCreateDirsService, FsReadService, FsWriteService, Identity, Json, LocalFs, SystemClock,
};

/// File read/write adapter with a built-in time-bounded cache.
///
/// Writes go to disk first and only populate the cache once they succeed.
/// Reads are served from the cache while the entry is fresh, otherwise the
/// file is read, parsed and cached again. Concurrent reads of the same
/// uncached path each hit the filesystem; the last one to finish is cached.
pub struct CachedFile<T, F = LocalFs, C = SystemClock> {
    reader: FileReader<F>,
    writer: FileWriter<F>,
    parser: Box<dyn FileParser<T>>,
    serializer: Box<dyn FileSerializer<T>>,
    cache: FileCache<T, C>,
    config: CachedFileConfig,
}

impl<T: Clone + Send + Sync + 'static> CachedFile<T> {
    pub fn new(
        parser: impl FileParser<T> + 'static,
        serializer: impl FileSerializer<T> + 'static,
    ) -> Self {
        Self::with_parts(Arc::new(LocalFs), SystemClock, parser, serializer)
    }
}

impl CachedFile<String> {
    /// Plain text files, content passes through unchanged.
    pub fn text() -> Self {
        Self::new(Identity, Identity)
    }
}

impl<T> CachedFile<T>
where
    T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
{
    pub fn json() -> Self {
        Self::new(Json::default(), Json::default())
    }
}

impl<T, F, C> CachedFile<T, F, C>
where
    T: Clone + Send + Sync + 'static,
    F: FsReadService + FsWriteService + FsCreateDirsService,
    C: Clock,
{
    pub fn with_parts(
        infra: Arc<F>,
        clock: C,
        parser: impl FileParser<T> + 'static,
        serializer: impl FileSerializer<T> + 'static,
    ) -> Self {
        Self {
            reader: FileReader::with_infra(infra.clone()),
            writer: FileWriter::with_infra(infra),
            parser: Box::new(parser),
            serializer: Box::new(serializer),
            cache: FileCache::with_clock(clock),
            config: CachedFileConfig::default(),
        }
    }

    pub fn with_config(mut self, config: CachedFileConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the default maximum cache age in seconds.
    pub fn max_cache_age(mut self, seconds: i64) -> Self {
        self.config.max_cache_age = Some(seconds);
        self
    }

    pub fn config(&self) -> &CachedFileConfig {
        &self.config
    }

    /// Serializes and writes `data` to `path`. On success the cache holds
    /// `data` itself, not the serialized text.
    pub async fn write(&self, path: impl AsRef<Path>, data: T) -> Result<()> {
        let path = FileFS::resolve(path);
        self.writer
            .write_with(&path, &data, self.serializer.as_ref())
            .await?;
        self.cache.set(&path, data);
        Ok(())
    }

    /// Reads `path`, preferring a cached value younger than the configured
    /// maximum age.
    pub async fn read(&self, path: impl AsRef<Path>) -> Result<T> {
        self.read_inner(FileFS::resolve(path), self.config.max_cache_age)
            .await
    }

    /// Like [`CachedFile::read`] with `max_age` overriding the configured
    /// maximum age.
    pub async fn read_with_max_age(&self, path: impl AsRef<Path>, max_age: i64) -> Result<T> {
        self.read_inner(FileFS::resolve(path), Some(max_age)).await
    }

    /// Checks if `path` is cached and fresh. A stale entry is evicted.
    pub fn has(&self, path: impl AsRef<Path>) -> bool {
        self.cache.has(path, self.config.max_cache_age)
    }

    pub fn has_with_max_age(&self, path: impl AsRef<Path>, max_age: i64) -> bool {
        self.cache.has(path, Some(max_age))
    }

    async fn read_inner(&self, path: PathBuf, max_age: Option<i64>) -> Result<T> {
        if let Some(cached) = self.cache.get(&path, max_age) {
            tracing::debug!(path = %path.display(), "Cache hit");
            return Ok(cached.data);
        }

        tracing::debug!(path = %path.display(), "Cache miss, reading file");
        let data = self.reader.read_with(&path, self.parser.as_ref()).await?;
        self.cache.set(&path, data.clone());
        Ok(data)
    }
}
