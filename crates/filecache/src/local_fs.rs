use std::path::Path;

use filecache_fs::FileFS;

use crate::{FsCreateDirsService, FsMetaService, FsReadService, FsWriteService};

/// Filesystem services backed by the local disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFs;

#[async_trait::async_trait]
impl FsReadService for LocalFs {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        FileFS::read_utf8(path).await
    }
}

#[async_trait::async_trait]
impl FsWriteService for LocalFs {
    async fn write(&self, path: &Path, contents: String) -> anyhow::Result<()> {
        FileFS::write(path, contents).await
    }
}

#[async_trait::async_trait]
impl FsCreateDirsService for LocalFs {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        FileFS::create_dir_all(path).await
    }
}

#[async_trait::async_trait]
impl FsMetaService for LocalFs {
    async fn is_file(&self, path: &Path) -> bool {
        FileFS::is_file(path).await
    }

    async fn is_dir(&self, path: &Path) -> bool {
        FileFS::is_dir(path).await
    }
}
