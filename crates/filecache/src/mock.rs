use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use anyhow::anyhow;

use crate::{Clock, FsCreateDirsService, FsReadService, FsWriteService};

/// In-memory filesystem that counts calls and yields on every read so
/// concurrent callers interleave.
#[derive(Default)]
pub struct MockFs {
    files: Mutex<HashMap<PathBuf, String>>,
    dirs: Mutex<Vec<PathBuf>>,
    reads: AtomicUsize,
    writes: AtomicUsize,
}

impl MockFs {
    pub fn insert(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.lock().unwrap().insert(path.into(), content.into());
    }

    pub fn remove(&self, path: impl AsRef<Path>) {
        self.files.lock().unwrap().remove(path.as_ref());
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn dirs(&self) -> Vec<PathBuf> {
        self.dirs.lock().unwrap().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.load(Ordering::SeqCst)
    }

    pub fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

#[async_trait::async_trait]
impl FsReadService for MockFs {
    async fn read_utf8(&self, path: &Path) -> anyhow::Result<String> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        tokio::task::yield_now().await;
        self.get(path)
            .ok_or_else(|| anyhow!("No such file {}", path.display()))
    }
}

#[async_trait::async_trait]
impl FsWriteService for MockFs {
    async fn write(&self, path: &Path, contents: String) -> anyhow::Result<()> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.insert(path, contents);
        Ok(())
    }
}

#[async_trait::async_trait]
impl FsCreateDirsService for MockFs {
    async fn create_dirs(&self, path: &Path) -> anyhow::Result<()> {
        self.dirs.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}

/// Clock that only moves when told to.
#[derive(Default)]
pub struct ManualClock(AtomicI64);

impl ManualClock {
    pub fn at(now: i64) -> Self {
        Self(AtomicI64::new(now))
    }

    pub fn advance(&self, seconds: i64) {
        self.0.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> i64 {
        self.0.load(Ordering::SeqCst)
    }
}
