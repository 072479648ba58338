//! Filesystem access with pluggable content transforms and a time-bounded
//! in-memory cache.
//!
//! Every fallible operation returns an [`anyhow::Result`]. Callers must
//! branch on it before touching the value: an `Err` carries the context chain
//! of whichever step failed (I/O or transform) and there is no partial data.

mod cache;
mod cached_file;
mod config;
mod infra;
mod local_fs;
mod reader;
mod transform;
mod writer;

#[cfg(test)]
mod mock;

use std::path::Path;

pub use cache::*;
pub use cached_file::*;
pub use config::*;
pub use infra::*;
pub use local_fs::*;
pub use reader::*;
pub use transform::*;
pub use writer::*;

/// Checks if there is a regular file at `path`. Any error yields `false`.
pub async fn is_file(path: impl AsRef<Path>) -> bool {
    LocalFs.is_file(&filecache_fs::FileFS::resolve(path)).await
}

/// Checks if there is a directory at `path`. Any error yields `false`.
pub async fn is_directory(path: impl AsRef<Path>) -> bool {
    LocalFs.is_dir(&filecache_fs::FileFS::resolve(path)).await
}
