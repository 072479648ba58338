use std::path::Path;

impl crate::FileFS {
    /// Returns true if `path` points at a regular file, following symlinks.
    /// Any error while probing yields `false`.
    pub async fn is_file<T: AsRef<Path>>(path: T) -> bool {
        tokio::fs::metadata(path.as_ref())
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false)
    }

    /// Returns true if `path` points at a directory, following symlinks.
    /// Any error while probing yields `false`.
    pub async fn is_dir<T: AsRef<Path>>(path: T) -> bool {
        tokio::fs::metadata(path.as_ref())
            .await
            .map(|meta| meta.is_dir())
            .unwrap_or(false)
    }
}
