use std::path::Path;

use anyhow::{Context, Result};

use crate::error::Error;

impl crate::FileFS {
    /// Reads the whole file and decodes it as strict UTF-8.
    pub async fn read_utf8<T: AsRef<Path>>(path: T) -> Result<String> {
        let bytes = Self::read(path.as_ref()).await?;
        String::from_utf8(bytes).map_err(|source| {
            Error::InvalidUtf8 { path: path.as_ref().display().to_string(), source }.into()
        })
    }

    /// Reads the raw bytes of the file at `path`.
    pub async fn read<T: AsRef<Path>>(path: T) -> Result<Vec<u8>> {
        tokio::fs::read(path.as_ref())
            .await
            .with_context(|| format!("Failed to read file {}", path.as_ref().display()))
    }
}
