//! # FileFS
//!
//! Async filesystem primitives with standardized error handling.
//!
//! FileFS wraps tokio's filesystem operations with consistent error context
//! using anyhow::Context. Fallible methods report failures in the format
//! "Failed to [operation] [path]" while preserving the original cause.
//! Existence checks never fail: any error while probing collapses to `false`.

mod error;
mod meta;
mod read;
mod resolve;
mod write;

pub use error::Error;

pub struct FileFS;
