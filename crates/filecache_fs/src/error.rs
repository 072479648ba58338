use std::string::FromUtf8Error;

use thiserror::Error;

/// Error type for file operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("File {path} is not valid UTF-8: {source}")]
    InvalidUtf8 {
        path: String,
        #[source]
        source: FromUtf8Error,
    },
}
