//! Error types for HAR conversion
//!
//! Every failure aborts the whole conversion. Entry-level failures carry
//! the index of the offending entry so it can be found in the capture.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("failed to read capture {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON, or a required HAR field is missing
    #[error("failed to parse HAR")]
    Parse(#[from] serde_json::Error),

    #[error("malformed URL {url:?}")]
    MalformedUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid base64 response body")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("entry #{index} failed")]
    Entry {
        index: usize,
        #[source]
        source: Box<ConvertError>,
    },

    #[error("failed to write output {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    /// Attach the position of the entry that failed
    pub fn at_entry(self, index: usize) -> Self {
        ConvertError::Entry {
            index,
            source: Box::new(self),
        }
    }
}
