//! har2wstalker - convert HAR captures into WStalker CSV
//!
//! Each HTTP entry of a capture is rebuilt into raw request and response
//! bytes, base64-encoded, and emitted as one CSV line.

pub mod convert;
pub mod error;
pub mod har;
pub mod headers;
pub mod record;
pub mod request;
pub mod response;

pub use convert::{convert, convert_file, Conversion};
pub use error::{ConvertError, Result};
pub use har::{load_har, parse_har, Har};
pub use record::Record;
