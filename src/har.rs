//! HAR (HTTP Archive) parsing
//!
//! Models the subset of HAR 1.2 needed to rebuild raw HTTP messages.
//! Fields the conversion never reads are left out and ignored by serde.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConvertError, Result};

/// HAR 1.2 root structure
#[derive(Debug, Deserialize)]
pub struct Har {
    pub log: HarLog,
}

#[derive(Debug, Deserialize)]
pub struct HarLog {
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub creator: Option<HarCreator>,
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HarCreator {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarEntry {
    pub request: HarRequest,
    pub response: HarResponse,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarRequest {
    pub method: String,
    pub url: String,
    pub http_version: String,
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub post_data: Option<HarPostData>,
}

impl HarRequest {
    /// Request body as captured, empty when there is none
    pub fn body_text(&self) -> &str {
        self.post_data
            .as_ref()
            .and_then(|p| p.text.as_deref())
            .unwrap_or("")
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarResponse {
    pub status: u16,
    pub status_text: String,
    pub http_version: String,
    pub headers: Vec<HarHeader>,
    #[serde(default)]
    pub content: Option<HarContent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HarHeader {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct HarPostData {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HarContent {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub encoding: Option<String>,
}

/// Parse a HAR document from a JSON string
pub fn parse_har(content: &str) -> Result<Har> {
    let har: Har = serde_json::from_str(content)?;
    Ok(har)
}

/// Read and parse a HAR file
pub fn load_har(path: impl AsRef<Path>) -> Result<Har> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_har(&content)
}
