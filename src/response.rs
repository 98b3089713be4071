//! Response reconstruction

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::error::Result;
use crate::har::HarResponse;
use crate::headers::HeaderMap;

/// Response body bytes, base64-decoded when the capture marks them so
pub fn decode_body(response: &HarResponse) -> Result<Vec<u8>> {
    let Some(content) = response.content.as_ref() else {
        return Ok(Vec::new());
    };
    let text = content.text.as_deref().unwrap_or("");

    if content.encoding.as_deref() == Some("base64") {
        let compact: Vec<u8> = text
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        Ok(STANDARD.decode(compact)?)
    } else {
        Ok(text.as_bytes().to_vec())
    }
}

/// Rebuild a status line, headers and body from a HAR response
///
/// Headers are copied as captured. Unlike requests, `:`-prefixed names are
/// not filtered out.
pub fn build_response(response: &HarResponse) -> Result<Vec<u8>> {
    let version = response.http_version.to_uppercase();
    let headers: HeaderMap = response.headers.iter().collect();
    let body = decode_body(response)?;

    let mut bytes = format!(
        "{} {} {}\r\n",
        version, response.status, response.status_text
    )
    .into_bytes();
    headers.write_to(&mut bytes);
    bytes.extend_from_slice(b"\r\n");
    bytes.extend_from_slice(&body);

    Ok(bytes)
}
