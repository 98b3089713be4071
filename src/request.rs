//! Request reconstruction
//!
//! Rebuilds the HTTP/1.x wire form of a captured request.

use url::Url;

use crate::error::{ConvertError, Result};
use crate::har::HarRequest;
use crate::headers::HeaderMap;

/// A captured request rebuilt into raw bytes
#[derive(Debug, Clone)]
pub struct RawRequest {
    /// Uppercased request method
    pub method: String,
    /// `scheme://authority` as captured
    pub origin: String,
    pub bytes: Vec<u8>,
}

/// A captured URL split into its components exactly as written
///
/// Nothing is normalised: dot-segments, percent-escapes, letter case and
/// explicit default ports all survive, so replayed payloads stay intact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestUrl<'a> {
    pub scheme: &'a str,
    /// Host and optional port, without userinfo
    pub authority: &'a str,
    pub path: &'a str,
    pub query: &'a str,
    pub fragment: &'a str,
}

impl<'a> RequestUrl<'a> {
    /// Validate `raw` as a URL, then split the original text
    pub fn parse(raw: &'a str) -> Result<Self> {
        Url::parse(raw).map_err(|source| ConvertError::MalformedUrl {
            url: raw.to_string(),
            source,
        })?;

        let (scheme, rest) = raw.split_once(':').unwrap_or(("", raw));
        let (netloc, rest) = match rest.strip_prefix("//") {
            Some(after) => {
                let end = after.find(['/', '?', '#']).unwrap_or(after.len());
                after.split_at(end)
            }
            None => ("", rest),
        };
        let authority = netloc.rsplit_once('@').map_or(netloc, |(_, host)| host);

        let (rest, fragment) = rest.split_once('#').unwrap_or((rest, ""));
        let (path, query) = rest.split_once('?').unwrap_or((rest, ""));

        Ok(Self {
            scheme,
            authority,
            path,
            query,
            fragment,
        })
    }

    /// Path plus non-empty query and fragment, as sent on the request line
    pub fn target(&self) -> String {
        let mut target = self.path.to_string();
        if !self.query.is_empty() {
            target.push('?');
            target.push_str(self.query);
        }
        if !self.fragment.is_empty() {
            target.push('#');
            target.push_str(self.fragment);
        }
        target
    }

    /// `scheme://authority`
    pub fn origin(&self) -> String {
        format!("{}://{}", self.scheme.to_ascii_lowercase(), self.authority)
    }
}

/// Rebuild a request line, headers and body from a HAR request
pub fn build_request(request: &HarRequest) -> Result<RawRequest> {
    let method = request.method.to_uppercase();
    let url = RequestUrl::parse(&request.url)?;
    let version = request.http_version.to_uppercase();

    // HTTP/2 pseudo-headers have no HTTP/1.x form
    let mut headers: HeaderMap = request
        .headers
        .iter()
        .filter(|h| !h.name.starts_with(':'))
        .collect();

    // HTTP/2 captures carry :authority instead of Host
    if !headers.contains_ignore_case("Host") {
        headers.insert("Host", url.authority);
    }

    let body = request.body_text().as_bytes();

    let mut bytes = format!("{} {} {}\r\n", method, url.target(), version).into_bytes();
    headers.write_to(&mut bytes);
    bytes.extend_from_slice(b"\r\n");
    bytes.extend_from_slice(body);

    Ok(RawRequest {
        method,
        origin: url.origin(),
        bytes,
    })
}
