//! HAR to WStalker conversion
//!
//! Entries are converted in capture order. Entries whose URL is not
//! `http` or `https` (e.g. WebSocket upgrades) are skipped. Any other
//! failure aborts the whole conversion and nothing is written.

use std::path::Path;

use tracing::{debug, info};

use crate::error::{ConvertError, Result};
use crate::har::{load_har, Har, HarEntry};
use crate::record::Record;
use crate::request::build_request;
use crate::response::build_response;

/// Result of converting a whole capture
#[derive(Debug, Default)]
pub struct Conversion {
    pub records: Vec<Record>,
    /// Entries dropped by the scheme filter
    pub skipped: usize,
}

impl Conversion {
    /// Newline-terminated CSV lines in capture order
    pub fn render(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&record.to_string());
            out.push('\n');
        }
        out
    }
}

/// Whether the raw URL starts with a lowercase `http://` or `https://`
pub fn is_http_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Convert a single HTTP entry into a record
pub fn convert_entry(entry: &HarEntry) -> Result<Record> {
    let request = build_request(&entry.request)?;
    let response = build_response(&entry.response)?;
    Ok(Record::new(&request, &response))
}

/// Convert every HTTP entry of a capture
pub fn convert(har: &Har) -> Result<Conversion> {
    if let Some(creator) = &har.log.creator {
        debug!(
            creator = %creator.name,
            version = creator.version.as_deref().unwrap_or("?"),
            har_version = har.log.version.as_deref().unwrap_or("?"),
            "Capture creator"
        );
    }

    let mut conversion = Conversion::default();

    for (index, entry) in har.log.entries.iter().enumerate() {
        if !is_http_url(&entry.request.url) {
            debug!(index, url = %entry.request.url, "Skipping non-HTTP entry");
            conversion.skipped += 1;
            continue;
        }

        let record = convert_entry(entry).map_err(|e| e.at_entry(index))?;
        debug!(index, method = %record.method, origin = %record.origin, "Converted entry");
        conversion.records.push(record);
    }

    info!(
        converted = conversion.records.len(),
        skipped = conversion.skipped,
        "Conversion complete"
    );

    Ok(conversion)
}

/// Convert a HAR file and write the CSV once every entry succeeded
pub fn convert_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<Conversion> {
    let har = load_har(input)?;
    let conversion = convert(&har)?;

    let output = output.as_ref();
    std::fs::write(output, conversion.render()).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })?;
    info!(path = %output.display(), records = conversion.records.len(), "Wrote output");

    Ok(conversion)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::har::parse_har;
    use base64::{engine::general_purpose::STANDARD, Engine};

    fn entry(method: &str, url: &str) -> String {
        format!(
            r#"{{
                "request": {{
                    "method": "{method}",
                    "url": "{url}",
                    "httpVersion": "HTTP/1.1",
                    "headers": [{{ "name": "Accept", "value": "*/*" }}]
                }},
                "response": {{
                    "status": 200,
                    "statusText": "OK",
                    "httpVersion": "HTTP/1.1",
                    "headers": [],
                    "content": {{ "text": "ok" }}
                }}
            }}"#
        )
    }

    fn capture(entries: &[String]) -> Har {
        parse_har(&format!(r#"{{"log":{{"entries":[{}]}}}}"#, entries.join(","))).unwrap()
    }

    #[test]
    fn test_is_http_url() {
        assert!(is_http_url("http://example.com/"));
        assert!(is_http_url("https://example.com/"));
        assert!(!is_http_url("HTTPS://example.com/"));
        assert!(!is_http_url("Http://example.com/"));
        assert!(!is_http_url("ws://example.com/socket"));
        assert!(!is_http_url("wss://example.com/socket"));
        assert!(!is_http_url("data:text/plain,hi"));
        assert!(!is_http_url("httpx://example.com/"));
    }

    #[test]
    fn test_non_http_entries_skipped() {
        let har = capture(&[
            entry("GET", "https://example.com/a"),
            entry("GET", "wss://example.com/socket"),
            entry("post", "http://example.com:8080/b"),
        ]);
        let conversion = convert(&har).unwrap();

        assert_eq!(conversion.records.len(), 2);
        assert_eq!(conversion.skipped, 1);

        let output = conversion.render();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(output.ends_with('\n'));
        for line in &lines {
            assert_eq!(line.split(',').count(), 4);
        }
        assert!(lines[0].ends_with(",GET,https://example.com"));
        assert!(lines[1].ends_with(",POST,http://example.com:8080"));
    }

    #[test]
    fn test_records_decode_to_wire_messages() {
        let har = capture(&[entry("get", "https://example.com/path?q=1")]);
        let conversion = convert(&har).unwrap();
        let record = &conversion.records[0];

        let request = String::from_utf8(STANDARD.decode(&record.request).unwrap()).unwrap();
        let first_line = request.lines().next().unwrap();
        let parts: Vec<_> = first_line.splitn(3, ' ').collect();
        assert_eq!(parts, vec!["GET", "/path?q=1", "HTTP/1.1"]);
        assert!(request.contains("Host: example.com\r\n"));

        let response = String::from_utf8(STANDARD.decode(&record.response).unwrap()).unwrap();
        assert!(response.starts_with("HTTP/1.1 200"));
        assert!(response.ends_with("\r\n\r\nok"));
    }

    #[test]
    fn test_malformed_non_http_url_is_skipped() {
        let har = capture(&[entry("GET", "ws://exa mple.com/")]);
        let conversion = convert(&har).unwrap();
        assert!(conversion.records.is_empty());
        assert_eq!(conversion.render(), "");
    }

    #[test]
    fn test_failure_reports_entry_index() {
        let har = capture(&[
            entry("GET", "https://example.com/"),
            entry("GET", "http://exa mple.com/"),
        ]);
        let err = convert(&har).unwrap_err();
        match err {
            ConvertError::Entry { index, source } => {
                assert_eq!(index, 1);
                assert!(matches!(*source, ConvertError::MalformedUrl { .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_uppercase_scheme_skipped() {
        let har = capture(&[
            entry("GET", "HTTP://example.com/a"),
            entry("GET", "http://example.com/b"),
        ]);
        let conversion = convert(&har).unwrap();
        assert_eq!(conversion.records.len(), 1);
        assert_eq!(conversion.skipped, 1);
    }

    #[test]
    fn test_raw_target_survives_conversion() {
        let har = capture(&[entry("GET", "https://example.com:443/a/../b?id=1'--")]);
        let record = &convert(&har).unwrap().records[0];
        assert_eq!(record.origin, "https://example.com:443");

        let request = String::from_utf8(STANDARD.decode(&record.request).unwrap()).unwrap();
        assert!(request.starts_with("GET /a/../b?id=1'-- HTTP/1.1\r\n"));
        assert!(request.contains("Host: example.com:443\r\n"));
    }

    #[test]
    fn test_order_preserved() {
        let har = capture(&[
            entry("GET", "http://one.example/"),
            entry("GET", "http://two.example/"),
            entry("GET", "http://three.example/"),
        ]);
        let origins: Vec<_> = convert(&har)
            .unwrap()
            .records
            .into_iter()
            .map(|r| r.origin)
            .collect();
        assert_eq!(
            origins,
            vec!["http://one.example", "http://two.example", "http://three.example"]
        );
    }

    #[test]
    fn test_convert_file_writes_nothing_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.har");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, "{ not json").unwrap();

        let err = convert_file(&input, &output).unwrap_err();
        assert!(matches!(err, ConvertError::Parse(_)));
        assert!(!output.exists());
    }
}
