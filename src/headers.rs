//! Ordered header mapping
//!
//! Headers keep the position of their first occurrence and the value of
//! their last one. Names are compared exactly, so `X-Foo` and `x-foo` are
//! distinct entries.

use indexmap::IndexMap;

use crate::har::HarHeader;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeaderMap {
    headers: IndexMap<String, String>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, value: &str) {
        self.headers.insert(name.to_string(), value.to_string());
    }

    pub fn contains_ignore_case(&self, name: &str) -> bool {
        self.headers.keys().any(|n| n.eq_ignore_ascii_case(name))
    }

    /// Append every header as a `Name: value\r\n` line
    pub fn write_to(&self, buf: &mut Vec<u8>) {
        for (name, value) in &self.headers {
            buf.extend_from_slice(name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
    }
}

impl<'a> FromIterator<&'a HarHeader> for HeaderMap {
    fn from_iter<I: IntoIterator<Item = &'a HarHeader>>(iter: I) -> Self {
        let mut map = HeaderMap::new();
        for header in iter {
            map.insert(&header.name, &header.value);
        }
        map
    }
}
