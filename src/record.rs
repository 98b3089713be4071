//! WStalker CSV records
//!
//! One line per transaction: `base64(request),base64(response),METHOD,origin`.
//! No field can contain a comma or newline, so nothing is quoted.

use std::fmt;

use base64::{engine::general_purpose::STANDARD, Engine};

use crate::request::RawRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub request: String,
    pub response: String,
    pub method: String,
    pub origin: String,
}

impl Record {
    pub fn new(request: &RawRequest, response: &[u8]) -> Self {
        Self {
            request: STANDARD.encode(&request.bytes),
            response: STANDARD.encode(response),
            method: request.method.clone(),
            origin: request.origin.clone(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.request, self.response, self.method, self.origin
        )
    }
}
