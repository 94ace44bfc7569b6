//! Small shared helpers: URL encoding and settings-file line parsing.

pub mod config;

use std::fmt::Write;

/// What: Percent-encode a string for use in URL query parameters.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Encoded string; unreserved characters are kept and spaces become `%20`.
///
/// Details:
/// - Works on UTF-8 bytes, so multi-byte characters become several `%XX` groups.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}
