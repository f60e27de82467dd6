//! URL encoding utilities for constructing safe API paths.
//!
//! Identifiers typed by the operator (hackathon, job and submission ids) are
//! percent-encoded so that `/`, `?` or `#` can never change which endpoint
//! a request reaches.

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 §3.3
/// plus the delimiters that would alter the path or query).
const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    utf8_percent_encode(segment, PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identifier_unchanged() {
        assert_eq!(encode_path_segment("hack-2025_spring"), "hack-2025_spring");
    }

    #[test]
    fn test_slash_encoded() {
        assert_eq!(encode_path_segment("../admin"), "..%2Fadmin");
    }

    #[test]
    fn test_query_and_fragment_encoded() {
        assert_eq!(encode_path_segment("a?b#c"), "a%3Fb%23c");
    }

    #[test]
    fn test_space_and_percent_encoded() {
        assert_eq!(encode_path_segment("50% off"), "50%25%20off");
    }
}
