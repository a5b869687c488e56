//! Route Paths
//!
//! Builds in-app URLs. Record ids go into a single path segment, so they
//! are percent-encoded; the router decodes `:id` back before the page sees it.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crud_store::RecordId;

/// Same reserved set as `encodeURIComponent`
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub const LIST_PATH: &str = "/";

/// `/users/:id` for one record
pub fn detail_path(id: &RecordId) -> String {
    format!("/users/{}", utf8_percent_encode(id.as_str(), SEGMENT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use percent_encoding::percent_decode_str;

    #[test]
    fn test_uuid_ids_stay_readable() {
        let id = RecordId::from("3f2b8c1e-9a4d-4e6f-8b2a-1c5d7e9f0a3b");
        assert_eq!(detail_path(&id), "/users/3f2b8c1e-9a4d-4e6f-8b2a-1c5d7e9f0a3b");
    }

    #[test]
    fn test_reserved_chars_stay_in_one_segment() {
        let id = RecordId::from("a/b?c#d e%");
        let path = detail_path(&id);
        assert_eq!(path, "/users/a%2Fb%3Fc%23d%20e%25");

        let segment = path.strip_prefix("/users/").unwrap();
        assert!(!segment.contains(['/', '?', '#']));
        assert_eq!(percent_decode_str(segment).decode_utf8_lossy(), id.as_str());
    }
}
