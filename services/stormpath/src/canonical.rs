//! Canonical forms of the request parts covered by a SAuthc1 signature.
//!
//! Every byte produced here is hashed; the verifying server rebuilds the
//! same strings, so any divergence only shows up as a rejected signature.

use percent_encoding::percent_encode;
use sauthc1_core::SigningRequest;

use crate::constants::{SAUTHC1_PATH_ENCODE_SET, SAUTHC1_QUERY_ENCODE_SET};

/// Canonical resource path.
///
/// The path is percent decoded first and then encoded again, so `%2F`
/// comes back as a literal `/` while everything outside the unreserved set
/// ends up percent encoded. An empty path is `/`.
pub fn canonicalize_path(req: &SigningRequest) -> String {
    let path = req.path_percent_decoded();
    if path.is_empty() {
        return "/".to_string();
    }

    percent_encode(&path, &SAUTHC1_PATH_ENCODE_SET).to_string()
}

/// Canonical query string.
///
/// ```text
/// b=2&a=1&b=1 => a=1&b=2&b=1
/// ```
///
/// Keys are sorted by their decoded bytes, values of the same key keep
/// their order, and `/` is encoded (unlike in paths). Decoded bytes are
/// encoded as they are, so `%FF` stays `%FF`.
pub fn canonicalize_query(req: &SigningRequest) -> String {
    req.query_sorted_by_key()
        .into_iter()
        .map(|(k, v)| {
            format!(
                "{}={}",
                percent_encode(k, &SAUTHC1_QUERY_ENCODE_SET),
                percent_encode(v, &SAUTHC1_QUERY_ENCODE_SET)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Canonical headers: one `name:v1,v2\n` line per header name.
///
/// Names come out lowercase and sorted; the result ends with a newline
/// unless there are no headers at all. Values are copied byte for byte, so
/// obs-text reaches the hash unchanged.
pub fn canonicalize_headers(req: &SigningRequest) -> Vec<u8> {
    let mut s = Vec::with_capacity(128);

    for name in req.header_name_to_vec_sorted() {
        s.extend_from_slice(name.as_bytes());
        s.push(b':');
        s.extend_from_slice(&req.header_values_joined(name, ","));
        s.push(b'\n');
    }

    s
}

/// Signed headers list: sorted lowercase names joined by `;`.
pub fn signed_headers(req: &SigningRequest) -> String {
    req.header_name_to_vec_sorted().join(";")
}
