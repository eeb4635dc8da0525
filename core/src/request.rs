use std::borrow::Cow;
use std::mem;

use http::uri::Authority;
use http::HeaderMap;
use http::Method;

use crate::{Error, Result};

/// Signing context for request.
///
/// A decomposed, signer-friendly view of `http::request::Parts`. The URI of
/// the request is only read; headers are moved out by [`SigningRequest::build`]
/// and moved back by [`SigningRequest::apply`].
#[derive(Debug)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority.
    pub authority: Authority,
    /// HTTP path, still percent encoded as it appears in the URI.
    pub path: String,
    /// HTTP query parameters decoded to raw bytes, in URI order.
    ///
    /// Pairs holding a malformed percent escape are dropped.
    pub query: Vec<(Vec<u8>, Vec<u8>)>,
    /// HTTP headers.
    pub headers: HeaderMap,
}

impl SigningRequest {
    /// Build a signing context from http::request::Parts.
    pub fn build(parts: &mut http::request::Parts) -> Result<Self> {
        let authority = parts
            .uri
            .authority()
            .cloned()
            .ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?;

        Ok(SigningRequest {
            method: parts.method.clone(),
            authority,
            path: parts.uri.path().to_string(),
            query: parts.uri.query().map(parse_query).unwrap_or_default(),

            // Take the headers out of the request to avoid copy.
            // We will return it back when apply the context.
            headers: mem::take(&mut parts.headers),
        })
    }

    /// Apply the signing context back to http::request::Parts.
    pub fn apply(mut self, parts: &mut http::request::Parts) -> Result<()> {
        mem::swap(&mut parts.headers, &mut self.headers);
        Ok(())
    }

    /// Host as it should appear in a `Host` header: host plus `:port` when
    /// the URI carries an explicit port. Userinfo is never included.
    pub fn host(&self) -> String {
        match self.authority.port() {
            Some(port) => format!("{}:{}", self.authority.host(), port.as_str()),
            None => self.authority.host().to_string(),
        }
    }

    /// Get the path percent decoded, as raw bytes.
    pub fn path_percent_decoded(&self) -> Cow<'_, [u8]> {
        Cow::from(percent_encoding::percent_decode_str(&self.path))
    }

    /// Get query pairs stably sorted by key.
    ///
    /// Values sharing a key keep their original relative order.
    pub fn query_sorted_by_key(&self) -> Vec<(&[u8], &[u8])> {
        let mut query: Vec<(&[u8], &[u8])> = self
            .query
            .iter()
            .map(|(k, v)| (k.as_slice(), v.as_slice()))
            .collect();
        query.sort_by(|a, b| a.0.cmp(b.0));
        query
    }

    /// Get header names as sorted vector.
    ///
    /// Names in `HeaderMap` are always lowercase, and each name appears once
    /// no matter how many values it holds.
    pub fn header_name_to_vec_sorted(&self) -> Vec<&str> {
        let mut h = self
            .headers
            .keys()
            .map(|k| k.as_str())
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }

    /// Join every value of the header `key` with `sep`, in insertion order.
    ///
    /// Values are taken as raw bytes, obs-text included.
    pub fn header_values_joined(&self, key: &str, sep: &str) -> Vec<u8> {
        let mut s = Vec::new();

        for (idx, value) in self.headers.get_all(key).iter().enumerate() {
            if idx != 0 {
                s.extend_from_slice(sep.as_bytes());
            }
            s.extend_from_slice(value.as_bytes());
        }

        s
    }
}

/// Split a raw query on `&` and the first `=` of each pair, then decode both
/// sides. Empty pieces are skipped.
fn parse_query(query: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            Some((query_unescape(k)?, query_unescape(v)?))
        })
        .collect()
}

/// Decode one query component: `+` is a space and `%XX` is a byte.
///
/// Returns `None` if a `%` is not followed by two hex digits.
fn query_unescape(s: &str) -> Option<Vec<u8>> {
    let bytes = s.as_bytes();
    let escapes_valid = bytes
        .iter()
        .enumerate()
        .filter(|(_, b)| **b == b'%')
        .all(|(idx, _)| {
            bytes
                .get(idx + 1..idx + 3)
                .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
        });
    if !escapes_valid {
        return None;
    }

    Some(percent_encoding::percent_decode_str(&s.replace('+', " ")).collect())
}
