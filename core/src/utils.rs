//! Utility functions and types.

use std::fmt::{self, Debug};

/// Shorter values are hidden completely.
const REDACT_MIN_CHARS: usize = 12;
/// Characters kept on each side of a long value.
const REDACT_KEEP_CHARS: usize = 3;

/// Debug wrapper that hides a secret.
///
/// Long values keep three characters on each side so two API key ids can be
/// told apart in logs: `3KCBLBC5AWOJ0GCR2LRHLN4RN` prints `3KC***4RN`.
/// Values under twelve characters print `***`, empty ones `EMPTY`. Lengths
/// count chars, not bytes.
#[derive(Clone, Copy)]
pub struct Redact<'a>(&'a str);

impl<'a> From<&'a str> for Redact<'a> {
    fn from(value: &'a str) -> Self {
        Redact(value)
    }
}

impl<'a> From<&'a String> for Redact<'a> {
    fn from(value: &'a String) -> Self {
        Redact(value.as_str())
    }
}

impl Debug for Redact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let chars = self.0.chars().count();
        if chars == 0 {
            return f.write_str("EMPTY");
        }
        if chars < REDACT_MIN_CHARS {
            return f.write_str("***");
        }

        let head: String = self.0.chars().take(REDACT_KEEP_CHARS).collect();
        let tail: String = self.0.chars().skip(chars - REDACT_KEEP_CHARS).collect();
        write!(f, "{head}***{tail}")
    }
}
