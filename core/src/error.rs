use std::fmt;
use thiserror::Error;

/// Error returned by signing and credential loading.
///
/// Prints as `<kind>: <message>`; the underlying cause, if any, is kept as
/// the error source.
#[derive(Error, Debug)]
#[error("{kind}: {message}")]
pub struct Error {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<anyhow::Error>,
}

/// What went wrong, coarse enough to match on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The request body could not be read or rewound for hashing.
    ///
    /// Signing stops before any header is written.
    BodyReadFailed,
    /// No usable credential reached the signer.
    CredentialInvalid,
    /// The request can't be signed: no authority, or a header value that
    /// can't be built.
    RequestInvalid,
    /// A credential source exists but is malformed.
    ConfigInvalid,
    /// Anything else, such as I/O failures in a context implementation.
    Unexpected,
}

impl Error {
    /// Create a new error of `kind`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Kind of this error.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Message of this error, without the kind prefix.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Body could not be read.
    pub fn body_read_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::BodyReadFailed, message)
    }

    /// No usable credential.
    pub fn credential_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CredentialInvalid, message)
    }

    /// Request can't be signed.
    pub fn request_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RequestInvalid, message)
    }

    /// Malformed credential source.
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ConfigInvalid, message)
    }

    /// Anything else.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::BodyReadFailed => "request body unreadable",
            ErrorKind::CredentialInvalid => "invalid credential",
            ErrorKind::RequestInvalid => "invalid request",
            ErrorKind::ConfigInvalid => "invalid configuration",
            ErrorKind::Unexpected => "unexpected error",
        })
    }
}

/// Result with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::unexpected(err.to_string()).with_source(err)
    }
}

macro_rules! impl_from {
    ($kind:ident: $($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Error {
                fn from(err: $ty) -> Self {
                    Self::$kind(err.to_string()).with_source(err)
                }
            }
        )+
    };
}

impl_from!(unexpected: std::fmt::Error, std::io::Error);
impl_from!(
    request_invalid: http::Error,
    http::header::InvalidHeaderValue,
    http::header::ToStrError,
);

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_io_error_keeps_source() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert_eq!(err.message(), "gone");
        assert_eq!(err.to_string(), "unexpected error: gone");
        assert!(err.source().is_some());
    }

    #[test]
    fn test_header_errors_are_request_invalid() {
        let err: Error = http::HeaderValue::from_str("bad\nvalue")
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);

        let err: Error = http::HeaderValue::from_bytes(b"caf\xe9")
            .expect("obs-text is a valid header value")
            .to_str()
            .unwrap_err()
            .into();
        assert_eq!(err.kind(), ErrorKind::RequestInvalid);
    }

    #[test]
    fn test_display() {
        let err = Error::body_read_failed("failed to read body");

        assert_eq!(
            err.to_string(),
            "request body unreadable: failed to read body"
        );
        assert!(err.source().is_none());
    }
}
