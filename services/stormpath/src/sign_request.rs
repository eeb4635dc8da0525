use std::fmt::Write;
use std::io::{Read, Seek, Write as _};

use async_trait::async_trait;
use chrono::TimeZone;
use http::header::{AUTHORIZATION, HOST};
use http::request::Parts;
use http::HeaderValue;
use log::debug;
use sauthc1_core::hash::{hex_hmac_sha256, hex_sha256, hmac_sha256, sha256_reader};
use sauthc1_core::time::{format_date, format_iso8601_basic, now, DateTime};
use sauthc1_core::{Context, Error, RequestBody, Result, SignRequest, SigningRequest};

use crate::canonical::{
    canonicalize_headers, canonicalize_path, canonicalize_query, signed_headers,
};
use crate::constants::*;
use crate::Credential;

/// RequestSigner that implements Stormpath SAuthc1.
///
/// Every call takes the current time and a fresh random nonce (UUID v4).
#[derive(Debug, Default)]
pub struct RequestSigner {
    time: Option<DateTime>,
    nonce: Option<String>,
}

impl RequestSigner {
    /// Create a new SAuthc1 request signer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Specify the nonce.
    ///
    /// # Note
    ///
    /// A nonce must never be reused across requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_nonce(mut self, nonce: &str) -> Self {
        self.nonce = Some(nonce.to_string());
        self
    }
}

#[async_trait]
impl SignRequest for RequestSigner {
    type Credential = Credential;

    async fn sign_request(
        &self,
        _: &Context,
        req: &mut Parts,
        body: &mut dyn RequestBody,
        credential: Option<&Self::Credential>,
    ) -> Result<()> {
        let Some(cred) = credential else {
            return Err(Error::credential_invalid("missing credential"));
        };

        let now = self.time.unwrap_or_else(now);
        let nonce = self
            .nonce
            .clone()
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        sign(req, body, &now, cred, &nonce)
    }
}

/// Sign the request with SAuthc1.
///
/// Sets the `Host`, `X-Stormpath-Date` and `Authorization` headers on `req`,
/// replacing any previous value. `body` is the payload that will be sent
/// with the request; it is hashed from its start and left rewound.
///
/// The body is hashed before anything else, so if it can't be read the
/// request is returned untouched with an [`ErrorKind::BodyReadFailed`] error.
///
/// `nonce` must be unique per request, `now` is rendered in its own offset.
///
/// [`ErrorKind::BodyReadFailed`]: sauthc1_core::ErrorKind::BodyReadFailed
pub fn sign<R, Tz>(
    req: &mut Parts,
    body: &mut R,
    now: &chrono::DateTime<Tz>,
    cred: &Credential,
    nonce: &str,
) -> Result<()>
where
    R: Read + Seek + ?Sized,
    Tz: TimeZone,
{
    let body_digest = hex::encode(sha256_reader(body)?);

    let timestamp = format_iso8601_basic(now);
    let date_stamp = format_date(now);

    let mut signed_req = SigningRequest::build(req)?;
    let signed = prepare_headers(&mut signed_req, &timestamp).and_then(|()| {
        authorization(&signed_req, &body_digest, &timestamp, &date_stamp, cred, nonce)
    });
    match signed {
        Ok(value) => {
            signed_req.headers.insert(AUTHORIZATION, value);
        }
        Err(err) => {
            signed_req.apply(req)?;
            return Err(err);
        }
    }

    signed_req.apply(req)
}

/// Insert `Host` and `X-Stormpath-Date`, both part of the signed headers,
/// and drop any stale `Authorization` so it is never signed.
///
/// Other headers are left as they are, whatever bytes they carry.
fn prepare_headers(ctx: &mut SigningRequest, timestamp: &str) -> Result<()> {
    let host = HeaderValue::from_str(&ctx.host())?;
    let date = HeaderValue::from_str(timestamp)?;

    ctx.headers.remove(AUTHORIZATION);
    ctx.headers.insert(HOST, host);
    ctx.headers.insert(X_STORMPATH_DATE, date);

    Ok(())
}

fn authorization(
    ctx: &SigningRequest,
    body_digest: &str,
    timestamp: &str,
    date_stamp: &str,
    cred: &Credential,
    nonce: &str,
) -> Result<HeaderValue> {
    let signed_headers = signed_headers(ctx);

    let creq = canonical_request_string(ctx, &signed_headers, body_digest)?;
    debug!(
        "calculated canonical request: {}",
        String::from_utf8_lossy(&creq)
    );

    // Scope: "<id>/20131204/<nonce>/sauthc1_request"
    let scope = format!("{}/{date_stamp}/{nonce}/{SAUTHC1_TERMINATOR}", cred.id);
    debug!("calculated scope: {scope}");

    // StringToSign:
    //
    // HMAC-SHA-256
    // 20131204T120000Z
    // <id>/20131204/<nonce>/sauthc1_request
    // <hashed_canonical_request>
    let string_to_sign = {
        let mut f = String::new();
        writeln!(f, "{SAUTHC1_ALGORITHM}")?;
        writeln!(f, "{timestamp}")?;
        writeln!(f, "{scope}")?;
        write!(f, "{}", hex_sha256(&creq))?;
        f
    };
    debug!("calculated string to sign: {string_to_sign}");

    let signing_key = generate_signing_key(&cred.secret, date_stamp, nonce);
    let signature = hex_hmac_sha256(&signing_key, string_to_sign.as_bytes());

    let mut value = HeaderValue::from_str(&format!(
        "{SAUTHC1_ID}={scope}, {SAUTHC1_SIGNED_HEADERS}={signed_headers}, {SAUTHC1_SIGNATURE}={signature}"
    ))?;
    value.set_sensitive(true);

    Ok(value)
}

/// Canonical request, as the exact bytes that get hashed:
///
/// ```text
/// METHOD
/// canonical path
/// canonical query
/// canonical headers (each line newline terminated)
/// signed headers
/// hex(sha256(body))
/// ```
fn canonical_request_string(
    ctx: &SigningRequest,
    signed_headers: &str,
    body_digest: &str,
) -> Result<Vec<u8>> {
    let mut f = Vec::with_capacity(256);

    writeln!(f, "{}", ctx.method)?;
    writeln!(f, "{}", canonicalize_path(ctx))?;
    writeln!(f, "{}", canonicalize_query(ctx))?;
    f.extend_from_slice(&canonicalize_headers(ctx));
    writeln!(f)?;
    writeln!(f, "{signed_headers}")?;
    write!(f, "{body_digest}")?;

    Ok(f)
}

fn generate_signing_key(secret: &str, date_stamp: &str, nonce: &str) -> Vec<u8> {
    // Sign secret
    let secret = format!("{SAUTHC1_KEY_PREFIX}{secret}");
    // Sign date
    let sign_date = hmac_sha256(secret.as_bytes(), date_stamp.as_bytes());
    // Sign nonce
    let sign_nonce = hmac_sha256(&sign_date, nonce.as_bytes());
    // Sign request
    hmac_sha256(&sign_nonce, SAUTHC1_TERMINATOR.as_bytes())
}
