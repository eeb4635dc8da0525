//! Stormpath SAuthc1 signing implementation.
//!
//! This crate signs outgoing HTTP requests for the Stormpath REST API with the
//! SAuthc1 scheme: an HMAC-SHA256 signature over a canonical form of the
//! request, keyed by a ladder derived from the API key secret, the date and a
//! per-request nonce.
//!
//! ## Overview
//!
//! - [`sign`] is the synchronous core: it takes the request parts, a seekable
//!   body, a timestamp, a [`Credential`] and a nonce, and sets the `Host`,
//!   `X-Stormpath-Date` and `Authorization` headers.
//! - [`RequestSigner`] wraps [`sign`] as a [`sauthc1_core::SignRequest`],
//!   taking the current time and a fresh UUID v4 nonce on every call.
//! - Credential providers load an API key from code, env, or an
//!   `apiKey.properties` file.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sauthc1_core::{Context, OsEnv, Result, Signer};
//! use sauthc1_file_read_tokio::TokioFileRead;
//! use sauthc1_stormpath::{DefaultCredentialProvider, RequestSigner};
//! use std::io::Cursor;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let ctx = Context::new()
//!         .with_file_read(TokioFileRead)
//!         .with_env(OsEnv);
//!
//!     let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());
//!
//!     let req = http::Request::get("https://api.stormpath.com/v1/tenants/current")
//!         .body(())
//!         .unwrap();
//!     let (mut parts, _) = req.into_parts();
//!
//!     signer.sign(&mut parts, &mut Cursor::new(Vec::new())).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Signing without a runtime
//!
//! ```
//! use sauthc1_stormpath::{sign, Credential};
//! use std::io::Cursor;
//!
//! # fn main() -> sauthc1_core::Result<()> {
//! let (mut parts, _) = http::Request::get("https://api.stormpath.com/v1/applications")
//!     .body(())
//!     .unwrap()
//!     .into_parts();
//! let cred = Credential::new("MyId", "Shush!");
//!
//! sign(
//!     &mut parts,
//!     &mut Cursor::new(Vec::new()),
//!     &chrono::Utc::now(),
//!     &cred,
//!     "a43a9d25-ab06-421e-8605-33fd1e760825",
//! )?;
//! assert!(parts.headers.contains_key(http::header::AUTHORIZATION));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod constants;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod canonical;

mod sign_request;
pub use sign_request::sign;
pub use sign_request::RequestSigner;

mod provide_credential;
pub use provide_credential::*;
