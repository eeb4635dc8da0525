use crate::{Context, Result};
use std::fmt::Debug;
use std::io::{Read, Seek};

/// SigningCredential is the trait used by signer as the signing credential.
pub trait SigningCredential: Clone + Debug + Send + Sync + Unpin + 'static {
    /// Check if the credential is usable for signing.
    fn is_valid(&self) -> bool;
}

impl<T: SigningCredential> SigningCredential for Option<T> {
    fn is_valid(&self) -> bool {
        let Some(ctx) = self else {
            return false;
        };

        ctx.is_valid()
    }
}

/// ProvideCredential is the trait used by signer to load the credential from the environment.
#[async_trait::async_trait]
pub trait ProvideCredential: Debug + Send + Sync + Unpin + 'static {
    /// Credential returned by this provider.
    type Credential: Send + Sync + Unpin + 'static;

    /// Load signing credential from current env.
    ///
    /// Returns `Ok(None)` when this source simply has nothing to offer, so
    /// that a chain can move on to the next provider.
    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>>;
}

/// RequestBody is the re-readable payload the signer hashes.
///
/// Anything that can be read and seeked qualifies: `std::io::Cursor`,
/// `std::fs::File`, and so on. The signer borrows it and leaves it rewound.
pub trait RequestBody: Read + Seek + Send {}

impl<T: Read + Seek + Send + ?Sized> RequestBody for T {}

/// SignRequest is the trait used by signer to sign the request.
#[async_trait::async_trait]
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Credential used by this signer.
    type Credential: Send + Sync + Unpin + 'static;

    /// Sign the request in place.
    ///
    /// ## Body
    ///
    /// `body` holds the payload that will be sent with `req`. Implementations
    /// that hash the payload must leave it positioned at its start.
    ///
    /// ## Credential
    ///
    /// The `credential` parameter is the credential required by the signer to sign the request.
    async fn sign_request(
        &self,
        ctx: &Context,
        req: &mut http::request::Parts,
        body: &mut dyn RequestBody,
        credential: Option<&Self::Credential>,
    ) -> Result<()>;
}
