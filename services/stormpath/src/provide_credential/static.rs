use crate::Credential;
use async_trait::async_trait;
use sauthc1_core::{Context, ProvideCredential, Result};

/// StaticCredentialProvider provides a fixed Stormpath API key.
///
/// Use it when the id and secret are already known to the caller and no
/// dynamic loading is wanted.
#[derive(Debug, Clone)]
pub struct StaticCredentialProvider {
    credential: Credential,
}

impl StaticCredentialProvider {
    /// Create a new StaticCredentialProvider with API key id and secret.
    pub fn new(id: &str, secret: &str) -> Self {
        Self {
            credential: Credential::new(id, secret),
        }
    }
}

#[async_trait]
impl ProvideCredential for StaticCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, _: &Context) -> Result<Option<Self::Credential>> {
        Ok(Some(self.credential.clone()))
    }
}
