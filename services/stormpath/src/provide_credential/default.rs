use crate::provide_credential::{
    EnvCredentialProvider, FileCredentialProvider, StaticCredentialProvider,
};
use crate::{Config, Credential};
use async_trait::async_trait;
use sauthc1_core::{Context, ProvideCredential, ProvideCredentialChain, Result};

/// DefaultCredentialProvider is a loader that will try to load credential via default chains.
///
/// Resolution order:
///
/// 1. Environment variables
/// 2. API key file (`~/.stormpath/apiKey.properties`)
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new `DefaultCredentialProvider` instance.
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(FileCredentialProvider::new());

        Self { chain }
    }

    /// Create from config.
    ///
    /// An id and secret both set in `config` win over any other source, and
    /// `api_key_file` replaces the default file location.
    pub fn from_config(config: &Config) -> Self {
        let mut file = FileCredentialProvider::new();
        if let Some(path) = &config.api_key_file {
            file = file.with_path(path);
        }

        let mut chain = ProvideCredentialChain::new()
            .push(EnvCredentialProvider::new())
            .push(file);

        if let (Some(id), Some(secret)) = (&config.api_key_id, &config.api_key_secret) {
            chain = chain.push_front(StaticCredentialProvider::new(id, secret));
        }

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }
}

#[async_trait]
impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx).await
    }
}
