// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{constants::*, Credential};
use async_trait::async_trait;
use log::debug;
use sauthc1_core::{Context, ProvideCredential, Result};

/// EnvCredentialProvider loads a Stormpath API key from environment variables.
///
/// This provider looks for the following environment variables:
/// - `STORMPATH_CLIENT_APIKEY_ID`: The API key id
/// - `STORMPATH_CLIENT_APIKEY_SECRET`: The API key secret
///
/// Both must be present, otherwise nothing is provided.
#[derive(Debug, Default, Clone)]
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Create a new EnvCredentialProvider.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProvideCredential for EnvCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        match (
            ctx.env_var(STORMPATH_CLIENT_APIKEY_ID),
            ctx.env_var(STORMPATH_CLIENT_APIKEY_SECRET),
        ) {
            (Some(id), Some(secret)) => Ok(Some(Credential::new(id, secret))),
            _ => {
                debug!("stormpath api key not found in env");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sauthc1_core::{OsEnv, StaticEnv};
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_env_credential_provider() -> anyhow::Result<()> {
        let envs = HashMap::from([
            (STORMPATH_CLIENT_APIKEY_ID.to_string(), "test_id".to_string()),
            (
                STORMPATH_CLIENT_APIKEY_SECRET.to_string(),
                "test_secret".to_string(),
            ),
        ]);
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs,
        });

        let provider = EnvCredentialProvider::new();
        let cred = provider
            .provide_credential(&ctx)
            .await?
            .expect("credential must be provided");
        assert_eq!(cred.id, "test_id");
        assert_eq!(cred.secret, "test_secret");

        Ok(())
    }

    #[tokio::test]
    async fn test_env_credential_provider_partial_credentials() -> anyhow::Result<()> {
        let envs = HashMap::from([(STORMPATH_CLIENT_APIKEY_ID.to_string(), "test_id".to_string())]);
        let ctx = Context::new().with_env(StaticEnv {
            home_dir: None,
            envs,
        });

        let provider = EnvCredentialProvider::new();
        assert!(provider.provide_credential(&ctx).await?.is_none());

        Ok(())
    }

    #[test]
    fn test_env_credential_provider_with_os_env() {
        let _ = env_logger::builder().is_test(true).try_init();

        temp_env::with_vars(
            vec![
                (STORMPATH_CLIENT_APIKEY_ID, Some("os_id")),
                (STORMPATH_CLIENT_APIKEY_SECRET, Some("os_secret")),
            ],
            || {
                let ctx = Context::new().with_env(OsEnv);
                let rt = tokio::runtime::Runtime::new().expect("runtime must be created");

                let cred = rt
                    .block_on(EnvCredentialProvider::new().provide_credential(&ctx))
                    .expect("load must succeed")
                    .expect("credential must be provided");
                assert_eq!(cred.id, "os_id");
                assert_eq!(cred.secret, "os_secret");
            },
        );
    }
}
