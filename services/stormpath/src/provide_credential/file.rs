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
use ini::Ini;
use log::debug;
use sauthc1_core::{Context, Error, ProvideCredential, Result};

/// FileCredentialProvider loads a Stormpath API key from a properties file.
///
/// The file is the one Stormpath hands out when an API key is created:
///
/// ```text
/// apiKey.id = 144JVZINOF5EBNCMG9EXAMPLE
/// apiKey.secret = lWxOiKqKPNwJmSldbiSkEbkNjgh2uRSNAb+AEXAMPLE
/// ```
///
/// Path resolution order:
///
/// 1. the path given by [`FileCredentialProvider::with_path`]
/// 2. env value: [`STORMPATH_CLIENT_APIKEY_FILE`]
/// 3. `~/.stormpath/apiKey.properties`
#[derive(Debug, Default, Clone)]
pub struct FileCredentialProvider {
    path: Option<String>,
}

impl FileCredentialProvider {
    /// Create a new FileCredentialProvider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the API key from this path instead.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[async_trait]
impl ProvideCredential for FileCredentialProvider {
    type Credential = Credential;

    async fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        let path = if let Some(path) = &self.path {
            path.clone()
        } else if let Some(path) = ctx.env_var(STORMPATH_CLIENT_APIKEY_FILE) {
            path
        } else {
            DEFAULT_APIKEY_FILE.to_string()
        };

        let Some(expanded_path) = ctx.resolve_path(&path) else {
            debug!("no home dir to resolve api key file {path}");
            return Ok(None);
        };

        let content = match ctx.file_read(&expanded_path).await {
            Ok(content) => content,
            Err(err) => {
                debug!("failed to read api key file {expanded_path}: {err:?}");
                return Ok(None);
            }
        };

        let conf = Ini::load_from_str(&String::from_utf8_lossy(&content)).map_err(|e| {
            Error::config_invalid(format!("failed to parse api key file {expanded_path}"))
                .with_source(e)
        })?;

        let props = conf.general_section();
        match (
            props.get(APIKEY_ID_PROPERTY),
            props.get(APIKEY_SECRET_PROPERTY),
        ) {
            (Some(id), Some(secret)) => Ok(Some(Credential::new(id, secret))),
            _ => {
                debug!("api key file {expanded_path} has no complete api key");
                Ok(None)
            }
        }
    }
}
