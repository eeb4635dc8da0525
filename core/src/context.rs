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

use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::path::PathBuf;
use std::sync::Arc;

/// Context is everything a credential provider may look at: files and the
/// process environment.
///
/// Signing a request never consults it. Both parts start out as no-ops, so
/// a bare `Context::new()` finds no env vars and fails every file read;
/// plug in [`OsEnv`] and a [`FileRead`] implementation to load real keys.
///
/// ```
/// use sauthc1_core::{Context, OsEnv};
///
/// let ctx = Context::new().with_env(OsEnv);
/// ```
#[derive(Clone)]
pub struct Context {
    fs: Arc<dyn FileRead>,
    env: Arc<dyn Env>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("fs", &self.fs)
            .field("env", &self.env)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a context where nothing can be read.
    pub fn new() -> Self {
        Self {
            fs: Arc::new(NoopFileRead),
            env: Arc::new(NoopEnv),
        }
    }

    /// Use `fs` to read files.
    pub fn with_file_read(mut self, fs: impl FileRead) -> Self {
        self.fs = Arc::new(fs);
        self
    }

    /// Use `env` for env vars and the home dir.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Read a whole file.
    #[inline]
    pub async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        self.fs.file_read(path).await
    }

    /// Look up an env var, `None` when unset or not valid UTF-8.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Home dir of the current user, if known.
    #[inline]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.env.home_dir()
    }

    /// Turn a user supplied path into one that can be read.
    ///
    /// A leading `~/` (or `~\`) is replaced by the home dir; without a home
    /// dir such a path can't be resolved and `None` is returned. Any other
    /// path comes back as is.
    pub fn resolve_path(&self, path: &str) -> Option<String> {
        match path.strip_prefix('~') {
            Some(rest) if rest.starts_with('/') || rest.starts_with('\\') => self
                .home_dir()
                .map(|home| format!("{}{rest}", home.to_string_lossy())),
            _ => Some(path.to_string()),
        }
    }
}

/// FileRead reads a whole file into memory.
///
/// Credential files are a few hundred bytes, so there is no streaming API.
#[async_trait::async_trait]
pub trait FileRead: Debug + Send + Sync + 'static {
    /// Read the file at `path`.
    async fn file_read(&self, path: &str) -> Result<Vec<u8>>;
}

/// Env gives access to env vars and the home dir.
pub trait Env: Debug + Send + Sync + 'static {
    /// Value of `key`, `None` when unset or not valid UTF-8.
    fn var(&self, key: &str) -> Option<String>;

    /// Home dir of the current user.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// OsEnv reads the env of the running process.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// StaticEnv is a fixed env, mostly for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// Home dir to report.
    pub home_dir: Option<PathBuf>,
    /// Env vars to report.
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Create an empty env without home dir.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an env var.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.envs.insert(key.into(), value.into());
        self
    }

    /// Set the home dir.
    pub fn with_home_dir(mut self, home_dir: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home_dir.into());
        self
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone()
    }
}

/// NoopFileRead fails every read.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFileRead;

#[async_trait::async_trait]
impl FileRead for NoopFileRead {
    async fn file_read(&self, path: &str) -> Result<Vec<u8>> {
        Err(Error::unexpected(format!(
            "no file reader configured, can't read {path}"
        )))
    }
}

/// NoopEnv has no env vars and no home dir.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _: &str) -> Option<String> {
        None
    }

    fn home_dir(&self) -> Option<PathBuf> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn static_ctx() -> Context {
        Context::new().with_env(
            StaticEnv::new()
                .with_home_dir("/home/stormpath")
                .with_var("KEY", "value"),
        )
    }

    #[test]
    fn test_resolve_path() {
        let ctx = static_ctx();

        assert_eq!(
            ctx.resolve_path("~/.stormpath/apiKey.properties"),
            Some("/home/stormpath/.stormpath/apiKey.properties".to_string())
        );
        assert_eq!(
            ctx.resolve_path("/etc/apiKey.properties"),
            Some("/etc/apiKey.properties".to_string())
        );
        // Only a leading `~/` means home.
        assert_eq!(
            ctx.resolve_path("~stormpath/apiKey.properties"),
            Some("~stormpath/apiKey.properties".to_string())
        );
        assert_eq!(
            ctx.resolve_path("/keys/~/apiKey.properties"),
            Some("/keys/~/apiKey.properties".to_string())
        );
    }

    #[test]
    fn test_resolve_path_without_home() {
        let ctx = Context::new();

        assert_eq!(ctx.resolve_path("~/apiKey.properties"), None);
        assert_eq!(
            ctx.resolve_path("apiKey.properties"),
            Some("apiKey.properties".to_string())
        );
    }

    #[test]
    fn test_env_var() {
        let ctx = static_ctx();

        assert_eq!(ctx.env_var("KEY"), Some("value".to_string()));
        assert_eq!(ctx.env_var("MISSING"), None);
        assert_eq!(Context::new().env_var("KEY"), None);
    }

    #[tokio::test]
    async fn test_noop_file_read() {
        let err = Context::new().file_read("/any").await.unwrap_err();

        assert_eq!(err.kind(), crate::ErrorKind::Unexpected);
    }
}
