use crate::{Context, ProvideCredential, RequestBody, Result, SignRequest, SigningCredential};
use log::debug;
use std::sync::{Arc, Mutex};

/// Signer is the main struct used to sign the request.
///
/// It loads the credential through `ProvideCredential`, caches it until it
/// stops being valid, and hands it to `SignRequest` for every request.
#[derive(Clone, Debug)]
pub struct Signer<K: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = K>>,
    builder: Arc<dyn SignRequest<Credential = K>>,
    credential: Arc<Mutex<Option<K>>>,
}

impl<K: SigningCredential> Signer<K> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = K>,
        builder: impl SignRequest<Credential = K>,
    ) -> Self {
        Self {
            ctx,

            loader: Arc::new(loader),
            builder: Arc::new(builder),
            credential: Arc::new(Mutex::new(None)),
        }
    }

    /// Signing request.
    ///
    /// `body` is the payload that will be sent with `req`; it is left rewound
    /// to its start once signing returns.
    pub async fn sign(
        &self,
        req: &mut http::request::Parts,
        body: &mut dyn RequestBody,
    ) -> Result<()> {
        let credential = self.credential.lock().expect("lock poisoned").clone();
        let credential = if credential.is_valid() {
            credential
        } else {
            debug!("no valid cached credential, loading a new one");
            let loaded = self.loader.provide_credential(&self.ctx).await?;
            self.credential
                .lock()
                .expect("lock poisoned")
                .clone_from(&loaded);
            loaded
        };

        self.builder
            .sign_request(&self.ctx, req, body, credential.as_ref())
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use http::HeaderValue;

    use super::*;

    #[derive(Clone, Debug)]
    struct TestCredential(String);

    impl SigningCredential for TestCredential {
        fn is_valid(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug)]
    struct CountingLoader {
        calls: Arc<AtomicUsize>,
        value: &'static str,
    }

    #[async_trait]
    impl ProvideCredential for CountingLoader {
        type Credential = TestCredential;

        async fn provide_credential(&self, _: &Context) -> Result<Option<TestCredential>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.value.is_empty() {
                return Ok(None);
            }
            Ok(Some(TestCredential(self.value.to_string())))
        }
    }

    #[derive(Debug)]
    struct HeaderBuilder;

    #[async_trait]
    impl SignRequest for HeaderBuilder {
        type Credential = TestCredential;

        async fn sign_request(
            &self,
            _: &Context,
            req: &mut http::request::Parts,
            body: &mut dyn RequestBody,
            credential: Option<&TestCredential>,
        ) -> Result<()> {
            let digest = crate::hash::sha256_reader(body)?;
            let value = match credential {
                Some(c) => format!("{}:{}", c.0, hex::encode(&digest[..4])),
                None => "anonymous".to_string(),
            };
            req.headers.insert("x-test", HeaderValue::from_str(&value)?);
            Ok(())
        }
    }

    fn parts() -> http::request::Parts {
        http::Request::get("https://api.example.com/")
            .body(())
            .expect("request must be valid")
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn test_signer_caches_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            calls: calls.clone(),
            value: "key",
        };
        let signer = Signer::new(Context::new(), loader, HeaderBuilder);

        for _ in 0..3 {
            let mut req = parts();
            signer.sign(&mut req, &mut Cursor::new(Vec::new())).await?;
            // sha256("") starts with e3b0c442.
            assert_eq!(req.headers["x-test"], "key:e3b0c442");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_signer_retries_missing_credential() -> Result<()> {
        let calls = Arc::new(AtomicUsize::new(0));
        let loader = CountingLoader {
            calls: calls.clone(),
            value: "",
        };
        let signer = Signer::new(Context::new(), loader, HeaderBuilder);

        for _ in 0..2 {
            let mut req = parts();
            signer.sign(&mut req, &mut Cursor::new(Vec::new())).await?;
            assert_eq!(req.headers["x-test"], "anonymous");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        Ok(())
    }
}
