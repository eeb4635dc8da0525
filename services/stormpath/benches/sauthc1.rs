use std::io::Cursor;

use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use once_cell::sync::Lazy;
use sauthc1_core::{Context, SignRequest};
use sauthc1_stormpath::{sign, Credential, RequestSigner};

criterion_group!(benches, bench);
criterion_main!(benches);

static RUNTIME: Lazy<tokio::runtime::Runtime> = Lazy::new(|| {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("must success")
});

fn parts() -> http::request::Parts {
    let mut req = http::Request::new(());
    *req.method_mut() = http::Method::POST;
    *req.uri_mut() = "https://api.stormpath.com/v1/applications/abc/accounts?limit=25&expand=customData"
        .parse()
        .expect("url must be valid");
    req.headers_mut().insert(
        http::header::CONTENT_TYPE,
        http::HeaderValue::from_static("application/json"),
    );

    req.into_parts().0
}

pub fn bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("sauthc1");
    let cred = Credential::new("MyId", "Shush!");
    let body = br#"{"email":"john@example.com","password":"Changeme1"}"#.to_vec();

    group.bench_function("sign", |b| {
        let now = chrono::Utc::now();

        b.iter(|| {
            let mut parts = parts();
            sign(
                &mut parts,
                &mut Cursor::new(body.as_slice()),
                &now,
                &cred,
                "a43a9d25-ab06-421e-8605-33fd1e760825",
            )
            .expect("must success")
        })
    });

    group.bench_function("request_signer", |b| {
        let s = RequestSigner::new();
        let ctx = Context::new();

        b.to_async(&*RUNTIME).iter(|| async {
            let mut parts = parts();
            s.sign_request(
                &ctx,
                &mut parts,
                &mut Cursor::new(body.as_slice()),
                Some(&cred),
            )
            .await
            .expect("must success")
        })
    });

    group.finish()
}
