//! Example signing a Stormpath API request with credentials loaded from the
//! environment or `~/.stormpath/apiKey.properties`.
//!
//! ```shell
//! STORMPATH_CLIENT_APIKEY_ID=... STORMPATH_CLIENT_APIKEY_SECRET=... \
//!     RUST_LOG=debug cargo run --example sign
//! ```

use sauthc1_core::{Context, OsEnv, Signer};
use sauthc1_file_read_tokio::TokioFileRead;
use sauthc1_stormpath::{
    Config, DefaultCredentialProvider, RequestSigner, StaticCredentialProvider,
};
use std::io::Cursor;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new()
        .with_file_read(TokioFileRead)
        .with_env(OsEnv);

    let config = Config::new().from_env(&ctx);
    let signer = if config.api_key_id.is_some() || config.api_key_file.is_some() {
        Signer::new(
            ctx,
            DefaultCredentialProvider::from_config(&config),
            RequestSigner::new(),
        )
    } else {
        println!("No Stormpath API key configured, signing with a demo key.\n");
        Signer::new(
            ctx,
            StaticCredentialProvider::new("DEMO_ID", "DEMO_SECRET"),
            RequestSigner::new(),
        )
    };

    let body = br#"{"email":"john@example.com","password":"Changeme1"}"#.to_vec();
    let req = http::Request::post(
        "https://api.stormpath.com/v1/applications/abc/accounts?expand=customData",
    )
    .header(http::header::CONTENT_TYPE, "application/json")
    .body(())?;
    let (mut parts, _) = req.into_parts();

    let mut body = Cursor::new(body);
    signer.sign(&mut parts, &mut body).await?;

    println!("{} {}", parts.method, parts.uri);
    for (name, value) in &parts.headers {
        println!("{name}: {}", String::from_utf8_lossy(value.as_bytes()));
    }
    println!("\nbody position after signing: {}", body.position());

    Ok(())
}
