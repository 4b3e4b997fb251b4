//! Search a marketplace and print the raw result.
//!
//! ```shell
//! export PAAPI_ACCESS_KEY_ID=...
//! export PAAPI_SECRET_KEY=...
//! export PAAPI_ASSOCIATE_TAG=...
//! cargo run --example item_search -- "harry potter"
//! ```

use paapi::{Client, Context, Credential, Locale, Response};
use paapi_http_send_reqwest::ReqwestHttpSend;
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    let keywords = std::env::args().nth(1).unwrap_or_else(|| "rust".to_string());
    let credential = Credential::new(
        std::env::var("PAAPI_ACCESS_KEY_ID")?,
        std::env::var("PAAPI_SECRET_KEY")?,
        std::env::var("PAAPI_ASSOCIATE_TAG")?,
    );

    // Timeout policy belongs to the transport, not the client.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(10))
        .build()?;
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(http_client));
    let client = Client::new(ctx, credential, Locale::Us)?;
    client.set_retrieve_as_array(true);

    match client.item_search(&keywords, Some("Books"), None, None).await {
        Some(Response::Flattened(value)) => println!("{}", serde_json::to_string_pretty(&value)?),
        Some(Response::Document(doc)) => println!("{:?}", doc.root()),
        None => eprintln!("request failed: {:?}", client.errors()),
    }

    Ok(())
}
