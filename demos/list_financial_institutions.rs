//! List financial institutions page by page.
//!
//! Usage:
//!   PONTO_CLIENT_ID=... PONTO_CLIENT_SECRET=... \
//!     cargo run --example list_financial_institutions

use ponto_rs::{Environment, PageQuery, PontoClient};

#[tokio::main]
async fn main() -> ponto_rs::Result<()> {
    let client_id = std::env::var("PONTO_CLIENT_ID").expect("PONTO_CLIENT_ID must be set");
    let client_secret =
        std::env::var("PONTO_CLIENT_SECRET").expect("PONTO_CLIENT_SECRET must be set");

    let client = PontoClient::new(client_id, client_secret, Environment::Sandbox)?;

    let mut page = client
        .financial_institutions()
        .list(PageQuery::default().with_limit(10))
        .await?;

    loop {
        for institution in &page.items {
            println!("{}  {}", institution.id, institution.attributes.name);
        }
        match page.next().await? {
            Some(next) => page = next,
            None => break,
        }
    }

    Ok(())
}
