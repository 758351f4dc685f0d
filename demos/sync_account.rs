//! Trigger a transaction synchronization for an account and poll its status.
//!
//! Usage:
//!   PONTO_CLIENT_ID=... PONTO_CLIENT_SECRET=... PONTO_ACCOUNT_ID=... \
//!     cargo run --example sync_account

use std::time::Duration;

use ponto_rs::{AccountId, Environment, PontoClient, SyncSubtype, SynchronizationId};

#[tokio::main]
async fn main() -> ponto_rs::Result<()> {
    let client_id = std::env::var("PONTO_CLIENT_ID").expect("PONTO_CLIENT_ID must be set");
    let client_secret =
        std::env::var("PONTO_CLIENT_SECRET").expect("PONTO_CLIENT_SECRET must be set");
    let account = AccountId::new(
        std::env::var("PONTO_ACCOUNT_ID").expect("PONTO_ACCOUNT_ID must be set"),
    );

    let client = PontoClient::new(client_id, client_secret, Environment::Production)?;

    let job = client
        .synchronizations()
        .sync_account(&account, SyncSubtype::AccountTransactions)
        .await?;
    println!("synchronization {} queued", job.id);

    let job_id = SynchronizationId::new(&job.id);
    loop {
        let status = client.synchronizations().get(&job_id).await?;
        let state = status.attributes.status.unwrap_or_default();
        println!("status: {state}");
        if state == "success" || state == "error" {
            break;
        }
        tokio::time::sleep(Duration::from_secs(2)).await;
    }

    Ok(())
}
