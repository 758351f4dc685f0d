//! # ponto-rs
//!
//! An async Rust client for the Ponto account-aggregation API.
//!
//! Ponto aggregates bank accounts and transactions across financial
//! institutions behind a cursor-paginated REST API. This crate covers:
//!
//! - **Authentication**: OAuth2 client-credentials grant with an
//!   in-memory bearer-token cache refreshed shortly before expiry
//! - **Financial institutions**: list and fetch reachable banks
//! - **Accounts & transactions**: aggregated production data, plus the
//!   sandbox fixture equivalents
//! - **Synchronizations**: trigger and poll account-refresh jobs
//! - **Pagination**: every list returns a [`Page`] whose `next()` /
//!   `previous()` continuations re-issue the request at the neighboring
//!   cursor, and which can be turned into a lazy [`Stream`] of items
//!
//! [`Stream`]: futures_util::Stream
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use ponto_rs::{PontoClient, Environment, PageQuery};
//!
//! #[tokio::main]
//! async fn main() -> ponto_rs::Result<()> {
//!     let client = PontoClient::new(
//!         std::env::var("PONTO_CLIENT_ID").unwrap(),
//!         std::env::var("PONTO_CLIENT_SECRET").unwrap(),
//!         Environment::Sandbox,
//!     )?;
//!
//!     let mut page = client
//!         .financial_institutions()
//!         .list(PageQuery::default().with_limit(2))
//!         .await?;
//!
//!     loop {
//!         for institution in &page.items {
//!             println!("{}: {}", institution.id, institution.attributes.name);
//!         }
//!         match page.next().await? {
//!             Some(next) => page = next,
//!             None => break,
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modes
//!
//! The client is bound to one [`Environment`] at construction. Sandbox
//! exposes fixture financial-institution accounts and transactions;
//! production exposes live accounts, transactions and synchronization
//! jobs. Invoking an operation in the wrong mode fails with
//! [`Error::Mode`] before any network call.
//!
//! ## Synchronizing an account
//!
//! ```rust,no_run
//! use ponto_rs::{PontoClient, Environment, AccountId, SyncSubtype};
//!
//! # async fn example() -> ponto_rs::Result<()> {
//! let client = PontoClient::new("id", "secret", Environment::Production)?;
//! let account = AccountId::new("42f82b55-c4e9-4c9d-8f5a-0d34eae9ad16");
//!
//! let job = client
//!     .synchronizations()
//!     .sync_account(&account, SyncSubtype::AccountTransactions)
//!     .await?;
//! println!("synchronization {} queued", job.id);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, Page, PageQuery, PageStream, PagingMeta, PontoClient};
pub use error::{Error, Result};
pub use models::{
    AccountId, Environment, FinancialInstitutionId, Resource, SyncSubtype, SynchronizationId,
    TransactionId,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use ponto_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountsService, FinancialInstitutionsService, SynchronizationsService,
        TransactionsService,
    };
    pub use crate::client::{ClientConfig, Page, PageQuery, PageStream, PagingMeta, PontoClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        Account, AccountId, Environment, FinancialInstitution, FinancialInstitutionId, Resource,
        SyncSubtype, Synchronization, SynchronizationId, Transaction, TransactionId,
    };
}
