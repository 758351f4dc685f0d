//! HTTP client and pagination layer for the Ponto API.
//!
//! This module provides the main entry point [`PontoClient`] and the
//! cursor-pagination building blocks used by every list operation.
//!
//! # Example
//!
//! ```no_run
//! use ponto_rs::{PontoClient, Environment, PageQuery};
//!
//! # async fn example() -> ponto_rs::Result<()> {
//! let client = PontoClient::new("client-id", "client-secret", Environment::Sandbox)?;
//!
//! let institutions = client
//!     .financial_institutions()
//!     .list(PageQuery::default())
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;
pub mod page;

pub use config::ClientConfig;
pub use http::PontoClient;
pub use page::{Page, PageQuery, PageStream, PagingMeta, LIMIT_RANGE};
pub(crate) use http::ClientInner;
pub(crate) use page::fetch_page;
