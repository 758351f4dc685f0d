//! Accounts service for aggregated bank accounts.

use std::sync::Arc;

use super::require_id;
use crate::client::{fetch_page, ClientInner, Page, PageQuery};
use crate::models::{Account, AccountId, Document, Resource};
use crate::Result;

/// Service for account operations. Production only.
///
/// # Example
///
/// ```no_run
/// use ponto_rs::PageQuery;
///
/// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
/// let accounts = client.accounts().list(PageQuery::default()).await?;
/// for account in &accounts.items {
///     println!("{}: {:?}", account.id, account.attributes.reference);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List aggregated accounts.
    pub async fn list(&self, query: PageQuery) -> Result<Page<Resource<Account>>> {
        self.inner.require_production("accounts.list")?;
        fetch_page(&self.inner, "/accounts", query).await
    }

    /// Get a single account.
    pub async fn get(&self, account_id: &AccountId) -> Result<Resource<Account>> {
        self.inner.require_production("accounts.get")?;
        require_id("accountId", account_id.as_str())?;

        let document: Document<Resource<Account>> =
            self.inner.get(&format!("/accounts/{}", account_id)).await?;
        Ok(document.data)
    }
}
