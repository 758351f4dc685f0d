//! Transactions service for account history.

use std::sync::Arc;

use super::require_id;
use crate::client::{fetch_page, ClientInner, Page, PageQuery};
use crate::models::{AccountId, Document, Resource, Transaction, TransactionId};
use crate::Result;

/// Service for transaction history on aggregated accounts. Production only.
///
/// # Example
///
/// ```no_run
/// use ponto_rs::{AccountId, PageQuery};
///
/// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
/// let account = AccountId::new("42f82b55-c4e9-4c9d-8f5a-0d34eae9ad16");
///
/// let page = client
///     .transactions()
///     .list(&account, PageQuery::default().with_limit(50))
///     .await?;
/// for tx in &page.items {
///     println!("{:?} {:?}", tx.attributes.amount, tx.attributes.description);
/// }
/// # Ok(())
/// # }
/// ```
pub struct TransactionsService {
    inner: Arc<ClientInner>,
}

impl TransactionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List transactions of an account.
    pub async fn list(
        &self,
        account_id: &AccountId,
        query: PageQuery,
    ) -> Result<Page<Resource<Transaction>>> {
        self.inner.require_production("transactions.list")?;
        require_id("accountId", account_id.as_str())?;

        let path = format!("/accounts/{}/transactions", account_id);
        fetch_page(&self.inner, &path, query).await
    }

    /// Get a single transaction.
    pub async fn get(
        &self,
        account_id: &AccountId,
        transaction_id: &TransactionId,
    ) -> Result<Resource<Transaction>> {
        self.inner.require_production("transactions.get")?;
        require_id("accountId", account_id.as_str())?;
        require_id("transactionId", transaction_id.as_str())?;

        let document: Document<Resource<Transaction>> = self
            .inner
            .get(&format!(
                "/accounts/{}/transactions/{}",
                account_id, transaction_id
            ))
            .await?;
        Ok(document.data)
    }
}
