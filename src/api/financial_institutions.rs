//! Financial institutions service.
//!
//! Listing and fetching institutions works in both modes. The nested
//! financial-institution accounts and transactions are sandbox fixtures
//! and exist only there.

use std::sync::Arc;

use super::require_id;
use crate::client::{fetch_page, ClientInner, Page, PageQuery};
use crate::models::{
    Account, AccountId, Document, FinancialInstitution, FinancialInstitutionId, Resource,
    Transaction, TransactionId,
};
use crate::Result;

/// Service for financial-institution operations.
///
/// # Example
///
/// ```no_run
/// use ponto_rs::PageQuery;
///
/// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
/// let page = client
///     .financial_institutions()
///     .list(PageQuery::default().with_limit(2))
///     .await?;
///
/// for institution in &page.items {
///     println!("{}", institution.attributes.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct FinancialInstitutionsService {
    inner: Arc<ClientInner>,
}

impl FinancialInstitutionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List financial institutions.
    pub async fn list(&self, query: PageQuery) -> Result<Page<Resource<FinancialInstitution>>> {
        fetch_page(&self.inner, "/financial-institutions", query).await
    }

    /// Get a single financial institution.
    pub async fn get(
        &self,
        financial_institution_id: &FinancialInstitutionId,
    ) -> Result<Resource<FinancialInstitution>> {
        require_id("financialInstitutionId", financial_institution_id.as_str())?;

        let document: Document<Resource<FinancialInstitution>> = self
            .inner
            .get(&format!(
                "/financial-institutions/{}",
                financial_institution_id
            ))
            .await?;
        Ok(document.data)
    }

    /// List fixture accounts of a sandbox financial institution.
    ///
    /// Sandbox only.
    pub async fn list_accounts(
        &self,
        financial_institution_id: &FinancialInstitutionId,
        query: PageQuery,
    ) -> Result<Page<Resource<Account>>> {
        self.inner
            .require_sandbox("financialInstitutions.listAccounts")?;
        require_id("financialInstitutionId", financial_institution_id.as_str())?;

        let path = format!(
            "/financial-institutions/{}/financial-institution-accounts",
            financial_institution_id
        );
        fetch_page(&self.inner, &path, query).await
    }

    /// Get a fixture account of a sandbox financial institution.
    ///
    /// Sandbox only.
    pub async fn get_account(
        &self,
        financial_institution_id: &FinancialInstitutionId,
        account_id: &AccountId,
    ) -> Result<Resource<Account>> {
        self.inner
            .require_sandbox("financialInstitutions.getAccount")?;
        require_id("financialInstitutionId", financial_institution_id.as_str())?;
        require_id("accountId", account_id.as_str())?;

        let document: Document<Resource<Account>> = self
            .inner
            .get(&format!(
                "/financial-institutions/{}/financial-institution-accounts/{}",
                financial_institution_id, account_id
            ))
            .await?;
        Ok(document.data)
    }

    /// List fixture transactions of a sandbox account.
    ///
    /// Sandbox only.
    pub async fn list_transactions(
        &self,
        financial_institution_id: &FinancialInstitutionId,
        account_id: &AccountId,
        query: PageQuery,
    ) -> Result<Page<Resource<Transaction>>> {
        self.inner
            .require_sandbox("financialInstitutions.listTransactions")?;
        require_id("financialInstitutionId", financial_institution_id.as_str())?;
        require_id("accountId", account_id.as_str())?;

        let path = format!(
            "/financial-institutions/{}/financial-institution-accounts/{}/financial-institution-transactions",
            financial_institution_id, account_id
        );
        fetch_page(&self.inner, &path, query).await
    }

    /// Get a fixture transaction of a sandbox account.
    ///
    /// Sandbox only.
    pub async fn get_transaction(
        &self,
        financial_institution_id: &FinancialInstitutionId,
        account_id: &AccountId,
        transaction_id: &TransactionId,
    ) -> Result<Resource<Transaction>> {
        self.inner
            .require_sandbox("financialInstitutions.getTransaction")?;
        require_id("financialInstitutionId", financial_institution_id.as_str())?;
        require_id("accountId", account_id.as_str())?;
        require_id("transactionId", transaction_id.as_str())?;

        let document: Document<Resource<Transaction>> = self
            .inner
            .get(&format!(
                "/financial-institutions/{}/financial-institution-accounts/{}/financial-institution-transactions/{}",
                financial_institution_id, account_id, transaction_id
            ))
            .await?;
        Ok(document.data)
    }
}
