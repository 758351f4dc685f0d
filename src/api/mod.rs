//! API service modules for Ponto resources.
//!
//! Each service is a thin binding over the generic request and
//! pagination helpers, supplying paths, item types and mode
//! restrictions for one resource family.

mod accounts;
mod financial_institutions;
mod synchronizations;
mod transactions;

pub use accounts::AccountsService;
pub use financial_institutions::FinancialInstitutionsService;
pub use synchronizations::SynchronizationsService;
pub use transactions::TransactionsService;

use crate::{Error, Result};

/// Reject empty path-segment identifiers before building a URL.
pub(crate) fn require_id(name: &'static str, id: &str) -> Result<()> {
    if id.trim().is_empty() {
        Err(Error::Validation(format!(
            "{name} must be a non-empty string"
        )))
    } else {
        Ok(())
    }
}
