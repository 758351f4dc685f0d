//! Synchronizations service for account-refresh jobs.

use std::sync::Arc;

use serde::Serialize;

use super::require_id;
use crate::client::ClientInner;
use crate::models::{
    AccountId, Document, Resource, SyncSubtype, Synchronization, SynchronizationId,
};
use crate::Result;

/// Service for synchronization jobs. Production only.
///
/// A synchronization asks Ponto to refresh an account's details or
/// transactions from the source bank; the job completes asynchronously
/// and its status can be polled with [`get`](Self::get).
///
/// # Example
///
/// ```no_run
/// use ponto_rs::{AccountId, SyncSubtype, SynchronizationId};
///
/// # async fn example(client: ponto_rs::PontoClient) -> ponto_rs::Result<()> {
/// let account = AccountId::new("42f82b55-c4e9-4c9d-8f5a-0d34eae9ad16");
///
/// let job = client
///     .synchronizations()
///     .sync_account(&account, SyncSubtype::AccountTransactions)
///     .await?;
///
/// let status = client
///     .synchronizations()
///     .get(&SynchronizationId::new(&job.id))
///     .await?;
/// println!("{:?}", status.attributes.status);
/// # Ok(())
/// # }
/// ```
pub struct SynchronizationsService {
    inner: Arc<ClientInner>,
}

#[derive(Serialize)]
struct SyncRequest<'a> {
    data: SyncData<'a>,
}

#[derive(Serialize)]
struct SyncData<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    attributes: SyncAttributes<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncAttributes<'a> {
    resource_type: &'static str,
    resource_id: &'a str,
    subtype: SyncSubtype,
}

impl SynchronizationsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Request a synchronization of an account.
    pub async fn sync_account(
        &self,
        account_id: &AccountId,
        subtype: SyncSubtype,
    ) -> Result<Resource<Synchronization>> {
        self.inner.require_production("synchronizations.create")?;
        require_id("accountId", account_id.as_str())?;

        let body = SyncRequest {
            data: SyncData {
                kind: "synchronization",
                attributes: SyncAttributes {
                    resource_type: "account",
                    resource_id: account_id.as_str(),
                    subtype,
                },
            },
        };

        let document: Document<Resource<Synchronization>> =
            self.inner.post("/synchronizations", &body).await?;
        Ok(document.data)
    }

    /// Fetch the status of a synchronization job.
    pub async fn get(
        &self,
        synchronization_id: &SynchronizationId,
    ) -> Result<Resource<Synchronization>> {
        self.inner.require_production("synchronizations.get")?;
        require_id("synchronizationId", synchronization_id.as_str())?;

        let document: Document<Resource<Synchronization>> = self
            .inner
            .get(&format!("/synchronizations/{}", synchronization_id))
            .await?;
        Ok(document.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sync_request_body_shape() {
        let body = SyncRequest {
            data: SyncData {
                kind: "synchronization",
                attributes: SyncAttributes {
                    resource_type: "account",
                    resource_id: "acc-1",
                    subtype: SyncSubtype::AccountDetails,
                },
            },
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "data": {
                    "type": "synchronization",
                    "attributes": {
                        "resourceType": "account",
                        "resourceId": "acc-1",
                        "subtype": "accountDetails"
                    }
                }
            })
        );
    }
}
