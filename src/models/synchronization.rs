//! Synchronization job models.
//!
//! A synchronization is an asynchronous job on the Ponto side that
//! refreshes account data from the source bank.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// What a synchronization refreshes.
///
/// Only two subtypes exist; requesting anything else is rejected by the
/// client before a request is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SyncSubtype {
    /// Refresh account metadata and balances
    AccountDetails,
    /// Refresh the account's transaction list
    AccountTransactions,
}

impl SyncSubtype {
    /// The wire representation of this subtype.
    pub fn as_str(&self) -> &'static str {
        match self {
            SyncSubtype::AccountDetails => "accountDetails",
            SyncSubtype::AccountTransactions => "accountTransactions",
        }
    }
}

impl fmt::Display for SyncSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SyncSubtype {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "accountDetails" => Ok(SyncSubtype::AccountDetails),
            "accountTransactions" => Ok(SyncSubtype::AccountTransactions),
            other => Err(Error::Validation(format!(
                "invalid synchronization subtype `{other}`; \
                 expected `accountDetails` or `accountTransactions`"
            ))),
        }
    }
}

/// Attributes of a synchronization job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Synchronization {
    /// Type of the synchronized resource; always `"account"`
    pub resource_type: String,
    /// Identifier of the synchronized resource
    pub resource_id: String,
    /// What the job refreshes
    pub subtype: SyncSubtype,
    /// Job status (`"pending"`, `"running"`, `"success"`, `"error"`)
    #[serde(default)]
    pub status: Option<String>,
    /// Errors reported by the job, if any
    #[serde(default)]
    pub errors: Option<serde_json::Value>,
    /// When the job was created
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// When the job last changed state
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
