//! Transaction models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attributes of a booked transaction on an account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Signed amount; negative for debits
    #[serde(default)]
    pub amount: Option<Decimal>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Bank-provided description
    #[serde(default)]
    pub description: Option<String>,
    /// Name of the counterpart
    #[serde(default)]
    pub counterpart_name: Option<String>,
    /// Account reference of the counterpart
    #[serde(default)]
    pub counterpart_reference: Option<String>,
    /// When the transaction was executed
    #[serde(default)]
    pub execution_date: Option<DateTime<Utc>>,
    /// When the transaction affected the balance
    #[serde(default)]
    pub value_date: Option<DateTime<Utc>>,
    /// Free-form payment message
    #[serde(default)]
    pub remittance_information: Option<String>,
    /// Type of the remittance information (e.g. `"unstructured"`)
    #[serde(default)]
    pub remittance_information_type: Option<String>,
}
