//! Account models.
//!
//! The same attribute shape is used for production accounts and sandbox
//! financial-institution accounts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Attributes of a bank account aggregated through Ponto.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Account description as provided by the bank
    #[serde(default)]
    pub description: Option<String>,
    /// Account reference (usually the IBAN)
    #[serde(default)]
    pub reference: Option<String>,
    /// Type of the reference (e.g. `"IBAN"`)
    #[serde(default)]
    pub reference_type: Option<String>,
    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Account subtype (e.g. `"checking"`)
    #[serde(default)]
    pub subtype: Option<String>,
    /// Balance available for spending
    #[serde(default)]
    pub available_balance: Option<Decimal>,
    /// Booked balance
    #[serde(default)]
    pub current_balance: Option<Decimal>,
    /// When account details were last synchronized
    #[serde(default)]
    pub synchronized_at: Option<DateTime<Utc>>,
}
