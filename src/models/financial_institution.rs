//! Financial institution models.

use serde::{Deserialize, Serialize};

/// Attributes of a financial institution (a bank reachable through Ponto).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialInstitution {
    /// Display name of the institution
    pub name: String,
    /// Whether the institution is deprecated and should no longer be linked
    #[serde(default)]
    pub deprecated: Option<bool>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(default)]
    pub country: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Resource;

    #[test]
    fn test_deserialize_financial_institution() {
        let json = r#"{
            "type": "financialInstitution",
            "id": "953934eb-229a-4fd2-8675-07794078cc7d",
            "attributes": {
                "name": "Fake Bank",
                "deprecated": false,
                "country": "BE"
            }
        }"#;

        let fi: Resource<FinancialInstitution> = serde_json::from_str(json).unwrap();
        assert_eq!(fi.kind, "financialInstitution");
        assert_eq!(fi.attributes.name, "Fake Bank");
        assert_eq!(fi.attributes.deprecated, Some(false));
    }
}
