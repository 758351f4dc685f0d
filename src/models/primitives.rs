//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around string identifiers
//! to prevent mixing up different types of IDs at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new identifier from a string.
            pub fn new(s: impl Into<String>) -> Self {
                Self(s.into())
            }

            /// Get the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }
    };
}

string_id! {
    /// A financial institution identifier (UUID on the wire).
    FinancialInstitutionId
}

string_id! {
    /// An account identifier (UUID on the wire).
    ///
    /// Used for both production accounts and sandbox
    /// financial-institution accounts.
    AccountId
}

string_id! {
    /// A transaction identifier (UUID on the wire).
    TransactionId
}

string_id! {
    /// A synchronization job identifier (UUID on the wire).
    SynchronizationId
}

/// Environment configuration for the Ponto API.
///
/// Determines which endpoint set is reachable. Sandbox resources live
/// under a `/sandbox` URL segment and expose fixture financial
/// institutions; production resources (live accounts, transactions,
/// synchronizations) are unavailable there, and vice versa.
///
/// # Example
///
/// ```
/// use ponto_rs::Environment;
///
/// let env = Environment::Sandbox;
/// assert_eq!(env.mode_segment(), "/sandbox");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Production environment - live bank data.
    #[default]
    Production,
    /// Sandbox environment with fixture data.
    Sandbox,
}

impl Environment {
    /// Get the base URL for REST API requests.
    pub fn api_base_url(&self) -> &'static str {
        "https://api.myponto.com"
    }

    /// Get the URL segment inserted between the base URL and resource
    /// paths. Empty in production.
    pub fn mode_segment(&self) -> &'static str {
        match self {
            Environment::Production => "",
            Environment::Sandbox => "/sandbox",
        }
    }

    /// Returns `true` if this is the production environment.
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    /// Returns `true` if this is the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        matches!(self, Environment::Sandbox)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Environment::Production => write!(f, "production"),
            Environment::Sandbox => write!(f, "sandbox"),
        }
    }
}
