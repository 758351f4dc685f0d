//! OAuth2 client credentials.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use secrecy::{ExposeSecret, SecretString};

/// OAuth2 client-credentials pair for a Ponto integration.
///
/// The Basic-auth header value is derived once at construction and held
/// for the lifetime of the client; the raw secret is never kept around.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    basic_header: SecretString,
}

impl Credentials {
    /// Create credentials from a client id and client secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        let client_id = client_id.into();
        let encoded = BASE64.encode(format!("{}:{}", client_id, client_secret.into()));

        Self {
            client_id,
            basic_header: SecretString::from(format!("Basic {encoded}")),
        }
    }

    /// The client id (not secret).
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The precomputed `Authorization: Basic ...` header value.
    pub(crate) fn basic_header(&self) -> &str {
        self.basic_header.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("basic_header", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_header_encoding() {
        let credentials = Credentials::new("id", "secret");
        // base64("id:secret")
        assert_eq!(credentials.basic_header(), "Basic aWQ6c2VjcmV0");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let credentials = Credentials::new("client-1", "super-secret");
        let debug_str = format!("{:?}", credentials);
        assert!(debug_str.contains("client-1"));
        assert!(!debug_str.contains("super-secret"));
        assert!(debug_str.contains("REDACTED"));
    }
}
