//! Bearer-token lifecycle management.

use chrono::{DateTime, Duration, Utc};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use secrecy::SecretString;
use serde::Deserialize;
use tokio::sync::RwLock;

use super::Credentials;
use crate::{Error, Result};

/// Seconds subtracted from `expires_in` when computing the local expiry.
///
/// Absorbs clock skew and in-flight request latency so a token is never
/// presented in its final moments of validity.
const EXPIRY_SAFETY_MARGIN_SECS: i64 = 20;

/// Manages the OAuth2 client-credentials bearer token.
///
/// The token is cached in memory and replaced wholesale once the current
/// time reaches `acquired_at + (expires_in - 20)s`. Refresh is guarded by
/// a write lock, so concurrent callers racing past an expired token
/// trigger a single exchange; the exchange itself is idempotent on the
/// remote side either way.
pub(crate) struct TokenManager {
    state: RwLock<Option<CachedToken>>,
}

struct CachedToken {
    access_token: SecretString,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_usable(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

impl TokenManager {
    pub(crate) fn new() -> Self {
        Self {
            state: RwLock::new(None),
        }
    }

    /// Return a usable access token, performing the client-credentials
    /// exchange first if none is held or the held one has expired.
    ///
    /// Idempotent and safe to call before every authenticated request.
    pub(crate) async fn ensure_token(
        &self,
        http: &reqwest::Client,
        credentials: &Credentials,
        token_url: &str,
    ) -> Result<SecretString> {
        {
            let state = self.state.read().await;
            if let Some(token) = state.as_ref() {
                if token.is_usable(Utc::now()) {
                    return Ok(token.access_token.clone());
                }
            }
        }

        let mut state = self.state.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(token) = state.as_ref() {
            if token.is_usable(Utc::now()) {
                return Ok(token.access_token.clone());
            }
        }

        tracing::debug!(token_url, "acquiring access token");
        let token = Self::exchange(http, credentials, token_url).await?;
        let access_token = token.access_token.clone();
        *state = Some(token);
        Ok(access_token)
    }

    async fn exchange(
        http: &reqwest::Client,
        credentials: &Credentials,
        token_url: &str,
    ) -> Result<CachedToken> {
        let response = http
            .post(token_url)
            .query(&[("grant_type", "client_credentials")])
            .header(AUTHORIZATION, credentials.basic_header())
            .header(ACCEPT, "application/json")
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            return Err(Error::Authentication(format!(
                "token exchange failed ({}): {:?}",
                status, body
            )));
        }

        let token_response: TokenResponse = response
            .json()
            .await
            .map_err(|e| Error::Authentication(format!("malformed token response: {e}")))?;

        Ok(CachedToken {
            access_token: SecretString::from(token_response.access_token),
            expires_at: expiry_from(token_response.expires_in, Utc::now()),
        })
    }
}

fn expiry_from(expires_in: i64, now: DateTime<Utc>) -> DateTime<Utc> {
    now + Duration::seconds(expires_in - EXPIRY_SAFETY_MARGIN_SECS)
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_applies_safety_margin() {
        let now = Utc::now();
        assert_eq!(expiry_from(3600, now), now + Duration::seconds(3580));
    }

    #[test]
    fn test_token_usable_strictly_before_expiry() {
        let now = Utc::now();
        let token = CachedToken {
            access_token: SecretString::from("tok".to_string()),
            expires_at: now,
        };

        assert!(!token.is_usable(now));
        assert!(token.is_usable(now - Duration::seconds(1)));
        assert!(!token.is_usable(now + Duration::seconds(1)));
    }

    #[test]
    fn test_zero_margin_token_expires_immediately() {
        // expires_in == margin means the token is never considered usable
        let now = Utc::now();
        let token = CachedToken {
            access_token: SecretString::from("tok".to_string()),
            expires_at: expiry_from(EXPIRY_SAFETY_MARGIN_SECS, now),
        };
        assert!(!token.is_usable(now));
    }
}
