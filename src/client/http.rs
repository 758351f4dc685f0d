//! HTTP client implementation for the Ponto API.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use secrecy::ExposeSecret;
use serde::{de::DeserializeOwned, Serialize};
use std::sync::Arc;

use crate::api::{
    AccountsService, FinancialInstitutionsService, SynchronizationsService, TransactionsService,
};
use crate::auth::{Credentials, TokenManager};
use crate::models::Environment;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the Ponto API.
///
/// The client provides access to all API resources through method calls
/// that return service structs. It owns the cached bearer token and
/// refreshes it on demand before any authenticated call.
///
/// # Example
///
/// ```no_run
/// use ponto_rs::{PontoClient, Environment, PageQuery};
///
/// # async fn example() -> ponto_rs::Result<()> {
/// let client = PontoClient::new(
///     "your-client-id",
///     "your-client-secret",
///     Environment::Sandbox,
/// )?;
///
/// let page = client
///     .financial_institutions()
///     .list(PageQuery::default().with_limit(20))
///     .await?;
///
/// for institution in &page.items {
///     println!("{}: {}", institution.id, institution.attributes.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PontoClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) env: Environment,
    pub(crate) credentials: Credentials,
    pub(crate) tokens: TokenManager,
    pub(crate) config: ClientConfig,
}

impl PontoClient {
    /// Create a new client with the default configuration.
    ///
    /// No network call is made here; the first token exchange happens
    /// lazily on the first authenticated operation.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        env: Environment,
    ) -> Result<Self> {
        Self::with_config(client_id, client_secret, env, ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        env: Environment,
        config: ClientConfig,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                env,
                credentials: Credentials::new(client_id, client_secret),
                tokens: TokenManager::new(),
                config,
            }),
        })
    }

    /// Get the financial institutions service.
    pub fn financial_institutions(&self) -> FinancialInstitutionsService {
        FinancialInstitutionsService::new(self.inner.clone())
    }

    /// Get the accounts service (production only).
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the transactions service (production only).
    pub fn transactions(&self) -> TransactionsService {
        TransactionsService::new(self.inner.clone())
    }

    /// Get the synchronizations service (production only).
    pub fn synchronizations(&self) -> SynchronizationsService {
        SynchronizationsService::new(self.inner.clone())
    }

    /// Get the environment this client targets.
    pub fn environment(&self) -> Environment {
        self.inner.env
    }
}

impl ClientInner {
    /// Base URL without trailing slash, honoring the test override.
    pub(crate) fn base_url(&self) -> String {
        match &self.config.base_url {
            Some(url) => url.as_str().trim_end_matches('/').to_string(),
            None => self.env.api_base_url().to_string(),
        }
    }

    /// URL of the OAuth2 token endpoint; not mode-scoped.
    pub(crate) fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.base_url())
    }

    /// Build a resource URL: base URL + mode segment + path.
    pub(crate) fn resource_url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url(), self.env.mode_segment(), path)
    }

    /// Fail fast when a production-only operation is invoked in sandbox mode.
    pub(crate) fn require_production(&self, operation: &str) -> Result<()> {
        if self.env.is_production() {
            Ok(())
        } else {
            Err(Error::Mode {
                operation: operation.to_string(),
                required: Environment::Production,
            })
        }
    }

    /// Fail fast when a sandbox-only operation is invoked in production mode.
    pub(crate) fn require_sandbox(&self, operation: &str) -> Result<()> {
        if self.env.is_sandbox() {
            Ok(())
        } else {
            Err(Error::Mode {
                operation: operation.to_string(),
                required: Environment::Sandbox,
            })
        }
    }

    /// Build request headers, refreshing the bearer token if needed.
    pub(crate) async fn bearer_headers(&self) -> Result<HeaderMap> {
        let token = self
            .tokens
            .ensure_token(&self.http, &self.credentials, &self.token_url())
            .await?;

        let mut headers = HeaderMap::new();
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Validation("invalid token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.resource_url(path);
        let headers = self.bearer_headers().await?;

        tracing::debug!(%url, "GET");
        let response = self.http.get(&url).headers(headers).send().await?;

        self.handle_response(response).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        path: &str,
        query: &Q,
    ) -> Result<T> {
        let url = self.resource_url(path);
        let headers = self.bearer_headers().await?;

        tracing::debug!(%url, "GET");
        let response = self
            .http
            .get(&url)
            .headers(headers)
            .query(query)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.resource_url(path);
        let mut headers = self.bearer_headers().await?;
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        tracing::debug!(%url, "POST");
        let response = self
            .http
            .post(&url)
            .headers(headers)
            .json(body)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle an API response.
    ///
    /// An operation either fully succeeds (parsed body returned) or fully
    /// fails; no retry, no partial success.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let status_code = status.as_u16();
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            tracing::warn!(status = status_code, "API request failed");
            Err(Error::from_api_response(status_code, body))
        }
    }
}

impl Clone for PontoClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for PontoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PontoClient")
            .field("env", &self.inner.env)
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(env: Environment) -> PontoClient {
        PontoClient::new("id", "secret", env).unwrap()
    }

    #[test]
    fn test_resource_url_by_mode() {
        let production = client(Environment::Production);
        assert_eq!(
            production.inner.resource_url("/accounts"),
            "https://api.myponto.com/accounts"
        );

        let sandbox = client(Environment::Sandbox);
        assert_eq!(
            sandbox.inner.resource_url("/financial-institutions"),
            "https://api.myponto.com/sandbox/financial-institutions"
        );
    }

    #[test]
    fn test_token_url_is_not_mode_scoped() {
        let sandbox = client(Environment::Sandbox);
        assert_eq!(
            sandbox.inner.token_url(),
            "https://api.myponto.com/oauth2/token"
        );
    }

    #[test]
    fn test_mode_guards() {
        let sandbox = client(Environment::Sandbox);
        assert!(sandbox.inner.require_sandbox("x").is_ok());
        let err = sandbox.inner.require_production("accounts.list").unwrap_err();
        assert!(matches!(err, Error::Mode { .. }));

        let production = client(Environment::Production);
        assert!(production.inner.require_production("x").is_ok());
        assert!(production.inner.require_sandbox("x").is_err());
    }

    #[test]
    fn test_debug_does_not_leak_secret() {
        let c = client(Environment::Sandbox);
        let debug_str = format!("{:?}", c);
        assert!(!debug_str.contains("secret"));
    }
}
