//! Authentication for the Ponto API.
//!
//! Ponto uses the OAuth2 client-credentials grant: the integration
//! authenticates as itself with a client id and secret, exchanging them
//! for a short-lived bearer token. The token is cached in memory and
//! refreshed on demand shortly before it expires; nothing is persisted.

mod credentials;
mod token;

pub use credentials::Credentials;
pub(crate) use token::TokenManager;
