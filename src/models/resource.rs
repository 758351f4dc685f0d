//! JSON:API resource envelopes.
//!
//! Every Ponto payload wraps its content in a `data` member; resources
//! carry a `type` discriminator, an `id` and an `attributes` object.

use serde::{Deserialize, Serialize};

/// A single JSON:API resource with typed attributes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource<A> {
    /// Resource type discriminator (e.g. `"account"`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Resource identifier
    pub id: String,
    /// Resource attributes
    pub attributes: A,
}

/// Top-level document wrapping a single resource.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Document<T> {
    pub data: T,
}
