//! Data models for the Ponto API.
//!
//! Models are organized by domain:
//!
//! - [`primitives`] - Typed identifiers and the [`Environment`] flag
//! - [`resource`] - JSON:API `Resource`/`data` envelopes
//! - [`financial_institution`] - Financial institution attributes
//! - [`account`] - Account attributes
//! - [`transaction`] - Transaction attributes
//! - [`synchronization`] - Synchronization jobs and subtypes

pub mod account;
pub mod financial_institution;
pub mod primitives;
pub mod resource;
pub mod synchronization;
pub mod transaction;

// Re-export commonly used types
pub use account::*;
pub use financial_institution::*;
pub use primitives::*;
pub use synchronization::*;
pub use transaction::*;

pub use resource::Resource;
pub(crate) use resource::Document;
