//! podium-client: blocking HTTP client for the answer-engine APIs.
//!
//! Wraps the service's public endpoints. The full-results endpoint
//! returns a typed [`QueryResult`] decoded by `podium-core`; the
//! single-purpose `v1` endpoints return plain text, image bytes, or
//! one dialogue turn.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`Client`] -- `query` / `query_with`, `short_answer`, `spoken`,
//!   `simple`, `conversational`
//! - [`QueryParams`] / [`ConversationalParams`] -- per-request options
//! - [`ClientError`] -- the single failure type
//! - [`Endpoint`] -- the closed set of service endpoints

pub mod client;
pub mod endpoint;
pub mod error;
pub mod params;

// ── Convenience re-exports: key types ────────────────────────────────

pub use client::{Client, ConversationalResult, DEFAULT_BASE_URL};
pub use endpoint::Endpoint;
pub use error::ClientError;
pub use params::{ConversationalParams, LatLong, QueryParams, Units};

// ── Convenience re-exports: decoded tree ─────────────────────────────

pub use podium_core::{DecodeError, ModelNode, QueryResult};
