//! podium-core: typed decoding of answer-engine result payloads.
//!
//! The wire format is loosely typed JSON bridged from an XML world:
//! numbers and booleans arrive string-coded, and a single child
//! arrives bare instead of wrapped in a list. Keys may also carry an
//! `@` prefix left over from attribute marking. [`decode()`] turns one
//! such payload into an owned, strongly typed result tree whose every
//! node can hand back the exact payload it came from.
//!
//! # Public API
//!
//! Key types are re-exported at the crate root for convenience:
//!
//! - [`decode()`] -- raw payload in, [`QueryResult`] tree out
//! - [`QueryResult`] and the other node types in [`model`]
//! - [`ModelNode`] -- `kind` / `raw` / `to_raw` on every node
//! - [`DecodeError`] -- the single failure type, naming node and field
//! - [`NodeKind`] / [`FieldDescriptor`] -- the schema tables field
//!   reads are checked against

pub mod cardinality;
pub mod coerce;
pub mod decode;
pub mod error;
pub mod model;
pub mod raw;
pub mod roundtrip;
pub mod schema;
pub mod variant;

// ── Convenience re-exports: key types ────────────────────────────────

pub use error::{CoercionError, DecodeError, DecodeErrorCause, ShapeError};
pub use model::{
    Assumption, AssumptionValue, Assumptions, DidYouMean, ErrorInfo, Image, Pod, QueryResult,
    Source, SubPod, Tip, Warning,
};
pub use raw::RawNode;
pub use roundtrip::ModelNode;
pub use schema::{FieldDescriptor, FieldKind, NodeKind};

// ── Convenience re-exports: entry points ─────────────────────────────

pub use decode::decode;
