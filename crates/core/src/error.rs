//! Decode failure types.
//!
//! A failed coercion or shape check aborts the enclosing node's
//! construction; there is no partial result tree. [`DecodeError`] is the
//! only error type that crosses the public decode API, and it always
//! names the deepest failing node and field because nested failures
//! propagate unwrapped.

use crate::schema::NodeKind;
use std::fmt;

// ──────────────────────────────────────────────
// Scalar coercion
// ──────────────────────────────────────────────

/// A scalar raw value that could not be read as its declared kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoercionError {
    /// The kind the schema declares ("integer", "boolean", ...).
    pub expected: &'static str,
    /// Rendering of the offending raw value.
    pub found: String,
}

impl fmt::Display for CoercionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, found {}", self.expected, self.found)
    }
}

impl std::error::Error for CoercionError {}

// ──────────────────────────────────────────────
// Container shape
// ──────────────────────────────────────────────

/// A raw value whose shape fits none of the normalizer cases
/// (absent, single object, or array of objects).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeError {
    /// Short description of the shape actually found.
    pub found: String,
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected an object or a list of objects, found {}", self.found)
    }
}

impl std::error::Error for ShapeError {}

// ──────────────────────────────────────────────
// Decode failures
// ──────────────────────────────────────────────

/// Why a specific field could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeErrorCause {
    /// A required field is absent (or null) under both key spellings.
    Missing,
    /// The field's scalar value failed coercion.
    Coercion(CoercionError),
    /// The field's container shape failed normalization.
    Shape(ShapeError),
}

/// A decode failure, pinpointing the node kind and field that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    /// The node kind whose construction failed.
    pub node: NodeKind,
    /// The wire name of the field that failed.
    pub field: &'static str,
    pub cause: DecodeErrorCause,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.cause {
            DecodeErrorCause::Missing => {
                write!(f, "{}: missing required field '{}'", self.node.name(), self.field)
            }
            DecodeErrorCause::Coercion(e) => {
                write!(f, "{}.{}: {}", self.node.name(), self.field, e)
            }
            DecodeErrorCause::Shape(e) => {
                write!(f, "{}.{}: {}", self.node.name(), self.field, e)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
