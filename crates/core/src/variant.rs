//! Structural resolution for the warning family.
//!
//! Warning payloads carry no type tag; the concrete kind is proven by
//! which fields are present. Candidates are checked most specific first
//! (largest distinguishing field set) and the first full match wins, so
//! resolution is deterministic. `text` is common to the whole family and
//! never counts for or against a match.

use crate::raw::{self, RawNode};
use crate::schema::NodeKind;

/// One resolvable member of the warning family.
#[derive(Debug, Clone, Copy)]
pub struct VariantDescriptor {
    pub kind: NodeKind,
    /// The fields that prove this kind, all of which must be present.
    pub fields: &'static [&'static str],
}

/// The registered warning kinds, most specific first.
///
/// The delimiters kind is registered but structurally mute: its payload
/// differs from the base warning only in meaning, so its distinguishing
/// set is empty and it can never be proven from a payload. A bare
/// `{text}` payload resolves to the generic warning.
pub const WARNING_FAMILY: &[VariantDescriptor] = &[
    VariantDescriptor {
        kind: NodeKind::TranslationWarning,
        fields: &["phrase", "trans", "lang"],
    },
    VariantDescriptor {
        kind: NodeKind::SpellcheckWarning,
        fields: &["word", "suggestion"],
    },
    VariantDescriptor {
        kind: NodeKind::DelimitersWarning,
        fields: &[],
    },
];

/// Picks the concrete warning kind for one raw payload, falling back to
/// the generic base kind when nothing can be proven.
pub fn resolve_warning(raw: &RawNode) -> NodeKind {
    for candidate in WARNING_FAMILY {
        if candidate.fields.is_empty() {
            continue;
        }
        let matches = candidate
            .fields
            .iter()
            .all(|field| raw::lookup(raw, field).is_some());
        if matches {
            return candidate.kind;
        }
    }
    NodeKind::Warning
}
