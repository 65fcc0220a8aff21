//! The schema registry: every node kind the decoder recognizes and the
//! fields each kind consumes.
//!
//! The tables below are the single source of truth for field names, wire
//! encodings, requiredness, and multiplicity. They are `const` data, so
//! the registry needs no initialization and any number of decode calls
//! can read it concurrently. A node kind without a schema cannot be
//! expressed: the enum is closed.

// ──────────────────────────────────────────────
// Node kinds
// ──────────────────────────────────────────────

/// Every node kind in the result tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    QueryResult,
    Pod,
    SubPod,
    Image,
    ErrorInfo,
    Assumptions,
    Assumption,
    AssumptionValue,
    Warning,
    SpellcheckWarning,
    DelimitersWarning,
    TranslationWarning,
    Source,
    DidYouMean,
    Tip,
}

/// All node kinds, for table-driven tests and tooling.
pub const ALL_KINDS: &[NodeKind] = &[
    NodeKind::QueryResult,
    NodeKind::Pod,
    NodeKind::SubPod,
    NodeKind::Image,
    NodeKind::ErrorInfo,
    NodeKind::Assumptions,
    NodeKind::Assumption,
    NodeKind::AssumptionValue,
    NodeKind::Warning,
    NodeKind::SpellcheckWarning,
    NodeKind::DelimitersWarning,
    NodeKind::TranslationWarning,
    NodeKind::Source,
    NodeKind::DidYouMean,
    NodeKind::Tip,
];

impl NodeKind {
    /// The wire element name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::QueryResult => "queryresult",
            NodeKind::Pod => "pod",
            NodeKind::SubPod => "subpod",
            NodeKind::Image => "img",
            NodeKind::ErrorInfo => "error",
            NodeKind::Assumptions => "assumptions",
            NodeKind::Assumption => "assumption",
            NodeKind::AssumptionValue => "value",
            NodeKind::Warning => "warning",
            NodeKind::SpellcheckWarning => "spellcheck",
            NodeKind::DelimitersWarning => "delimiters",
            NodeKind::TranslationWarning => "translation",
            NodeKind::Source => "source",
            NodeKind::DidYouMean => "didyoumean",
            NodeKind::Tip => "tip",
        }
    }

    /// The fields this node kind consumes, in declaration order.
    pub fn schema(&self) -> &'static [FieldDescriptor] {
        match self {
            NodeKind::QueryResult => QUERY_RESULT,
            NodeKind::Pod => POD,
            NodeKind::SubPod => SUB_POD,
            NodeKind::Image => IMAGE,
            NodeKind::ErrorInfo => ERROR_INFO,
            NodeKind::Assumptions => ASSUMPTIONS,
            NodeKind::Assumption => ASSUMPTION,
            NodeKind::AssumptionValue => ASSUMPTION_VALUE,
            NodeKind::Warning => WARNING,
            NodeKind::SpellcheckWarning => SPELLCHECK_WARNING,
            NodeKind::DelimitersWarning => DELIMITERS_WARNING,
            NodeKind::TranslationWarning => TRANSLATION_WARNING,
            NodeKind::Source => SOURCE,
            NodeKind::DidYouMean => DID_YOU_MEAN,
            NodeKind::Tip => TIP,
        }
    }
}

// ──────────────────────────────────────────────
// Field descriptors
// ──────────────────────────────────────────────

/// The wire encoding of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain string.
    Str,
    /// Integer, usually string-encoded ("3").
    Int,
    /// Float, usually string-encoded ("1.292").
    Float,
    /// Boolean as the literal string "true"/"false"; absent means false.
    Bool,
    /// Comma-separated integer list ("1,2,16").
    IntList,
    /// Nested node of a fixed kind.
    Node(NodeKind),
    /// Either a nested node or the literal `false` meaning "none".
    NodeOrFalse(NodeKind),
    /// One of the warning kinds, resolved structurally per element.
    WarningFamily,
}

/// One recognized field of a node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Bare wire name; the `@`-marked spelling is derived at lookup.
    pub name: &'static str,
    /// Required fields abort the node's construction when absent.
    pub required: bool,
    /// Sequence fields go through list normalization; absent means empty.
    pub sequence: bool,
    pub kind: FieldKind,
}

const fn req(name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        name,
        required: true,
        sequence: false,
        kind,
    }
}

const fn opt(name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        name,
        required: false,
        sequence: false,
        kind,
    }
}

const fn seq(name: &'static str, kind: FieldKind) -> FieldDescriptor {
    FieldDescriptor {
        name,
        required: false,
        sequence: true,
        kind,
    }
}

// ──────────────────────────────────────────────
// Schema tables
// ──────────────────────────────────────────────

/// Top level. Every scalar is optional: genuine error responses carry
/// little more than `success` and `error`.
const QUERY_RESULT: &[FieldDescriptor] = &[
    opt("success", FieldKind::Bool),
    opt("error", FieldKind::NodeOrFalse(NodeKind::ErrorInfo)),
    opt("numpods", FieldKind::Int),
    opt("timing", FieldKind::Float),
    opt("id", FieldKind::Str),
    opt("host", FieldKind::Str),
    opt("recalculate", FieldKind::Str),
    opt("languagemsg", FieldKind::Str),
    opt("futuretopic", FieldKind::Str),
    seq("pods", FieldKind::Node(NodeKind::Pod)),
    opt("assumptions", FieldKind::Node(NodeKind::Assumptions)),
    seq("warnings", FieldKind::WarningFamily),
    seq("sources", FieldKind::Node(NodeKind::Source)),
    seq("didyoumeans", FieldKind::Node(NodeKind::DidYouMean)),
    seq("tips", FieldKind::Node(NodeKind::Tip)),
];

/// Injected pods can land between integer positions, so `position` is a
/// float on the wire even though it usually looks like an int.
const POD: &[FieldDescriptor] = &[
    req("title", FieldKind::Str),
    req("id", FieldKind::Str),
    opt("error", FieldKind::NodeOrFalse(NodeKind::ErrorInfo)),
    opt("position", FieldKind::Float),
    opt("numsubpods", FieldKind::Int),
    opt("primary", FieldKind::Bool),
    seq("subpods", FieldKind::Node(NodeKind::SubPod)),
];

/// `plaintext` is omitted when the caller requests image-only formats.
const SUB_POD: &[FieldDescriptor] = &[
    req("title", FieldKind::Str),
    opt("plaintext", FieldKind::Str),
    opt("img", FieldKind::Node(NodeKind::Image)),
];

const IMAGE: &[FieldDescriptor] = &[
    req("src", FieldKind::Str),
    opt("alt", FieldKind::Str),
    opt("title", FieldKind::Str),
    req("width", FieldKind::Int),
    req("height", FieldKind::Int),
    opt("themes", FieldKind::IntList),
    opt("contenttype", FieldKind::Str),
];

/// `code` is documented as an integer but transmitted as a string.
const ERROR_INFO: &[FieldDescriptor] = &[
    req("code", FieldKind::Int),
    req("msg", FieldKind::Str),
];

/// The assumptions collection is a wrapper element; the actual
/// assumptions sit under the singular `assumption` key.
const ASSUMPTIONS: &[FieldDescriptor] = &[
    opt("count", FieldKind::Int),
    seq("assumption", FieldKind::Node(NodeKind::Assumption)),
];

const ASSUMPTION: &[FieldDescriptor] = &[
    req("type", FieldKind::Str),
    opt("word", FieldKind::Str),
    opt("template", FieldKind::Str),
    opt("count", FieldKind::Int),
    seq("values", FieldKind::Node(NodeKind::AssumptionValue)),
];

const ASSUMPTION_VALUE: &[FieldDescriptor] = &[
    req("name", FieldKind::Str),
    opt("desc", FieldKind::Str),
    opt("input", FieldKind::Str),
];

/// Base warning: `text` is the one field the whole family shares.
const WARNING: &[FieldDescriptor] = &[opt("text", FieldKind::Str)];

const SPELLCHECK_WARNING: &[FieldDescriptor] = &[
    req("word", FieldKind::Str),
    req("suggestion", FieldKind::Str),
    opt("text", FieldKind::Str),
];

/// Structurally identical to the base warning; see `variant`.
const DELIMITERS_WARNING: &[FieldDescriptor] = &[opt("text", FieldKind::Str)];

const TRANSLATION_WARNING: &[FieldDescriptor] = &[
    req("phrase", FieldKind::Str),
    req("trans", FieldKind::Str),
    req("lang", FieldKind::Str),
    opt("text", FieldKind::Str),
];

const SOURCE: &[FieldDescriptor] = &[
    req("url", FieldKind::Str),
    opt("text", FieldKind::Str),
];

const DID_YOU_MEAN: &[FieldDescriptor] = &[
    opt("score", FieldKind::Float),
    opt("level", FieldKind::Str),
    req("val", FieldKind::Str),
];

const TIP: &[FieldDescriptor] = &[req("text", FieldKind::Str)];
