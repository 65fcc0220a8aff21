//! Model graph construction.
//!
//! `decode` walks a raw payload top-down and produces owned `model`
//! nodes. Field reads go through `Fields`, which checks the name
//! against the node's schema table and applies the right coercion.
//! Failures surface as a `DecodeError` naming the deepest node and
//! field that could not be read.

use serde_json::Value;

use crate::cardinality;
use crate::coerce;
use crate::error::{CoercionError, DecodeError, DecodeErrorCause, ShapeError};
use crate::model::{
    Assumption, AssumptionValue, Assumptions, DidYouMean, ErrorInfo, Image, Pod, QueryResult,
    Source, SubPod, Tip, Warning,
};
use crate::raw::{self, RawNode};
use crate::schema::NodeKind;
use crate::variant;

/// Decode a raw top-level payload into the typed result tree.
pub fn decode(raw: &RawNode) -> Result<QueryResult, DecodeError> {
    QueryResult::build(raw)
}

// ──────────────────────────────────────────────
// Field reader
// ──────────────────────────────────────────────

/// Schema-checked view of one raw node during decoding.
struct Fields<'a> {
    kind: NodeKind,
    raw: &'a RawNode,
}

impl<'a> Fields<'a> {
    fn new(kind: NodeKind, raw: &'a RawNode) -> Self {
        Fields { kind, raw }
    }

    /// Look up a field by bare or attribute-marked key. Asking for a
    /// name the schema table does not declare is a programming error.
    fn get(&self, field: &'static str) -> Option<&'a Value> {
        debug_assert!(
            self.kind.schema().iter().any(|d| d.name == field),
            "field '{}' is not declared for {}",
            field,
            self.kind.name(),
        );
        raw::lookup(self.raw, field)
    }

    fn missing(&self, field: &'static str) -> DecodeError {
        DecodeError {
            node: self.kind,
            field,
            cause: DecodeErrorCause::Missing,
        }
    }

    fn coercion(&self, field: &'static str, err: CoercionError) -> DecodeError {
        DecodeError {
            node: self.kind,
            field,
            cause: DecodeErrorCause::Coercion(err),
        }
    }

    fn shape(&self, field: &'static str, err: ShapeError) -> DecodeError {
        DecodeError {
            node: self.kind,
            field,
            cause: DecodeErrorCause::Shape(err),
        }
    }

    fn string(&self, field: &'static str) -> Result<String, DecodeError> {
        let v = self.get(field).ok_or_else(|| self.missing(field))?;
        coerce::string(v).map_err(|e| self.coercion(field, e))
    }

    fn opt_string(&self, field: &'static str) -> Result<Option<String>, DecodeError> {
        match self.get(field) {
            Some(v) => coerce::string(v)
                .map(Some)
                .map_err(|e| self.coercion(field, e)),
            None => Ok(None),
        }
    }

    fn int(&self, field: &'static str) -> Result<i64, DecodeError> {
        let v = self.get(field).ok_or_else(|| self.missing(field))?;
        coerce::int(v).map_err(|e| self.coercion(field, e))
    }

    fn opt_int(&self, field: &'static str) -> Result<Option<i64>, DecodeError> {
        match self.get(field) {
            Some(v) => coerce::int(v)
                .map(Some)
                .map_err(|e| self.coercion(field, e)),
            None => Ok(None),
        }
    }

    fn opt_float(&self, field: &'static str) -> Result<Option<f64>, DecodeError> {
        match self.get(field) {
            Some(v) => coerce::float(v)
                .map(Some)
                .map_err(|e| self.coercion(field, e)),
            None => Ok(None),
        }
    }

    /// Lexical boolean. The wire omits these when false, so absence
    /// reads as `false`.
    fn flag(&self, field: &'static str) -> Result<bool, DecodeError> {
        match self.get(field) {
            Some(v) => coerce::boolean(v).map_err(|e| self.coercion(field, e)),
            None => Ok(false),
        }
    }

    fn int_list(&self, field: &'static str) -> Result<Vec<i64>, DecodeError> {
        match self.get(field) {
            Some(v) => coerce::int_list(v).map_err(|e| self.coercion(field, e)),
            None => Ok(Vec::new()),
        }
    }

    /// The dual-typed failure field: a node when something went wrong,
    /// a literal `false` (sometimes string-coded) when nothing did.
    fn error_flag(&self, field: &'static str) -> Result<Option<ErrorInfo>, DecodeError> {
        let v = match self.get(field) {
            Some(v) => v,
            None => return Ok(None),
        };
        match v {
            Value::Bool(false) => Ok(None),
            Value::String(s) if s == "false" => Ok(None),
            other => {
                let node =
                    cardinality::as_optional(Some(other)).map_err(|e| self.shape(field, e))?;
                node.map(ErrorInfo::build).transpose()
            }
        }
    }

    fn opt_node<T: BuildNode>(&self, field: &'static str) -> Result<Option<T>, DecodeError> {
        let node = cardinality::as_optional(self.get(field)).map_err(|e| self.shape(field, e))?;
        node.map(T::build).transpose()
    }

    fn nodes<T: BuildNode>(&self, field: &'static str) -> Result<Vec<T>, DecodeError> {
        let items = cardinality::as_list(self.get(field)).map_err(|e| self.shape(field, e))?;
        items.into_iter().map(T::build).collect()
    }

    fn warnings(&self, field: &'static str) -> Result<Vec<Warning>, DecodeError> {
        let items = cardinality::as_list(self.get(field)).map_err(|e| self.shape(field, e))?;
        items.into_iter().map(build_warning).collect()
    }
}

// ──────────────────────────────────────────────
// Node builders
// ──────────────────────────────────────────────

/// A node type that can be built from one raw object.
pub(crate) trait BuildNode: Sized {
    const KIND: NodeKind;

    fn build(raw: &RawNode) -> Result<Self, DecodeError>;
}

impl BuildNode for QueryResult {
    const KIND: NodeKind = NodeKind::QueryResult;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(QueryResult {
            success: f.flag("success")?,
            error: f.error_flag("error")?,
            numpods: f.opt_int("numpods")?,
            timing: f.opt_float("timing")?,
            id: f.opt_string("id")?,
            host: f.opt_string("host")?,
            recalculate: f.opt_string("recalculate")?,
            languagemsg: f.opt_string("languagemsg")?,
            futuretopic: f.opt_string("futuretopic")?,
            pods: f.nodes("pods")?,
            assumptions: f.opt_node("assumptions")?,
            warnings: f.warnings("warnings")?,
            sources: f.nodes("sources")?,
            didyoumeans: f.nodes("didyoumeans")?,
            tips: f.nodes("tips")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Pod {
    const KIND: NodeKind = NodeKind::Pod;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Pod {
            title: f.string("title")?,
            id: f.string("id")?,
            error: f.error_flag("error")?,
            position: f.opt_float("position")?,
            numsubpods: f.opt_int("numsubpods")?,
            primary: f.flag("primary")?,
            subpods: f.nodes("subpods")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for SubPod {
    const KIND: NodeKind = NodeKind::SubPod;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(SubPod {
            title: f.string("title")?,
            plaintext: f.opt_string("plaintext")?,
            img: f.opt_node("img")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Image {
    const KIND: NodeKind = NodeKind::Image;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Image {
            src: f.string("src")?,
            alt: f.opt_string("alt")?,
            title: f.opt_string("title")?,
            width: f.int("width")?,
            height: f.int("height")?,
            themes: f.int_list("themes")?,
            contenttype: f.opt_string("contenttype")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for ErrorInfo {
    const KIND: NodeKind = NodeKind::ErrorInfo;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(ErrorInfo {
            code: f.int("code")?,
            msg: f.string("msg")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Assumptions {
    const KIND: NodeKind = NodeKind::Assumptions;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Assumptions {
            count: f.opt_int("count")?,
            assumptions: f.nodes("assumption")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Assumption {
    const KIND: NodeKind = NodeKind::Assumption;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Assumption {
            assumption_type: f.string("type")?,
            word: f.opt_string("word")?,
            template: f.opt_string("template")?,
            count: f.opt_int("count")?,
            values: f.nodes("values")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for AssumptionValue {
    const KIND: NodeKind = NodeKind::AssumptionValue;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(AssumptionValue {
            name: f.string("name")?,
            desc: f.opt_string("desc")?,
            input: f.opt_string("input")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Source {
    const KIND: NodeKind = NodeKind::Source;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Source {
            url: f.string("url")?,
            text: f.opt_string("text")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for DidYouMean {
    const KIND: NodeKind = NodeKind::DidYouMean;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(DidYouMean {
            score: f.opt_float("score")?,
            level: f.opt_string("level")?,
            val: f.string("val")?,
            raw: Some(raw.clone()),
        })
    }
}

impl BuildNode for Tip {
    const KIND: NodeKind = NodeKind::Tip;

    fn build(raw: &RawNode) -> Result<Self, DecodeError> {
        let f = Fields::new(Self::KIND, raw);
        Ok(Tip {
            text: f.string("text")?,
            raw: Some(raw.clone()),
        })
    }
}

/// Build one warning, picking the variant structurally since the wire
/// carries no type tag.
fn build_warning(raw: &RawNode) -> Result<Warning, DecodeError> {
    let kind = variant::resolve_warning(raw);
    let f = Fields::new(kind, raw);
    match kind {
        NodeKind::SpellcheckWarning => Ok(Warning::Spellcheck {
            word: f.string("word")?,
            suggestion: f.string("suggestion")?,
            text: f.opt_string("text")?,
            raw: Some(raw.clone()),
        }),
        NodeKind::TranslationWarning => Ok(Warning::Translation {
            phrase: f.string("phrase")?,
            trans: f.string("trans")?,
            lang: f.string("lang")?,
            text: f.opt_string("text")?,
            raw: Some(raw.clone()),
        }),
        _ => Ok(Warning::Generic {
            text: f.opt_string("text")?,
            raw: Some(raw.clone()),
        }),
    }
}
