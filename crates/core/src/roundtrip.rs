//! Raw payload recovery.
//!
//! Every decoded node keeps the exact payload it was built from and
//! hands it back verbatim, unconsumed keys included. Nodes constructed
//! in code have nothing retained, so `to_raw` rebuilds a payload under
//! the wire's own conventions: numbers and booleans go back to their
//! string encoding, and a flag that is false stays off the wire.

use serde_json::Value;

use crate::coerce;
use crate::model::{
    Assumption, AssumptionValue, Assumptions, DidYouMean, ErrorInfo, Image, Pod, QueryResult,
    Source, SubPod, Tip, Warning,
};
use crate::raw::RawNode;
use crate::schema::NodeKind;

/// Raw-payload access shared by every node in the result tree.
pub trait ModelNode {
    /// The schema kind this node decodes under.
    fn kind(&self) -> NodeKind;

    /// The retained wire payload, if this node came from `decode`.
    fn raw(&self) -> Option<&RawNode>;

    /// The retained payload verbatim, or a reconstruction of it.
    fn to_raw(&self) -> RawNode;
}

// ──────────────────────────────────────────────
// Reconstruction helpers
// ──────────────────────────────────────────────

fn put_str(out: &mut RawNode, key: &str, value: &str) {
    out.insert(key.to_owned(), Value::String(value.to_owned()));
}

fn put_opt_str(out: &mut RawNode, key: &str, value: &Option<String>) {
    if let Some(v) = value {
        put_str(out, key, v);
    }
}

fn put_int(out: &mut RawNode, key: &str, value: i64) {
    out.insert(key.to_owned(), coerce::wire_int(value));
}

fn put_opt_int(out: &mut RawNode, key: &str, value: Option<i64>) {
    if let Some(v) = value {
        put_int(out, key, v);
    }
}

fn put_opt_float(out: &mut RawNode, key: &str, value: Option<f64>) {
    if let Some(v) = value {
        out.insert(key.to_owned(), coerce::wire_float(v));
    }
}

/// Flags ride the wire only when set.
fn put_flag(out: &mut RawNode, key: &str, value: bool) {
    if value {
        out.insert(key.to_owned(), coerce::wire_bool(value));
    }
}

/// The failure field is always present, with `false` standing in when
/// nothing went wrong.
fn put_error(out: &mut RawNode, key: &str, value: &Option<ErrorInfo>) {
    let v = match value {
        Some(info) => Value::Object(info.to_raw()),
        None => Value::Bool(false),
    };
    out.insert(key.to_owned(), v);
}

fn put_node<T: ModelNode>(out: &mut RawNode, key: &str, value: &Option<T>) {
    if let Some(node) = value {
        out.insert(key.to_owned(), Value::Object(node.to_raw()));
    }
}

fn put_nodes<T: ModelNode>(out: &mut RawNode, key: &str, items: &[T]) {
    if items.is_empty() {
        return;
    }
    let list: Vec<Value> = items.iter().map(|n| Value::Object(n.to_raw())).collect();
    out.insert(key.to_owned(), Value::Array(list));
}

// ──────────────────────────────────────────────
// Node impls
// ──────────────────────────────────────────────

impl ModelNode for QueryResult {
    fn kind(&self) -> NodeKind {
        NodeKind::QueryResult
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_flag(&mut out, "success", self.success);
        put_error(&mut out, "error", &self.error);
        put_opt_int(&mut out, "numpods", self.numpods);
        put_opt_float(&mut out, "timing", self.timing);
        put_opt_str(&mut out, "id", &self.id);
        put_opt_str(&mut out, "host", &self.host);
        put_opt_str(&mut out, "recalculate", &self.recalculate);
        put_opt_str(&mut out, "languagemsg", &self.languagemsg);
        put_opt_str(&mut out, "futuretopic", &self.futuretopic);
        put_nodes(&mut out, "pods", &self.pods);
        put_node(&mut out, "assumptions", &self.assumptions);
        put_nodes(&mut out, "warnings", &self.warnings);
        put_nodes(&mut out, "sources", &self.sources);
        put_nodes(&mut out, "didyoumeans", &self.didyoumeans);
        put_nodes(&mut out, "tips", &self.tips);
        out
    }
}

impl ModelNode for Pod {
    fn kind(&self) -> NodeKind {
        NodeKind::Pod
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "title", &self.title);
        put_str(&mut out, "id", &self.id);
        put_error(&mut out, "error", &self.error);
        put_opt_float(&mut out, "position", self.position);
        put_opt_int(&mut out, "numsubpods", self.numsubpods);
        put_flag(&mut out, "primary", self.primary);
        put_nodes(&mut out, "subpods", &self.subpods);
        out
    }
}

impl ModelNode for SubPod {
    fn kind(&self) -> NodeKind {
        NodeKind::SubPod
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "title", &self.title);
        put_opt_str(&mut out, "plaintext", &self.plaintext);
        put_node(&mut out, "img", &self.img);
        out
    }
}

impl ModelNode for Image {
    fn kind(&self) -> NodeKind {
        NodeKind::Image
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "src", &self.src);
        put_opt_str(&mut out, "alt", &self.alt);
        put_opt_str(&mut out, "title", &self.title);
        put_int(&mut out, "width", self.width);
        put_int(&mut out, "height", self.height);
        if !self.themes.is_empty() {
            out.insert("themes".to_owned(), coerce::wire_int_list(&self.themes));
        }
        put_opt_str(&mut out, "contenttype", &self.contenttype);
        out
    }
}

impl ModelNode for ErrorInfo {
    fn kind(&self) -> NodeKind {
        NodeKind::ErrorInfo
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_int(&mut out, "code", self.code);
        put_str(&mut out, "msg", &self.msg);
        out
    }
}

impl ModelNode for Assumptions {
    fn kind(&self) -> NodeKind {
        NodeKind::Assumptions
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_opt_int(&mut out, "count", self.count);
        put_nodes(&mut out, "assumption", &self.assumptions);
        out
    }
}

impl ModelNode for Assumption {
    fn kind(&self) -> NodeKind {
        NodeKind::Assumption
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "type", &self.assumption_type);
        put_opt_str(&mut out, "word", &self.word);
        put_opt_str(&mut out, "template", &self.template);
        put_opt_int(&mut out, "count", self.count);
        put_nodes(&mut out, "values", &self.values);
        out
    }
}

impl ModelNode for AssumptionValue {
    fn kind(&self) -> NodeKind {
        NodeKind::AssumptionValue
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "name", &self.name);
        put_opt_str(&mut out, "desc", &self.desc);
        put_opt_str(&mut out, "input", &self.input);
        out
    }
}

impl ModelNode for Warning {
    fn kind(&self) -> NodeKind {
        match self {
            Warning::Generic { .. } => NodeKind::Warning,
            Warning::Spellcheck { .. } => NodeKind::SpellcheckWarning,
            Warning::Delimiters { .. } => NodeKind::DelimitersWarning,
            Warning::Translation { .. } => NodeKind::TranslationWarning,
        }
    }

    fn raw(&self) -> Option<&RawNode> {
        match self {
            Warning::Generic { raw, .. }
            | Warning::Spellcheck { raw, .. }
            | Warning::Delimiters { raw, .. }
            | Warning::Translation { raw, .. } => raw.as_ref(),
        }
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = self.raw() {
            return raw.clone();
        }
        let mut out = RawNode::new();
        match self {
            Warning::Generic { text, .. } | Warning::Delimiters { text, .. } => {
                put_opt_str(&mut out, "text", text);
            }
            Warning::Spellcheck {
                word,
                suggestion,
                text,
                ..
            } => {
                put_str(&mut out, "word", word);
                put_str(&mut out, "suggestion", suggestion);
                put_opt_str(&mut out, "text", text);
            }
            Warning::Translation {
                phrase,
                trans,
                lang,
                text,
                ..
            } => {
                put_str(&mut out, "phrase", phrase);
                put_str(&mut out, "trans", trans);
                put_str(&mut out, "lang", lang);
                put_opt_str(&mut out, "text", text);
            }
        }
        out
    }
}

impl ModelNode for Source {
    fn kind(&self) -> NodeKind {
        NodeKind::Source
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "url", &self.url);
        put_opt_str(&mut out, "text", &self.text);
        out
    }
}

impl ModelNode for DidYouMean {
    fn kind(&self) -> NodeKind {
        NodeKind::DidYouMean
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_opt_float(&mut out, "score", self.score);
        put_opt_str(&mut out, "level", &self.level);
        put_str(&mut out, "val", &self.val);
        out
    }
}

impl ModelNode for Tip {
    fn kind(&self) -> NodeKind {
        NodeKind::Tip
    }

    fn raw(&self) -> Option<&RawNode> {
        self.raw.as_ref()
    }

    fn to_raw(&self) -> RawNode {
        if let Some(raw) = &self.raw {
            return raw.clone();
        }
        let mut out = RawNode::new();
        put_str(&mut out, "text", &self.text);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode, BuildNode};
    use serde_json::json;

    fn node(v: Value) -> RawNode {
        match v {
            Value::Object(m) => m,
            other => panic!("test payload must be an object, got {}", other),
        }
    }

    #[test]
    fn decoded_nodes_return_their_payload_verbatim() {
        // The payload carries keys no field maps to; they must survive.
        let raw = node(json!({
            "success": "true",
            "datatypes": "Math",
            "parsetimedout": "false",
            "pods": { "title": "Result", "id": "Result", "unknownkey": "kept" },
        }));
        let result = decode(&raw).unwrap();
        assert_eq!(result.to_raw(), raw);

        let pod_raw = result.pods[0].to_raw();
        assert_eq!(pod_raw.get("unknownkey"), Some(&json!("kept")));
    }

    #[test]
    fn reconstruction_uses_wire_conventions() {
        let tip = Tip {
            text: "Check your spelling".to_string(),
            raw: None,
        };
        let result = QueryResult {
            success: true,
            error: None,
            numpods: Some(2),
            timing: Some(0.5),
            id: None,
            host: None,
            recalculate: None,
            languagemsg: None,
            futuretopic: None,
            pods: Vec::new(),
            assumptions: None,
            warnings: Vec::new(),
            sources: Vec::new(),
            didyoumeans: Vec::new(),
            tips: vec![tip],
            raw: None,
        };
        let raw = result.to_raw();
        assert_eq!(raw.get("success"), Some(&json!("true")));
        assert_eq!(raw.get("error"), Some(&json!(false)));
        assert_eq!(raw.get("numpods"), Some(&json!("2")));
        assert_eq!(raw.get("timing"), Some(&json!("0.5")));
        assert_eq!(raw.get("tips"), Some(&json!([{ "text": "Check your spelling" }])));
        // Unset fields stay off the wire entirely.
        assert!(!raw.contains_key("id"));
        assert!(!raw.contains_key("pods"));
    }

    #[test]
    fn false_flags_are_omitted() {
        let pod = Pod {
            title: "Input".to_string(),
            id: "Input".to_string(),
            error: None,
            position: Some(1.0),
            numsubpods: Some(0),
            primary: false,
            subpods: Vec::new(),
            raw: None,
        };
        let raw = pod.to_raw();
        assert!(!raw.contains_key("primary"));
        assert_eq!(raw.get("error"), Some(&json!(false)));
        assert_eq!(raw.get("position"), Some(&json!("1")));
    }

    #[test]
    fn reconstructed_payload_decodes_back() {
        let pod = Pod {
            title: "Result".to_string(),
            id: "Result".to_string(),
            error: None,
            position: Some(1.0),
            numsubpods: Some(1),
            primary: true,
            subpods: vec![SubPod {
                title: String::new(),
                plaintext: Some("42".to_string()),
                img: None,
                raw: None,
            }],
            raw: None,
        };
        let decoded = Pod::build(&pod.to_raw()).unwrap();
        assert_eq!(decoded.title, pod.title);
        assert_eq!(decoded.position, pod.position);
        assert!(decoded.primary);
        assert_eq!(decoded.subpods[0].plaintext.as_deref(), Some("42"));
    }

    #[test]
    fn image_themes_rejoin_as_comma_string() {
        let img = Image {
            src: "https://example.org/img.png".to_string(),
            alt: None,
            title: None,
            width: 300,
            height: 185,
            themes: vec![1, 2, 5],
            contenttype: None,
            raw: None,
        };
        let raw = img.to_raw();
        assert_eq!(raw.get("width"), Some(&json!("300")));
        assert_eq!(raw.get("themes"), Some(&json!("1,2,5")));
    }

    #[test]
    fn assumption_type_lands_under_its_wire_name() {
        let assumption = Assumption {
            assumption_type: "Clash".to_string(),
            word: Some("pi".to_string()),
            template: None,
            count: None,
            values: Vec::new(),
            raw: None,
        };
        let raw = assumption.to_raw();
        assert_eq!(raw.get("type"), Some(&json!("Clash")));
        assert!(!raw.contains_key("assumption_type"));
    }

    #[test]
    fn warning_kinds_match_their_variants() {
        let spellcheck = Warning::Spellcheck {
            word: "pittsburg".to_string(),
            suggestion: "pittsburgh".to_string(),
            text: None,
            raw: None,
        };
        assert_eq!(spellcheck.kind(), NodeKind::SpellcheckWarning);
        let raw = spellcheck.to_raw();
        assert_eq!(raw.get("word"), Some(&json!("pittsburg")));

        let delimiters = Warning::Delimiters {
            text: Some("mismatched parentheses".to_string()),
            raw: None,
        };
        assert_eq!(delimiters.kind(), NodeKind::DelimitersWarning);
        assert_eq!(delimiters.to_raw().get("text"), Some(&json!("mismatched parentheses")));
    }
}
