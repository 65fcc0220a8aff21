//! Typed result-tree nodes.
//!
//! Each node owns its children, so a decoded response is a plain tree
//! with no cycles and no shared state. Nodes built by `decode` retain
//! the raw payload they came from; nodes constructed in code leave
//! `raw` as `None` and are reconstructed on demand (see `roundtrip`).

use crate::raw::RawNode;
use std::collections::BTreeMap;

// ──────────────────────────────────────────────
// Top level
// ──────────────────────────────────────────────

/// The decoded top level of a full-results response.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    /// Whether the service understood and answered the input.
    pub success: bool,
    /// Service-side failure, such as an invalid app id.
    pub error: Option<ErrorInfo>,
    pub numpods: Option<i64>,
    /// Seconds the service spent producing the result.
    pub timing: Option<f64>,
    pub id: Option<String>,
    /// Server that computed this result.
    pub host: Option<String>,
    /// Set when re-querying with a longer timeout could add pods.
    pub recalculate: Option<String>,
    pub languagemsg: Option<String>,
    pub futuretopic: Option<String>,
    pub pods: Vec<Pod>,
    pub assumptions: Option<Assumptions>,
    pub warnings: Vec<Warning>,
    pub sources: Vec<Source>,
    pub didyoumeans: Vec<DidYouMean>,
    pub tips: Vec<Tip>,
    pub raw: Option<RawNode>,
}

impl QueryResult {
    /// The pods that answer a simple, discrete query: those flagged
    /// primary, plus any titled "Result".
    pub fn results(&self) -> impl Iterator<Item = &Pod> {
        self.pods
            .iter()
            .filter(|pod| pod.primary || pod.title == "Result")
    }

    /// A simplified map of answer text by pod title. Pods without any
    /// plaintext are skipped.
    pub fn details(&self) -> BTreeMap<&str, &str> {
        self.pods
            .iter()
            .filter_map(|pod| pod.text().map(|text| (pod.title.as_str(), text)))
            .collect()
    }
}

// ──────────────────────────────────────────────
// Pods
// ──────────────────────────────────────────────

/// A group of answers contextualizing one aspect of the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Pod {
    pub title: String,
    pub id: String,
    /// Pod-level failure; the rest of the result is still usable.
    pub error: Option<ErrorInfo>,
    /// Display rank. Injected pods can land between integer positions.
    pub position: Option<f64>,
    pub numsubpods: Option<i64>,
    /// Whether this pod holds the direct answer to the query.
    pub primary: bool,
    pub subpods: Vec<SubPod>,
    pub raw: Option<RawNode>,
}

impl Pod {
    /// Plaintext of the first subpod that has any.
    pub fn text(&self) -> Option<&str> {
        self.subpods.iter().find_map(|sub| sub.plaintext.as_deref())
    }

    /// Plaintext of every subpod that has one.
    pub fn texts(&self) -> Vec<&str> {
        self.subpods
            .iter()
            .filter_map(|sub| sub.plaintext.as_deref())
            .collect()
    }
}

/// One specific answer or piece of supporting information.
#[derive(Debug, Clone, PartialEq)]
pub struct SubPod {
    /// Usually empty; the pod title carries the context.
    pub title: String,
    pub plaintext: Option<String>,
    pub img: Option<Image>,
    pub raw: Option<RawNode>,
}

/// A rendered image included with an answer.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub src: String,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub width: i64,
    pub height: i64,
    /// Visual theme ids this rendering is valid for.
    pub themes: Vec<i64>,
    pub contenttype: Option<String>,
    pub raw: Option<RawNode>,
}

/// A service-side failure report, at top level or on a single pod.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorInfo {
    pub code: i64,
    pub msg: String,
    pub raw: Option<RawNode>,
}

// ──────────────────────────────────────────────
// Assumptions
// ──────────────────────────────────────────────

/// The collection wrapper around the assumptions the service made.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumptions {
    pub count: Option<i64>,
    pub assumptions: Vec<Assumption>,
    pub raw: Option<RawNode>,
}

/// One interpretation choice the service made, with the alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Assumption {
    /// Wire field `type`: the assumption category, e.g. "Clash".
    pub assumption_type: String,
    /// The input word the assumption is about.
    pub word: Option<String>,
    /// Description template with `${word}`/`${desc1}` placeholders.
    pub template: Option<String>,
    pub count: Option<i64>,
    /// Possible interpretations; the first is the one in effect.
    pub values: Vec<AssumptionValue>,
    pub raw: Option<RawNode>,
}

impl Assumption {
    /// A human-readable description, rendered from the service template
    /// and cut at the first sentence boundary. `None` when the template
    /// or the active value's description is missing.
    pub fn text(&self) -> Option<String> {
        let template = self.template.as_deref()?;
        let desc = self.values.first().and_then(|v| v.desc.as_deref())?;
        let mut out = template.replace("${desc1}", desc);
        if let Some(word) = self.word.as_deref() {
            out = out.replace("${word}", word);
        }
        match out.find(". ") {
            Some(end) => Some(out[..end + 1].to_string()),
            None => Some(out),
        }
    }
}

/// One selectable interpretation within an assumption.
#[derive(Debug, Clone, PartialEq)]
pub struct AssumptionValue {
    pub name: String,
    pub desc: Option<String>,
    /// Query-string fragment that re-runs the query under this value.
    pub input: Option<String>,
    pub raw: Option<RawNode>,
}

// ──────────────────────────────────────────────
// Warnings
// ──────────────────────────────────────────────

/// One warning attached to the result.
///
/// The wire payload carries no type tag; the concrete variant is chosen
/// structurally (see `variant`). Every variant carries the family's
/// shared display `text`.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// Text-only or unrecognized warning shape.
    Generic {
        text: Option<String>,
        raw: Option<RawNode>,
    },
    /// The input looked misspelled; the service answered the suggestion.
    Spellcheck {
        word: String,
        suggestion: String,
        text: Option<String>,
        raw: Option<RawNode>,
    },
    /// Mismatched delimiters were dropped from the input. Structurally
    /// identical to `Generic`; never produced by structural resolution.
    Delimiters {
        text: Option<String>,
        raw: Option<RawNode>,
    },
    /// The input was answered after translation.
    Translation {
        phrase: String,
        trans: String,
        lang: String,
        text: Option<String>,
        raw: Option<RawNode>,
    },
}

impl Warning {
    /// The display text every warning kind carries.
    pub fn text(&self) -> Option<&str> {
        match self {
            Warning::Generic { text, .. }
            | Warning::Spellcheck { text, .. }
            | Warning::Delimiters { text, .. }
            | Warning::Translation { text, .. } => text.as_deref(),
        }
    }
}

// ──────────────────────────────────────────────
// Trailing collections
// ──────────────────────────────────────────────

/// Attribution for the data behind the result.
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    pub url: String,
    pub text: Option<String>,
    pub raw: Option<RawNode>,
}

/// A close rewrite of an input the service could not answer directly.
#[derive(Debug, Clone, PartialEq)]
pub struct DidYouMean {
    pub score: Option<f64>,
    pub level: Option<String>,
    pub val: String,
    pub raw: Option<RawNode>,
}

/// A usage hint returned for unanswerable input.
#[derive(Debug, Clone, PartialEq)]
pub struct Tip {
    pub text: String,
    pub raw: Option<RawNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subpod(plaintext: Option<&str>) -> SubPod {
        SubPod {
            title: String::new(),
            plaintext: plaintext.map(str::to_string),
            img: None,
            raw: None,
        }
    }

    fn pod(title: &str, primary: bool, texts: &[&str]) -> Pod {
        Pod {
            title: title.to_string(),
            id: title.to_string(),
            error: None,
            position: None,
            numsubpods: Some(texts.len() as i64),
            primary,
            subpods: texts.iter().map(|t| subpod(Some(t))).collect(),
            raw: None,
        }
    }

    #[test]
    fn pod_text_takes_first_plaintext() {
        let mut p = pod("Result", false, &["42", "forty-two"]);
        assert_eq!(p.text(), Some("42"));
        assert_eq!(p.texts(), vec!["42", "forty-two"]);

        p.subpods.insert(0, subpod(None));
        assert_eq!(p.text(), Some("42"));
    }

    #[test]
    fn pod_text_is_none_without_plaintext() {
        let p = Pod {
            subpods: vec![subpod(None)],
            ..pod("Input", false, &[])
        };
        assert_eq!(p.text(), None);
        assert!(p.texts().is_empty());
    }

    #[test]
    fn results_picks_primary_and_result_pods() {
        let result = QueryResult {
            success: true,
            error: None,
            numpods: Some(3),
            timing: None,
            id: None,
            host: None,
            recalculate: None,
            languagemsg: None,
            futuretopic: None,
            pods: vec![
                pod("Input", false, &["6/2"]),
                pod("Result", false, &["3"]),
                pod("Number line", true, &["line"]),
            ],
            assumptions: None,
            warnings: Vec::new(),
            sources: Vec::new(),
            didyoumeans: Vec::new(),
            tips: Vec::new(),
            raw: None,
        };
        let titles: Vec<&str> = result.results().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Result", "Number line"]);

        let details = result.details();
        assert_eq!(details["Input"], "6/2");
        assert_eq!(details["Result"], "3");
    }

    #[test]
    fn assumption_text_renders_template() {
        let assumption = Assumption {
            assumption_type: "Clash".to_string(),
            word: Some("pi".to_string()),
            template: Some(
                "Assuming \"${word}\" is ${desc1}. Use as ${desc2} instead".to_string(),
            ),
            count: Some(2),
            values: vec![AssumptionValue {
                name: "NamedConstant".to_string(),
                desc: Some("a mathematical constant".to_string()),
                input: Some("*C.pi-_*NamedConstant-".to_string()),
                raw: None,
            }],
            raw: None,
        };
        assert_eq!(
            assumption.text().unwrap(),
            "Assuming \"pi\" is a mathematical constant."
        );
    }

    #[test]
    fn assumption_text_without_sentence_break_keeps_everything() {
        let assumption = Assumption {
            assumption_type: "Unit".to_string(),
            word: None,
            template: Some("Assuming ${desc1}".to_string()),
            count: None,
            values: vec![AssumptionValue {
                name: "Meters".to_string(),
                desc: Some("meters".to_string()),
                input: None,
                raw: None,
            }],
            raw: None,
        };
        assert_eq!(assumption.text().unwrap(), "Assuming meters");
    }

    #[test]
    fn assumption_text_requires_template_and_desc() {
        let mut assumption = Assumption {
            assumption_type: "Clash".to_string(),
            word: None,
            template: None,
            count: None,
            values: Vec::new(),
            raw: None,
        };
        assert_eq!(assumption.text(), None);

        assumption.template = Some("Assuming ${desc1}".to_string());
        assert_eq!(assumption.text(), None);
    }

    #[test]
    fn warning_text_is_shared_across_variants() {
        let w = Warning::Spellcheck {
            word: "pittsburg".to_string(),
            suggestion: "pittsburgh".to_string(),
            text: Some("Interpreting as pittsburgh".to_string()),
            raw: None,
        };
        assert_eq!(w.text(), Some("Interpreting as pittsburgh"));

        let g = Warning::Generic {
            text: None,
            raw: None,
        };
        assert_eq!(g.text(), None);
    }
}
