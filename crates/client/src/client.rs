//! HTTP client for the answer-engine APIs.
//!
//! Provides [`Client`] which encapsulates all HTTP interactions with
//! the service. Endpoint paths and versions live in [`Endpoint`];
//! caller-tunable options live in [`params`](crate::params).

use serde::Deserialize;

use podium_core::{decode, QueryResult};

use crate::endpoint::Endpoint;
use crate::error::ClientError;
use crate::params::{ConversationalParams, QueryParams};

/// Production service root used when no other base URL is supplied.
pub const DEFAULT_BASE_URL: &str = "https://api.wolframalpha.com";

/// Parameters the client sets itself. Callers supplying one of these
/// through `QueryParams::extra` get [`ClientError::ReservedParameter`].
const RESERVED: &[&str] = &["appid", "input", "output"];

// ─── Response types ───────────────────────────────────────────────────────────

/// One turn of the conversational endpoint.
///
/// A successful turn carries `result` plus the handles the next turn
/// must echo back; a failed turn carries `error` alone.
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationalResult {
    /// Answer text, phrased for dialogue.
    pub result: Option<String>,
    /// Dialogue token to pass as `conversation_id` on the next turn.
    #[serde(rename = "conversationID")]
    pub conversation_id: Option<String>,
    /// Host the next turn must be sent to.
    pub host: Option<String>,
    /// Follow-up marker; present only for some answers.
    pub s: Option<i64>,
    /// Set instead of `result` when the service could not answer.
    pub error: Option<String>,
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// Client for the computational answer service.
///
/// Holds only the application id and base URL; each request creates
/// its own connection, so one client can serve any number of calls.
pub struct Client {
    app_id: String,
    base_url: String,
}

impl Client {
    /// Create a client against the production service.
    pub fn new(app_id: &str) -> Self {
        Self::with_base_url(app_id, DEFAULT_BASE_URL)
    }

    /// Create a client against a different service root, e.g. a stub
    /// server in tests.
    pub fn with_base_url(app_id: &str, base_url: &str) -> Self {
        Client {
            app_id: app_id.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Run a full-results query with default options.
    ///
    /// GET `/v2/query?appid=..&input=..&format=plaintext&output=json`
    pub fn query(&self, input: &str) -> Result<QueryResult, ClientError> {
        self.query_with(input, &QueryParams::default())
    }

    /// Run a full-results query with caller-supplied options.
    ///
    /// Always requests JSON output; requests plaintext format unless
    /// the options name formats of their own.
    pub fn query_with(
        &self,
        input: &str,
        params: &QueryParams,
    ) -> Result<QueryResult, ClientError> {
        for (name, _) in &params.extra {
            if RESERVED.contains(&name.as_str()) {
                return Err(ClientError::ReservedParameter { name: name.clone() });
            }
        }

        let mut pairs = params.pairs();
        if !pairs.iter().any(|(key, _)| key == "format") {
            pairs.push(("format".to_owned(), "plaintext".to_owned()));
        }
        pairs.push(("output".to_owned(), "json".to_owned()));

        let url = self.url_for(&self.base_url, Endpoint::Query, input, &pairs)?;

        let agent = ureq::Agent::new_with_defaults();
        let response = agent.get(&url).call().map_err(ClientError::Http)?;
        let envelope = response
            .into_body()
            .read_json::<serde_json::Value>()
            .map_err(ClientError::Http)?;

        let raw = envelope
            .get("queryresult")
            .and_then(|v| v.as_object())
            .ok_or(ClientError::MissingEnvelope)?;
        decode(raw).map_err(ClientError::Decode)
    }

    /// Fetch the short plain-text answer for a simple query.
    ///
    /// GET `/v1/result?appid=..&i=..`
    pub fn short_answer(&self, input: &str) -> Result<String, ClientError> {
        self.text_endpoint(Endpoint::ShortAnswer, input)
    }

    /// Fetch answer text phrased for reading aloud.
    ///
    /// GET `/v1/spoken?appid=..&i=..`
    pub fn spoken(&self, input: &str) -> Result<String, ClientError> {
        self.text_endpoint(Endpoint::Spoken, input)
    }

    /// Fetch one rendered image answering the whole query.
    ///
    /// GET `/v1/simple?appid=..&i=..`
    pub fn simple(&self, input: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.url_for(&self.base_url, Endpoint::Simple, input, &[])?;

        let agent = ureq::Agent::new_with_defaults();
        let response = agent.get(&url).call().map_err(ClientError::Http)?;
        response
            .into_body()
            .read_to_vec()
            .map_err(ClientError::Http)
    }

    /// Run one turn of a multi-turn dialogue.
    ///
    /// GET `/v1/conversation.jsp?appid=..&i=..`
    ///
    /// Follow-up turns must carry the id, `s` marker, and host the
    /// previous turn returned; with a host set, the request is routed
    /// to that host instead of the client's base URL.
    pub fn conversational(
        &self,
        input: &str,
        params: &ConversationalParams,
    ) -> Result<ConversationalResult, ClientError> {
        let base = match &params.host {
            Some(host) => format!("https://{}", host.trim_end_matches('/')),
            None => self.base_url.clone(),
        };
        let url = self.url_for(&base, Endpoint::Conversational, input, &params.pairs())?;

        let agent = ureq::Agent::new_with_defaults();
        let response = agent.get(&url).call().map_err(ClientError::Http)?;
        response
            .into_body()
            .read_json::<ConversationalResult>()
            .map_err(ClientError::Http)
    }

    fn text_endpoint(&self, endpoint: Endpoint, input: &str) -> Result<String, ClientError> {
        let url = self.url_for(&self.base_url, endpoint, input, &[])?;

        let agent = ureq::Agent::new_with_defaults();
        let response = agent.get(&url).call().map_err(ClientError::Http)?;
        let bytes = response
            .into_body()
            .read_to_vec()
            .map_err(ClientError::Http)?;
        String::from_utf8(bytes).map_err(ClientError::BodyEncoding)
    }

    /// Build a request URL: `{base}/{version}/{path}?appid=..&{input}=..`
    /// followed by `pairs` in order.
    fn url_for(
        &self,
        base_url: &str,
        endpoint: Endpoint,
        input: &str,
        pairs: &[(String, String)],
    ) -> Result<String, ClientError> {
        if self.app_id.is_empty() {
            return Err(ClientError::EmptyAppId);
        }
        let mut url = format!(
            "{}/{}/{}?appid={}&{}={}",
            base_url,
            endpoint.version(),
            endpoint.path(),
            urlencoded(&self.app_id),
            endpoint.input_param(),
            urlencoded(input),
        );
        for (key, value) in pairs {
            url.push_str(&format!("&{}={}", urlencoded(key), urlencoded(value)));
        }
        Ok(url)
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Percent-encode a query string value (spaces → %20, etc.).
///
/// Only encodes characters that must be encoded in a query parameter value.
fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(ch),
            ' ' => out.push_str("%20"),
            _ => {
                for byte in ch.to_string().as_bytes() {
                    out.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    out
}
