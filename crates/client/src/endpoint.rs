//! The endpoints the service exposes.

/// One service endpoint. The full-results endpoint lives under `v2`;
/// everything else is a `v1` single-purpose API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// Full result tree, the only endpoint with structured output.
    Query,
    /// One rendered image answering the whole query.
    Simple,
    /// Short plain-text answer.
    ShortAnswer,
    /// Answer text phrased for reading aloud.
    Spoken,
    /// One turn of a multi-turn dialogue.
    Conversational,
}

impl Endpoint {
    /// Version prefix in the URL path.
    pub fn version(&self) -> &'static str {
        match self {
            Endpoint::Query => "v2",
            _ => "v1",
        }
    }

    /// Path component after the version prefix.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Query => "query",
            Endpoint::Simple => "simple",
            Endpoint::ShortAnswer => "result",
            Endpoint::Spoken => "spoken",
            Endpoint::Conversational => "conversation.jsp",
        }
    }

    /// Name of the parameter carrying the user's input. The `v1` APIs
    /// shortened it.
    pub fn input_param(&self) -> &'static str {
        match self {
            Endpoint::Query => "input",
            _ => "i",
        }
    }
}
