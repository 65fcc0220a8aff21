/// All errors that can be returned by the query client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The client was constructed with an empty application id.
    #[error("application id is empty")]
    EmptyAppId,

    /// A caller-supplied parameter collides with one the client sets
    /// itself (`appid`, the input parameter, `output`).
    #[error("parameter '{name}' is set by the client and cannot be overridden")]
    ReservedParameter { name: String },

    /// Transport failure or non-success HTTP status.
    #[error("request failed: {0}")]
    Http(ureq::Error),

    /// A text endpoint returned a body that is not valid UTF-8.
    #[error("response body is not valid utf-8: {0}")]
    BodyEncoding(std::string::FromUtf8Error),

    /// The full-results response carried no `queryresult` object.
    #[error("response has no result envelope")]
    MissingEnvelope,

    /// The result payload was malformed.
    #[error("could not decode result: {0}")]
    Decode(podium_core::DecodeError),
}
