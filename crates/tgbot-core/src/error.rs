use thiserror::Error;

use crate::envelope::ResponseParameters;

/// Any error an executor passes through.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Failure to map a wire value onto a typed value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A required key was absent from the wire map.
    #[error("missing field `{0}`")]
    MissingField(String),

    /// A polymorphic discriminant was absent or not recognized.
    /// An absent discriminant is reported as an empty string.
    #[error("unknown variant `{0}`")]
    UnknownVariant(String),

    /// Any other shape or type mismatch.
    #[error("invalid value: {0}")]
    Invalid(String),
}

impl DecodeError {
    /// Classify a serde message into the decode taxonomy.
    ///
    /// serde reports missing keys and unknown tags with stable message
    /// prefixes, regardless of which deserializer raised them.
    fn classify(message: &str) -> Self {
        if let Some(key) = backticked(message, "missing field `") {
            return Self::MissingField(key.to_string());
        }
        if let Some(tag) = backticked(message, "unknown variant `") {
            return Self::UnknownVariant(tag.to_string());
        }
        Self::Invalid(message.to_string())
    }
}

fn backticked<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = message.strip_prefix(prefix)?;
    rest.find('`').map(|end| &rest[..end])
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::classify(&err.to_string())
    }
}

/// Failure to project a typed value onto the wire.
#[derive(Debug, Error)]
#[error("encode failed: {0}")]
pub struct EncodeError(#[from] pub serde_json::Error);

/// Failure of a method round trip.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// The response envelope carried `ok: false`.
    #[error("telegram rejected request ({code}): {description}")]
    RemoteRejected {
        code: i64,
        description: String,
        parameters: Option<ResponseParameters>,
    },

    /// Transport-level failure. The executor's own error is kept as the
    /// source.
    #[error("transport error: {context}: {source}")]
    Transport {
        context: String,
        #[source]
        source: BoxError,
    },

    /// The raw result did not match the declared result type.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// The method could not be projected to a payload.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl ExecutionError {
    pub fn transport(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            context: context.into(),
            source: source.into(),
        }
    }
}
