//! Top-level Bot API response envelope.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, ExecutionError};

/// Describes why a request was unsuccessful.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

/// `{ "ok": bool, "result": any, "description": string?, "error_code": int? }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<ResponseParameters>,
}

impl Envelope {
    /// Parse an envelope from a response body.
    pub fn parse(body: &str) -> Result<Self, ExecutionError> {
        serde_json::from_str(body)
            .map_err(|e| ExecutionError::Decode(DecodeError::from(e)))
    }

    /// Unwrap the raw result body, or surface the remote rejection.
    pub fn into_result(self) -> Result<Option<Value>, ExecutionError> {
        if self.ok {
            return Ok(self.result);
        }
        Err(ExecutionError::RemoteRejected {
            code: self.error_code.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            parameters: self.parameters,
        })
    }
}
