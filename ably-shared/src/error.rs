use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Error body returned by the REST API.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ErrorInfo {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub code: u32,
    #[serde(default)]
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
}

impl ErrorInfo {
    pub fn new(message: impl Into<String>, status_code: u16, code: u32) -> Self {
        Self {
            message: message.into(),
            code,
            status_code,
            href: None,
        }
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (statusCode = {}, code = {})",
            self.message, self.status_code, self.code
        )
    }
}

/// Envelope the API wraps errors in: `{"error": {...}}`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ErrorResponse {
    pub error: ErrorInfo,
}
