//! Response bodies returned by the controllers.

pub mod car;
pub mod product;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope for successful operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl SuccessResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
        }
    }

    pub fn with_data(message: impl Into<String>, data: Value) -> Self {
        Self {
            data: Some(data),
            ..Self::new(message)
        }
    }
}

/// Envelope for failed operations. `error` carries the underlying cause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_without_data_omits_field() {
        let body = serde_json::to_value(SuccessResponse::new("done")).unwrap();
        assert_eq!(body, json!({"success": true, "message": "done"}));
    }

    #[test]
    fn test_error_envelope() {
        let body = serde_json::to_value(ErrorResponse::new("bad", Some("why".into()))).unwrap();
        assert_eq!(body, json!({"success": false, "message": "bad", "error": "why"}));
        let body = serde_json::to_value(ErrorResponse::new("bad", None)).unwrap();
        assert_eq!(body, json!({"success": false, "message": "bad"}));
    }
}
