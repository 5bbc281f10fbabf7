//! # Transpose Request Boundary
//!
//! JSON request/response types for a transpose endpoint. The request carries annotated
//! text and an offset limited to one octave either way:
//!
//! ```json
//! { "text": "[G]Amazing [C]grace", "semitones": 2 }
//! ```
//!
//! and the response reports either the transposed text or an error message:
//!
//! ```json
//! { "success": true, "text": "[A]Amazing [D]grace" }
//! { "success": false, "error": "Semitones must be between -12 and 12, got 13" }
//! ```
//!
//! [`handle_transpose`] never fails; every problem becomes an error response.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ChordKitError;
use crate::text::transpose_text;

/// Largest offset accepted at the request boundary, in either direction.
pub const MAX_SEMITONES: i32 = 12;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransposeRequest {
    pub text: String,
    pub semitones: i32,
}

impl TransposeRequest {
    pub fn from_json(body: &str) -> Result<Self, ChordKitError> {
        Ok(serde_json::from_str(body)?)
    }

    /// Check the offset is within one octave.
    pub fn validate(&self) -> Result<(), ChordKitError> {
        if !(-MAX_SEMITONES..=MAX_SEMITONES).contains(&self.semitones) {
            return Err(ChordKitError::SemitonesOutOfRange(self.semitones));
        }
        Ok(())
    }

    /// Validate and transpose.
    pub fn execute(&self) -> Result<String, ChordKitError> {
        self.validate()?;
        Ok(transpose_text(&self.text, self.semitones))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransposeResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TransposeResponse {
    pub fn ok(text: String) -> Self {
        TransposeResponse {
            success: true,
            text: Some(text),
            error: None,
        }
    }

    pub fn err(error: &ChordKitError) -> Self {
        TransposeResponse {
            success: false,
            text: None,
            error: Some(error.to_string()),
        }
    }

    pub fn to_json(&self) -> String {
        // A struct of a bool and two optional strings always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl From<Result<String, ChordKitError>> for TransposeResponse {
    fn from(result: Result<String, ChordKitError>) -> Self {
        match result {
            Ok(text) => TransposeResponse::ok(text),
            Err(e) => {
                warn!(error = %e, "transpose request rejected");
                TransposeResponse::err(&e)
            }
        }
    }
}

/// Handle a JSON transpose request body.
pub fn handle_transpose(body: &str) -> TransposeResponse {
    TransposeRequest::from_json(body)
        .and_then(|request| request.execute())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_transpose_success() {
        let response = handle_transpose(r#"{"text": "[G]Amazing [C]grace", "semitones": 2}"#);
        assert_eq!(response, TransposeResponse::ok("[A]Amazing [D]grace".to_string()));
        assert_eq!(
            response.to_json(),
            r#"{"success":true,"text":"[A]Amazing [D]grace"}"#
        );
    }

    #[test]
    fn test_handle_transpose_bounds() {
        assert!(handle_transpose(r#"{"text": "[C]", "semitones": 12}"#).success);
        assert!(handle_transpose(r#"{"text": "[C]", "semitones": -12}"#).success);

        let response = handle_transpose(r#"{"text": "[C]", "semitones": 13}"#);
        assert!(!response.success);
        assert_eq!(
            response.error.as_deref(),
            Some("Semitones must be between -12 and 12, got 13")
        );
    }

    #[test]
    fn test_handle_transpose_bad_json() {
        for body in [
            "",
            "not json",
            r#"{"semitones": 2}"#,
            r#"{"text": 5, "semitones": 2}"#,
            r#"{"text": "[C]", "semitones": "2"}"#,
            r#"{"text": "[C]", "semitones": 2.5}"#,
        ] {
            let response = handle_transpose(body);
            assert!(!response.success, "{:?} should be rejected", body);
            assert!(response.error.unwrap().starts_with("Invalid JSON"));
        }
    }

    #[test]
    fn test_error_response_json() {
        let response = TransposeResponse::err(&ChordKitError::SemitonesOutOfRange(-20));
        assert_eq!(
            response.to_json(),
            r#"{"success":false,"error":"Semitones must be between -12 and 12, got -20"}"#
        );
    }
}
