// thawani_error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Description used when the remote service gives none.
pub const UNKNOWN_ERROR_DESCRIPTION: &str = "Unknown error";

/// Errors returned by every Thawani operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThawaniError {
    /// A credential needed by the active mode is missing, or the configuration
    /// itself could not be read.
    #[error("Thawani configuration error: {0}")]
    Configuration(String),

    /// The remote service rejected the call, answered with a non-2xx status,
    /// returned a body that could not be parsed, or could not be reached.
    #[error("Thawani API error {code}: {description}")]
    Remote { description: String, code: i64 },

    /// An id that cannot be used as a URL path segment (empty, `.` or `..`).
    #[error("Invalid Thawani id '{0}'")]
    InvalidId(String),
}

impl ThawaniError {
    /// Builds the error for a failed call from whatever envelope came back.
    ///
    /// `description` falls back to `"Unknown error"` and `code` to `0` when the
    /// envelope is missing, is not an object, or lacks those fields.
    pub fn from_envelope(envelope: Option<&Value>) -> Self {
        let description = envelope
            .and_then(|e| e.get("description"))
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_DESCRIPTION)
            .to_string();
        let code = envelope
            .and_then(|e| e.get("code"))
            .and_then(Value::as_i64)
            .unwrap_or(0);

        ThawaniError::Remote { description, code }
    }

    /// Business code carried by a remote error, `None` for local errors.
    pub fn code(&self) -> Option<i64> {
        match self {
            ThawaniError::Remote { code, .. } => Some(*code),
            ThawaniError::Configuration(_) | ThawaniError::InvalidId(_) => None,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            ThawaniError::Remote { description, .. } => description,
            ThawaniError::Configuration(message) => message,
            ThawaniError::InvalidId(_) => "Invalid id",
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    description: &'a str,
    code: i64,
}

impl ResponseError for ThawaniError {
    fn status_code(&self) -> StatusCode {
        match self {
            ThawaniError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ThawaniError::Remote { .. } => StatusCode::BAD_GATEWAY,
            ThawaniError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            description: self.description(),
            code: self.code().unwrap_or(0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_fields_are_carried_over() {
        let envelope = json!({ "success": false, "code": 1000, "description": "Invalid" });
        let err = ThawaniError::from_envelope(Some(&envelope));
        assert_eq!(
            err,
            ThawaniError::Remote {
                description: "Invalid".into(),
                code: 1000
            }
        );
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let err = ThawaniError::from_envelope(Some(&json!({ "success": false })));
        assert_eq!(err.description(), "Unknown error");
        assert_eq!(err.code(), Some(0));

        let err = ThawaniError::from_envelope(None);
        assert_eq!(err.description(), "Unknown error");
        assert_eq!(err.code(), Some(0));
    }

    #[test]
    fn non_object_envelope_uses_defaults() {
        let err = ThawaniError::from_envelope(Some(&json!(["not", "an", "envelope"])));
        assert_eq!(err.code(), Some(0));
    }

    #[test]
    fn response_status_follows_variant() {
        let config = ThawaniError::Configuration("missing key".into());
        assert_eq!(config.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(config.code(), None);

        let remote = ThawaniError::from_envelope(None);
        assert_eq!(remote.status_code(), StatusCode::BAD_GATEWAY);

        let invalid = ThawaniError::InvalidId("..".into());
        assert_eq!(invalid.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(invalid.code(), None);
    }
}
