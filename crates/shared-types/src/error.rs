use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Error code carried on a 401 body when the access token has expired.
/// The transport helper keys its single refresh-and-retry on this value.
pub const CODE_JWT_EXPIRED: &str = "JWT_EXPIRED";

/// Categorization of API errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    ValidationError,
    Conflict,
    Unauthorized,
    Forbidden,
    RateLimited,
    InternalError,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::ValidationError => write!(f, "ValidationError"),
            AppErrorKind::Conflict => write!(f, "Conflict"),
            AppErrorKind::Unauthorized => write!(f, "Unauthorized"),
            AppErrorKind::Forbidden => write!(f, "Forbidden"),
            AppErrorKind::RateLimited => write!(f, "RateLimited"),
            AppErrorKind::InternalError => write!(f, "InternalError"),
        }
    }
}

/// Structured error body used by the API and parsed by the client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// Machine-readable discriminator, e.g. `JWT_EXPIRED` or `NO_PASSWORD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::NotFound, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::BadRequest, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            kind: AppErrorKind::ValidationError,
            message: message.into(),
            code: None,
            field_errors,
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::Conflict, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::Unauthorized, message)
    }

    /// A 401 whose body tells the client its access token expired.
    pub fn token_expired() -> Self {
        Self {
            code: Some(CODE_JWT_EXPIRED.to_string()),
            ..Self::plain(AppErrorKind::Unauthorized, "Access token expired")
        }
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::Forbidden, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::plain(AppErrorKind::InternalError, message)
    }

    fn plain(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            code: None,
            field_errors: HashMap::new(),
        }
    }

    /// True when this error signals an expired access token.
    pub fn is_token_expired(&self) -> bool {
        self.kind == AppErrorKind::Unauthorized
            && self.code.as_deref() == Some(CODE_JWT_EXPIRED)
    }

    /// Parse an AppError out of a response body.
    ///
    /// Accepts either a raw JSON object or a message with the object embedded
    /// between the first `{` and last `}` (some proxies wrap error bodies).
    pub fn from_body(body: &str) -> Option<Self> {
        if let Ok(err) = serde_json::from_str::<Self>(body) {
            return Some(err);
        }
        let start = body.find('{')?;
        let end = body.rfind('}')?;
        if end > start {
            serde_json::from_str(&body[start..=end]).ok()
        } else {
            None
        }
    }

    /// Extract per-field validation errors from a response body.
    /// Returns an empty map if parsing fails or no field errors exist.
    pub fn parse_field_errors(body: &str) -> HashMap<String, String> {
        Self::from_body(body).map(|e| e.field_errors).unwrap_or_default()
    }

    /// Extract a user-friendly message from a response body, with a generic
    /// fallback when the body is unparseable.
    pub fn friendly_message(body: &str) -> String {
        match Self::from_body(body) {
            Some(err) => err.message,
            None => "Something went wrong. Please try again.".to_string(),
        }
    }

    /// HTTP status this error maps to.
    pub fn http_status(&self) -> u16 {
        match self.kind {
            AppErrorKind::NotFound => 404,
            AppErrorKind::BadRequest => 400,
            AppErrorKind::ValidationError => 422,
            AppErrorKind::Conflict => 409,
            AppErrorKind::Unauthorized => 401,
            AppErrorKind::Forbidden => 403,
            AppErrorKind::RateLimited => 429,
            AppErrorKind::InternalError => 500,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(feature = "validation")]
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
