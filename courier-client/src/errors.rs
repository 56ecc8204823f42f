//! Error types for courier-client.

use std::fmt;

use courier_types::ValidationErrors;
use courier_wire::EncodeError;
use serde::Deserialize;

// ─── ApiError ─────────────────────────────────────────────────────────────────

/// Optional machine-readable hints attached to an error envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ResponseParameters {
    /// The group migrated to a supergroup with this id.
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds to wait before repeating the request (rate limiting).
    pub retry_after: Option<i64>,
}

/// An error reported by the Bot API itself: the request reached the server
/// and was rejected with `ok = false`.
///
/// # Example
/// A flooded bot receives
/// `{"ok":false,"error_code":429,"description":"Too Many Requests: retry after 14","parameters":{"retry_after":14}}`
/// → `ApiError { code: 429, …, parameters.retry_after: Some(14) }`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    /// HTTP-like status code from the envelope's `error_code`.
    pub code: i32,
    /// Human-readable description, e.g. `"Bad Request: chat not found"`.
    pub description: String,
    pub parameters: Option<ResponseParameters>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API {}: {}", self.code, self.description)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Match on the description, with optional wildcard prefix/suffix `'*'`.
    ///
    /// # Examples
    /// - `err.is("Bad Request: chat not found")` — exact match
    /// - `err.is("Bad Request:*")` — starts-with match
    /// - `err.is("*chat not found")` — ends-with match
    pub fn is(&self, pattern: &str) -> bool {
        if let Some(prefix) = pattern.strip_suffix('*') {
            self.description.starts_with(prefix)
        } else if let Some(suffix) = pattern.strip_prefix('*') {
            self.description.ends_with(suffix)
        } else {
            self.description == pattern
        }
    }

    /// Returns the advised wait in seconds, if this is a rate-limit error.
    pub fn retry_after_seconds(&self) -> Option<u64> {
        if self.code == 429 {
            self.parameters
                .as_ref()
                .and_then(|p| p.retry_after)
                .and_then(|secs| u64::try_from(secs).ok())
        } else {
            None
        }
    }
}

// ─── InvocationError ──────────────────────────────────────────────────────────

/// The error type returned from any [`Client`](crate::Client) call.
///
/// The first two variants are local and mean no request was sent at all.
#[derive(Debug)]
pub enum InvocationError {
    /// The request failed its own validation rules.
    Validation(ValidationErrors),
    /// The request could not be encoded into a payload.
    Encode(EncodeError),
    /// Network-level failure: connect, TLS, timeout, or a broken body stream.
    Http(reqwest::Error),
    /// The server answered with `ok = false`.
    Api(ApiError),
    /// The response body was not a well-formed envelope.
    Deserialize(String),
}

impl fmt::Display for InvocationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(e)  => write!(f, "validation failed: {e}"),
            Self::Encode(e)      => write!(f, "encode error: {e}"),
            Self::Http(e)        => write!(f, "HTTP error: {e}"),
            Self::Api(e)         => write!(f, "{e}"),
            Self::Deserialize(s) => write!(f, "deserialize error: {s}"),
        }
    }
}

impl std::error::Error for InvocationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(e) => Some(e),
            Self::Encode(e)     => Some(e),
            Self::Http(e)       => Some(e),
            Self::Api(e)        => Some(e),
            Self::Deserialize(_) => None,
        }
    }
}

impl From<ValidationErrors> for InvocationError {
    fn from(e: ValidationErrors) -> Self { Self::Validation(e) }
}

impl From<EncodeError> for InvocationError {
    fn from(e: EncodeError) -> Self { Self::Encode(e) }
}

impl From<reqwest::Error> for InvocationError {
    fn from(e: reqwest::Error) -> Self { Self::Http(e) }
}

impl InvocationError {
    /// Returns `true` if this is an API error whose description matches
    /// `pattern` (supports `'*'` wildcards).
    pub fn is(&self, pattern: &str) -> bool {
        match self {
            Self::Api(e) => e.is(pattern),
            _            => false,
        }
    }

    /// If this is a rate-limit error, returns how many seconds to wait.
    pub fn retry_after_seconds(&self) -> Option<u64> {
        match self {
            Self::Api(e) => e.retry_after_seconds(),
            _            => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flood_error() -> ApiError {
        ApiError {
            code: 429,
            description: "Too Many Requests: retry after 14".to_string(),
            parameters: Some(ResponseParameters { migrate_to_chat_id: None, retry_after: Some(14) }),
        }
    }

    #[test]
    fn retry_after_only_for_429() {
        assert_eq!(flood_error().retry_after_seconds(), Some(14));

        let bad_request = ApiError {
            code: 400,
            description: "Bad Request: chat not found".to_string(),
            parameters: None,
        };
        assert_eq!(bad_request.retry_after_seconds(), None);
    }

    #[test]
    fn wildcard_description_matching() {
        let e = flood_error();
        assert!(e.is("Too Many Requests: retry after 14"));
        assert!(e.is("Too Many Requests:*"));
        assert!(e.is("*retry after 14"));
        assert!(!e.is("Bad Request:*"));
    }
}
