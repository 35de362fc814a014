use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Lost Ark API client
#[derive(Error, Debug)]
pub enum LostArkError {
    #[error("Unauthorized: missing or invalid API token")]
    Unauthorized,

    #[error("Forbidden: the API token is not allowed to access this resource")]
    Forbidden,

    #[error("Not found")]
    NotFound,

    #[error("Rate limit exceeded{}", retry_after_suffix(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    #[error("Lost Ark API internal server error")]
    InternalServerError,

    #[error("Lost Ark API bad gateway")]
    BadGateway,

    #[error("Lost Ark API service unavailable (maintenance or overload)")]
    ServiceUnavailable,

    #[error("Lost Ark API gateway timeout")]
    GatewayTimeout,

    #[error("Unexpected status code: {0}")]
    UnexpectedStatus(u16),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

fn retry_after_suffix(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(", retry after {}s", secs))
        .unwrap_or_default()
}

impl LostArkError {
    /// Maps a non-success response status to its error kind
    pub fn from_status(status: StatusCode, headers: &HeaderMap) -> Self {
        match status.as_u16() {
            401 => LostArkError::Unauthorized,
            403 => LostArkError::Forbidden,
            404 => LostArkError::NotFound,
            429 => LostArkError::RateLimited {
                retry_after: headers
                    .get(RETRY_AFTER)
                    .and_then(|h| h.to_str().ok())
                    .and_then(|s| s.trim().parse::<u64>().ok()),
            },
            500 => LostArkError::InternalServerError,
            502 => LostArkError::BadGateway,
            503 => LostArkError::ServiceUnavailable,
            504 => LostArkError::GatewayTimeout,
            code => LostArkError::UnexpectedStatus(code),
        }
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            LostArkError::RateLimited { .. }
                | LostArkError::BadGateway
                | LostArkError::ServiceUnavailable
                | LostArkError::GatewayTimeout
                | LostArkError::Connection(_)
        )
    }

    pub fn error_type(&self) -> &'static str {
        match self {
            LostArkError::Unauthorized => "unauthorized",
            LostArkError::Forbidden => "forbidden",
            LostArkError::NotFound => "not_found",
            LostArkError::RateLimited { .. } => "rate_limit",
            LostArkError::InternalServerError => "internal_server_error",
            LostArkError::BadGateway => "bad_gateway",
            LostArkError::ServiceUnavailable => "service_unavailable",
            LostArkError::GatewayTimeout => "gateway_timeout",
            LostArkError::UnexpectedStatus(_) => "unexpected_status",
            LostArkError::Connection(_) => "connection_error",
            LostArkError::Parse(_) => "parse_error",
            LostArkError::Config(_) => "config_error",
        }
    }
}

impl From<reqwest::Error> for LostArkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LostArkError::Connection(
                "Request timeout. Please check your internet connection.".to_string(),
            )
        } else if err.is_connect() {
            LostArkError::Connection(
                "Failed to connect to Lost Ark API. Please check your internet connection."
                    .to_string(),
            )
        } else if err.is_decode() {
            LostArkError::Parse(format!("Response body could not be decoded: {}", err))
        } else if let Some(status) = err.status() {
            LostArkError::from_status(status, &HeaderMap::new())
        } else {
            LostArkError::Connection(err.to_string())
        }
    }
}

impl From<serde_json::Error> for LostArkError {
    fn from(err: serde_json::Error) -> Self {
        LostArkError::Parse(format!("JSON parsing failed: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, LostArkError>;

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_status_mapping() {
        let headers = HeaderMap::new();
        let cases = [
            (401, "unauthorized"),
            (403, "forbidden"),
            (404, "not_found"),
            (429, "rate_limit"),
            (500, "internal_server_error"),
            (502, "bad_gateway"),
            (503, "service_unavailable"),
            (504, "gateway_timeout"),
            (418, "unexpected_status"),
        ];

        for (code, expected) in cases {
            let err = LostArkError::from_status(StatusCode::from_u16(code).unwrap(), &headers);
            assert_eq!(err.error_type(), expected, "status {}", code);
        }
    }

    #[test]
    fn test_rate_limited_carries_retry_after() {
        let mut headers = HeaderMap::new();
        headers.insert(RETRY_AFTER, HeaderValue::from_static("7"));

        let err = LostArkError::from_status(StatusCode::TOO_MANY_REQUESTS, &headers);
        assert!(matches!(
            err,
            LostArkError::RateLimited {
                retry_after: Some(7)
            }
        ));
        assert!(err.is_retryable());
        assert_eq!(err.to_string(), "Rate limit exceeded, retry after 7s");

        let err = LostArkError::from_status(StatusCode::TOO_MANY_REQUESTS, &HeaderMap::new());
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn test_unexpected_status_message() {
        let err = LostArkError::UnexpectedStatus(418);
        assert_eq!(err.to_string(), "Unexpected status code: 418");
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LostArkError::from(json_err);
        assert_eq!(err.error_type(), "parse_error");
    }
}
