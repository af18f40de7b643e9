/*
[INPUT]:  Error sources (validation gates, HTTP transport, response shape)
[OUTPUT]: Structured error types separating "no I/O attempted" from I/O failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Swyftx adapter
#[derive(Error, Debug)]
pub enum SwyftxError {
    /// Currency code is not one of the supported standards
    #[error("Unsupported currency {0:?}, no changes were made")]
    UnsupportedStandard(String),

    /// Exchange name is not one of the supported comparison exchanges
    #[error("Unsupported comparison exchange {0:?}")]
    UnsupportedExchange(String),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request did not complete in time
    #[error("Request timed out after {duration_ms}ms")]
    Timeout { duration_ms: u128 },

    /// API returned a non-success status
    #[error("API error (code {code}): {message}")]
    Api { code: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Expected key absent from the response body
    #[error("Response is missing field {field:?}")]
    MissingField { field: &'static str },

    /// Key present but holding an unusable value
    #[error("Response field {field:?} is invalid: {message}")]
    InvalidField { field: String, message: String },

    /// Rate endpoint quoted a zero price, so no reciprocal exists
    #[error("Rate endpoint returned a zero price")]
    ZeroPrice,

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SwyftxError {
    /// True when the input was rejected before any request was sent
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            SwyftxError::UnsupportedStandard(_) | SwyftxError::UnsupportedExchange(_)
        )
    }

    /// True when the server answered but the body broke the expected contract
    pub fn is_response_error(&self) -> bool {
        matches!(
            self,
            SwyftxError::Api { .. }
                | SwyftxError::Serialization(_)
                | SwyftxError::MissingField { .. }
                | SwyftxError::InvalidField { .. }
                | SwyftxError::ZeroPrice
        )
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        SwyftxError::Api {
            code: status.as_u16(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        SwyftxError::InvalidField {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for Swyftx operations
pub type Result<T> = std::result::Result<T, SwyftxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_errors() {
        assert!(SwyftxError::UnsupportedStandard("EUR".into()).is_validation_error());
        assert!(SwyftxError::UnsupportedExchange("kraken".into()).is_validation_error());
        assert!(!SwyftxError::ZeroPrice.is_validation_error());
        assert!(!SwyftxError::Timeout { duration_ms: 2000 }.is_validation_error());
    }

    #[test]
    fn test_response_errors() {
        assert!(SwyftxError::ZeroPrice.is_response_error());
        assert!(SwyftxError::MissingField { field: "orders" }.is_response_error());
        assert!(!SwyftxError::Config("bad".into()).is_response_error());
    }

    #[test]
    fn test_api_error_creation() {
        let err = SwyftxError::api_error(StatusCode::UNAUTHORIZED, "Invalid token");
        match err {
            SwyftxError::Api { code, message } => {
                assert_eq!(code, 401);
                assert_eq!(message, "Invalid token");
            }
            _ => panic!("Expected Api error variant"),
        }
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            SwyftxError::UnsupportedStandard("EUR".into()).to_string(),
            "Unsupported currency \"EUR\", no changes were made"
        );
        assert_eq!(
            SwyftxError::MissingField { field: "limits" }.to_string(),
            "Response is missing field \"limits\""
        );
    }
}
