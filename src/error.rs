use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors surfaced by the YaaS client.
///
/// Every failure is terminal for the call that produced it; nothing is retried.
#[derive(Error, Debug)]
pub enum YaasError {
    /// Network or IO failure during the token fetch or the resource call
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The token endpoint answered without a body
    #[error("empty response body")]
    EmptyBody,

    /// The token response was decoded but carried no access token
    #[error("access token is empty")]
    EmptyToken,

    /// A required collaborator or value was missing at construction time
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A payload could not be encoded or decoded
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),

    /// A path could not be resolved against the zone base URL
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// The access token could not be placed in a header
    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] InvalidHeaderValue),
}

impl YaasError {
    /// Whether the token endpoint failed to hand out a usable token.
    pub fn is_authorization(&self) -> bool {
        matches!(self, YaasError::EmptyBody | YaasError::EmptyToken)
    }
}

pub type Result<T> = std::result::Result<T, YaasError>;

/// Unwraps a required value, failing with [`YaasError::Configuration`] when it is absent.
pub fn check_not_none<T>(value: Option<T>, message: &str) -> Result<T> {
    value.ok_or_else(|| YaasError::Configuration(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_not_none_passes_value_through() {
        let value = check_not_none(Some(5313), "value == null").unwrap();
        assert_eq!(value, 5313);
    }

    #[test]
    fn test_check_not_none_fails_on_absent_value() {
        let err = check_not_none::<String>(None, "object == null").unwrap_err();
        assert!(matches!(err, YaasError::Configuration(ref msg) if msg == "object == null"));
        assert_eq!(err.to_string(), "configuration error: object == null");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(YaasError::EmptyBody.to_string(), "empty response body");
        assert_eq!(YaasError::EmptyToken.to_string(), "access token is empty");
    }

    #[test]
    fn test_authorization_errors_are_flagged() {
        assert!(YaasError::EmptyBody.is_authorization());
        assert!(YaasError::EmptyToken.is_authorization());
        assert!(!YaasError::Configuration("zone == null".to_string()).is_authorization());
    }
}
