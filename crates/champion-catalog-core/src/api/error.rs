use thiserror::Error;

/// Failure while fetching or parsing the champion list
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Champion data not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid champion data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Champion {champion} has non-numeric key {key:?}")]
    InvalidChampionKey { champion: String, key: String },

    #[error("Champion load was cancelled")]
    Cancelled,

    #[error("Champion load task failed: {0}")]
    TaskFailed(String),
}

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

impl LoadError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            404 => LoadError::NotFound(truncated),
            429 => LoadError::RateLimited,
            500..=599 => LoadError::ServerError(truncated),
            code => LoadError::UnexpectedStatus {
                status: code,
                body: truncated,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_from_status_mapping() {
        assert!(matches!(
            LoadError::from_status(StatusCode::NOT_FOUND, "missing"),
            LoadError::NotFound(body) if body == "missing"
        ));
        assert!(matches!(
            LoadError::from_status(StatusCode::TOO_MANY_REQUESTS, ""),
            LoadError::RateLimited
        ));
        assert!(matches!(
            LoadError::from_status(StatusCode::BAD_GATEWAY, "upstream"),
            LoadError::ServerError(_)
        ));
        assert!(matches!(
            LoadError::from_status(StatusCode::FORBIDDEN, "denied"),
            LoadError::UnexpectedStatus { status: 403, .. }
        ));
    }

    #[test]
    fn test_long_body_is_truncated() {
        let body = "x".repeat(2000);
        let err = LoadError::from_status(StatusCode::INTERNAL_SERVER_ERROR, &body);
        let message = err.to_string();
        assert!(message.contains("truncated, 2000 total bytes"));
        assert!(message.len() < 600);
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // 'é' is two bytes, so byte 500 lands mid-character
        let body = format!("a{}", "é".repeat(400));
        let truncated = LoadError::truncate_body(&body);
        assert!(truncated.starts_with('a'));
        assert!(truncated.contains("truncated"));
    }
}
