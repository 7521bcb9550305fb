//! Error types for page fetching.
//!
//! Every failure belongs to one stage of the fetch:
//! - connection: the request never completed
//! - status: a response arrived with a code other than 200
//! - parse: the body could not be read into the HTML parser
//!
//! Extraction itself never fails.

use thiserror::Error;

/// Stage of the fetch that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchStage {
    Connection,
    Status,
    Parse,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Request could not be completed (DNS, refused connection, TLS, timeout)
    #[error("HTTP request failed")]
    Transport(#[source] reqwest::Error),

    /// Response carried a status other than 200
    #[error("HTTP request returned status {0}")]
    Status(u16),

    /// Response body could not be read into the parser
    #[error("HTML parsing failed")]
    Parse(#[source] reqwest::Error),
}

impl FetchError {
    pub fn stage(&self) -> FetchStage {
        match self {
            Self::Transport(_) => FetchStage::Connection,
            Self::Status(_) => FetchStage::Status,
            Self::Parse(_) => FetchStage::Parse,
        }
    }
}

/// Result type alias using FetchError.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_reports_code() {
        let err = FetchError::Status(404);
        assert_eq!(err.to_string(), "HTTP request returned status 404");
        assert_eq!(err.stage(), FetchStage::Status);
    }

    #[tokio::test]
    async fn test_transport_cause_is_reported_once() {
        // Nothing listens on port 1
        let cause = reqwest::get("http://127.0.0.1:1/").await.unwrap_err();
        let cause_text = cause.to_string();
        let err = FetchError::Transport(cause);

        assert_eq!(err.to_string(), "HTTP request failed");
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some(cause_text.as_str()));
    }
}
