//! Generation backend error types.

use std::time::Duration;

use thiserror::Error;

/// Errors reported by a text-generation backend.
///
/// None of these ever reach the JSON-RPC error channel: the tool dispatcher
/// turns them into `isError` tool results.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The HTTP request to the backend could not be completed.
    #[error("failed to generate content: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("failed to generate content: {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The backend returned no candidates.
    #[error("no candidates in response")]
    NoCandidates,

    /// The first candidate carried no content parts.
    #[error("no parts in response")]
    NoParts,

    /// The backend did not answer within the generation timeout.
    #[error("generation timed out after {}s", .0.as_secs())]
    Timeout(Duration),

    /// No access token could be obtained from Google credentials.
    #[error("failed to obtain Google credentials: {0}")]
    Credentials(#[from] gcp_auth::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_backend_wording() {
        assert_eq!(
            GenerationError::NoCandidates.to_string(),
            "no candidates in response"
        );
        assert_eq!(GenerationError::NoParts.to_string(), "no parts in response");
        assert_eq!(
            GenerationError::Timeout(Duration::from_secs(85)).to_string(),
            "generation timed out after 85s"
        );
    }

    #[test]
    fn test_status_error_includes_body() {
        let err = GenerationError::Status {
            status: reqwest::StatusCode::TOO_MANY_REQUESTS,
            body: "quota exceeded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("failed to generate content: 429"));
        assert!(msg.ends_with("quota exceeded"));
    }
}
