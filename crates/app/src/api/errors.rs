//! API errors.

use thiserror::Error;

/// Shown when neither the server nor the transport explains a failed submission.
pub const SUBMISSION_FALLBACK_MESSAGE: &str = "Failed to submit. Please try again.";

/// Submitting a pet record failed. The catalog is never modified when this is returned.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The request could not be sent or its response could not be read.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("submission rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,

        /// The `error` field of the response body, if present
        message: Option<String>,
    },
}

impl SubmissionError {
    /// Single user-facing message: the server's message if it sent one, otherwise a
    /// description of the failure, otherwise a generic fallback.
    pub fn user_message(&self) -> String {
        let message = match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { status, .. } => {
                format!("Request failed with status code {status}")
            }
            Self::Transport(error) => error.to_string(),
        };

        if message.trim().is_empty() {
            SUBMISSION_FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

/// Fetching a random image failed. Always recovered by substituting a fallback image.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, non-2xx status or an unreadable body.
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response carried no image URI.
    #[error("response did not contain an image")]
    MissingImage,
}
