//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatchError {
    #[error("Invalid file type '{media_type}' for {file_name}. Please upload a PDF or Word document.")]
    InvalidFileType {
        file_name: String,
        media_type: String,
    },

    #[error("Network error: unable to reach the analysis service ({0})")]
    Network(String),

    /// Non-2xx response. The display string is what users see as the failure reason.
    #[error("{}", http_reason(.status, .status_text))]
    Http { status: u16, status_text: String },

    #[error("Malformed response: the analysis service returned an unexpected payload ({0})")]
    MalformedResponse(String),

    #[error("Submission rejected: {0}")]
    SubmissionRejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

fn http_reason(status: &u16, status_text: &str) -> String {
    if status_text.is_empty() {
        format!("Error: {}", status)
    } else {
        format!("Error: {} {}", status, status_text)
    }
}

impl ResumeMatchError {
    /// Errors that end an analysis attempt and are surfaced through the failure state.
    pub fn is_analysis_failure(&self) -> bool {
        matches!(
            self,
            ResumeMatchError::Network(_)
                | ResumeMatchError::Http { .. }
                | ResumeMatchError::MalformedResponse(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatchError>;
