use aws_sdk_s3::error::DisplayErrorContext;
use thiserror::Error;

/// Result alias used across the crate.
pub type LocalStackResult<T> = Result<T, LocalStackError>;

#[derive(Debug, Error)]
pub enum LocalStackError {
    #[error("unsupported service \"{0}\" (expected one of: s3, sqs, lambda)")]
    UnsupportedService(String),

    #[error("Failed to interact with AWS services: {0}")]
    Aws(String),

    #[error("Failed to send HTTP request: {0}")]
    Http(String),

    #[error("Failed to encode or decode JSON payload: {0}")]
    Json(String),
}

impl From<reqwest::Error> for LocalStackError {
    fn from(error: reqwest::Error) -> Self {
        LocalStackError::Http(error.to_string())
    }
}

impl From<serde_json::Error> for LocalStackError {
    fn from(error: serde_json::Error) -> Self {
        LocalStackError::Json(error.to_string())
    }
}

// Generic implementation for AWS SDK errors. DisplayErrorContext keeps the
// remote error code and message visible instead of the SDK's terse
// "service error" summary, so emulator failures (bucket already exists,
// queue does not exist) reach the caller verbatim.
impl<E, R> From<aws_sdk_s3::error::SdkError<E, R>> for LocalStackError
where
    E: std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    fn from(error: aws_sdk_s3::error::SdkError<E, R>) -> Self {
        LocalStackError::Aws(format!("{}", DisplayErrorContext(error)))
    }
}
