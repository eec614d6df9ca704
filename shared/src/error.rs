use thiserror::Error;

/// Failures talking to the backend.
///
/// A backend that answers `{"success": false}` is not an error at this
/// level; that answer decodes normally and the workflow turns it into a
/// toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status}")]
    Http { status: u16 },

    #[error("Parse error: {0}")]
    Decode(String),

    #[error("Serialize error: {0}")]
    Encode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
