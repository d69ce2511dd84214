use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotkitError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] ureq::Error),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid input document: {0}")]
    InvalidInput(String),
}

impl SpotkitError {
    /// Get an actionable hint for how to resolve this error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            SpotkitError::HttpError(_) => Some(
                "Check your internet connection, or use offline demo data:\n  spotkit scout --url <URL> --offline"
            ),
            SpotkitError::InvalidInput(_) => Some(
                "The input must be a JSON document from the previous stage:\n  spotkit scout --url <URL> --out snapshot.json\n  spotkit brief --input snapshot.json --out brief.json\n  spotkit story --input brief.json"
            ),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SpotkitError>;
