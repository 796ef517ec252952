use std::fmt;

/// Unified error type for catalog, conversion and I/O operations
#[derive(Debug)]
pub enum ConvertError {
    /// HTTP request failed (network error, timeout, etc.)
    Network(reqwest::Error),
    /// Failed to parse JSON response or cache file
    Parse(serde_json::Error),
    /// API returned an error response
    ApiResponse { code: String, details: String },
    /// HTTP error status code
    HttpStatus(reqwest::StatusCode),
    /// Set code has no entry in the catalog
    SetNotFound(String),
    /// CSV writer failed
    Csv(csv::Error),
    /// Output could not be assembled
    Output(String),
    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Network(e) => write!(f, "Network error: {}", e),
            ConvertError::Parse(e) => write!(f, "Parse error: {}", e),
            ConvertError::ApiResponse { code, details } => write!(f, "{}: {}", code, details),
            ConvertError::HttpStatus(status) => write!(f, "HTTP error: {}", status),
            ConvertError::SetNotFound(code) => write!(f, "Set not found: {}", code),
            ConvertError::Csv(e) => write!(f, "CSV error: {}", e),
            ConvertError::Output(msg) => write!(f, "Output error: {}", msg),
            ConvertError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::Network(e) => Some(e),
            ConvertError::Parse(e) => Some(e),
            ConvertError::Csv(e) => Some(e),
            ConvertError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ConvertError {
    fn from(err: reqwest::Error) -> Self {
        ConvertError::Network(err)
    }
}

impl From<serde_json::Error> for ConvertError {
    fn from(err: serde_json::Error) -> Self {
        ConvertError::Parse(err)
    }
}

impl From<csv::Error> for ConvertError {
    fn from(err: csv::Error) -> Self {
        ConvertError::Csv(err)
    }
}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err)
    }
}

/// Result type alias for conversion operations
pub type ConvertResult<T> = Result<T, ConvertError>;
