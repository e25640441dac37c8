//! Error types for venue deletion.

use thiserror::Error;

/// Failures of the single DELETE round trip.
///
/// These never escape the click handler; they end up in `Diagnostics`.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Invalid request URL '{url}': {message}")]
    InvalidUrl { url: String, message: String },

    #[error("DELETE {url} failed: {message}")]
    Request { url: String, message: String },
}

impl TransportError {
    /// The URL (or path, when it could not be resolved) the request targeted.
    pub fn url(&self) -> &str {
        match self {
            TransportError::InvalidUrl { url, .. }
            | TransportError::Request { url, .. } => url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_target() {
        let err = TransportError::Request {
            url: "http://localhost:5000/venues/7".into(),
            message: "connection refused".into(),
        };

        assert_eq!(
            err.to_string(),
            "DELETE http://localhost:5000/venues/7 failed: connection refused"
        );
        assert_eq!(err.url(), "http://localhost:5000/venues/7");
    }
}
