use thiserror::Error;

/// The main error type for covercrop operations.
///
/// Failures are terminal for the invocation: no retries, no best-effort
/// fallback sizing. The [`envelope`](crate::envelope) module maps variants
/// to HTTP status codes.
#[derive(Debug, Error)]
pub enum CoverError {
    /// A source or resolved target dimension is zero.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The source bytes could not be decoded as an image.
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Fetching the source bytes failed (transport error or non-success status).
    #[error("failed fetching '{url}': {message}")]
    FetchFailure { url: String, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Resize/crop/encode failed inside the backend.
    #[error("image processing failed: {0}")]
    Encode(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = CoverError::InvalidDimension("resolved target is 0x300".into());
        assert_eq!(err.to_string(), "invalid dimension: resolved target is 0x300");

        let err = CoverError::FetchFailure {
            url: "https://example.com/x.jpg".into(),
            message: "connection refused".into(),
        };
        assert!(err.to_string().contains("https://example.com/x.jpg"));
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = CoverError::from(io);
        assert!(matches!(err, CoverError::Io(_)));
    }
}
