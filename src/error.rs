//! Error types for rs-extract.
//!
//! This module defines the error types returned by extraction operations.
//! An empty extraction is not an error: it is reported as an `Ok` result
//! with empty content.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The HTML input could not be read into a document tree.
    #[error("Malformed HTML input: {0}")]
    MalformedInput(String),

    /// The caller-supplied base URL does not parse as an absolute URL.
    #[error("Invalid base URL {url:?}: {source}")]
    InvalidBaseUrl {
        /// The rejected base string.
        url: String,
        /// Underlying parse failure.
        #[source]
        source: url::ParseError,
    },

    /// Malformed bytes were found while transcoding from a declared charset.
    ///
    /// Reported through [`crate::encoding::Converted::error`]; the top-level
    /// API records it as a warning and keeps the replaced text.
    #[error("Encoding conversion from {charset} failed: {reason}")]
    EncodingError {
        /// Charset label the field was decoded with.
        charset: String,
        /// What went wrong.
        reason: String,
    },
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::MalformedInput(err.to_string())
    }
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_becomes_malformed_input() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = Error::from(io);
        assert!(matches!(err, Error::MalformedInput(ref msg) if msg.contains("stream closed")));
    }

    #[test]
    fn invalid_base_url_display_names_the_url() {
        let source = url::Url::parse("not a url").err().unwrap_or(url::ParseError::EmptyHost);
        let err = Error::InvalidBaseUrl {
            url: "not a url".to_string(),
            source,
        };
        assert!(err.to_string().contains("not a url"));
    }

    #[test]
    fn encoding_error_display() {
        let err = Error::EncodingError {
            charset: "Shift_JIS".to_string(),
            reason: "malformed byte sequence".to_string(),
        };
        assert!(err.to_string().contains("Shift_JIS"));
        assert!(err.to_string().contains("malformed"));
    }
}
