//! Error types for the content model
//!
//! The content model itself is infallible for ordinary text; errors only
//! arise when a caller asks for a strict conversion (for example parsing an
//! edition slug from user input).

/// Errors raised by strict content conversions
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    /// Text did not name any known edition
    #[error("unknown edition: '{0}'")]
    UnknownEdition(String),

    /// A role weight could not be read as an integer
    #[error("invalid role weight: '{0}'")]
    InvalidWeight(String),
}

/// Result type alias for content operations
pub type ContentResult<T> = Result<T, ContentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_edition_display() {
        let err = ContentError::UnknownEdition("2019-paris".to_string());
        assert_eq!(err.to_string(), "unknown edition: '2019-paris'");
    }

    #[test]
    fn invalid_weight_display() {
        let err = ContentError::InvalidWeight("heavy".to_string());
        assert_eq!(err.to_string(), "invalid role weight: 'heavy'");
    }
}
