/// Failure taxonomy for the data layer. Everything a card can show the
/// user is a string; these variants exist so providers can report what
/// actually went wrong before the adapter flattens it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Transport-level failure (request never completed, non-2xx status).
    Network(String),
    /// The source answered but the body did not match the expected shape.
    Parse(String),
    /// User-facing failure message, displayed as-is by the cards.
    Source(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Network(msg) => write!(f, "network error: {}", msg),
            DataError::Parse(msg) => write!(f, "parse error: {}", msg),
            DataError::Source(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for DataError {}

pub type DataResult<T> = Result<T, DataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_detail() {
        let err = DataError::Network("HTTP 503".to_string());
        assert_eq!(err.to_string(), "network error: HTTP 503");
    }

    #[test]
    fn source_errors_display_verbatim() {
        let err = DataError::Source("Failed to load crypto data".to_string());
        assert_eq!(err.to_string(), "Failed to load crypto data");
    }
}
