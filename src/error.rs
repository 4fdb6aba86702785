//! Error types for price_fill

use thiserror::Error;

/// Unified error type for price_fill operations
#[derive(Debug, Error)]
pub enum PriceFillError {
    /// A required logical column could not be found in an input table
    #[error("{source_name} data is missing a column for {field}")]
    MissingColumn {
        source_name: &'static str,
        field: &'static str,
    },
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to read or write CSV data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to parse JSON data
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),
}

impl PriceFillError {
    /// True for errors caused by unusable input tables rather than I/O
    pub fn is_configuration(&self) -> bool {
        matches!(self, PriceFillError::MissingColumn { .. })
    }
}

/// Result alias for price_fill operations
pub type Result<T> = std::result::Result<T, PriceFillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_names_the_field() {
        let err = PriceFillError::MissingColumn {
            source_name: "Price guide",
            field: "avg7 price",
        };
        assert_eq!(
            err.to_string(),
            "Price guide data is missing a column for avg7 price"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn io_error_is_not_configuration() {
        let err: PriceFillError = std::io::Error::other("boom").into();
        assert!(!err.is_configuration());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
