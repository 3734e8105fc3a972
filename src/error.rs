//! All error types for the mojitalk-l10n crate.
//!
//! Building the document from an in-memory table cannot fail; these are returned from the
//! fallible edges (reading tables, reading or writing catalog files).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("invalid locale code `{0}`")]
    InvalidLocale(String),

    #[error("invalid data: {0}")]
    DataMismatch(String),

    #[error("validation error: {0}")]
    Validation(String),
}

impl Error {
    /// Creates a new validation error
    pub fn validation_error(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
