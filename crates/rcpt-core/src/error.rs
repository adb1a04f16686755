//! Error types for the rcpt-core library.

use thiserror::Error;

/// Main error type for the rcpt library.
#[derive(Error, Debug)]
pub enum RcptError {
    /// Receipt loading error.
    #[error("read error: {0}")]
    Read(#[from] ReadError),

    /// Receipt extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// CSV output error.
    #[error("write error: {0}")]
    Write(#[from] WriteError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while loading the receipt JSON.
#[derive(Error, Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    #[error("receipt could not be read or was not found: {0}")]
    Open(String),

    /// The file contents are not valid JSON.
    #[error("receipt is not valid JSON: {0}")]
    Json(String),
}

/// Errors raised during line item and metadata extraction.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No record in the export carries the expected document type.
    #[error("no record with documentType {0:?}")]
    MissingMetadata(String),
}

/// Errors raised while writing the CSV output.
#[derive(Error, Debug)]
pub enum WriteError {
    /// The output file could not be created.
    #[error("failed to create {path}: {reason}")]
    Create { path: String, reason: String },

    /// A row could not be serialized.
    #[error("failed to write row: {0}")]
    Csv(String),

    /// The finished file could not be moved into place.
    #[error("failed to persist {path}: {reason}")]
    Persist { path: String, reason: String },
}

/// Result type for the rcpt library.
pub type Result<T> = std::result::Result<T, RcptError>;
