//! Core library for warehouse receipt parsing.
//!
//! This crate provides:
//! - Loading of warehouse receipt JSON exports
//! - Line item and totals extraction with normalization defaults
//! - CSV output named from the transaction date

pub mod error;
pub mod models;
pub mod loader;
pub mod extract;
pub mod output;

pub use error::{ExtractionError, RcptError, ReadError, Result, WriteError};
pub use models::config::{ExtractionConfig, OutputConfig, RcptConfig};
pub use models::receipt::{Item, Metadata, ParsedReceipt, RawItem, RawRecord, ReceiptDocument};
pub use loader::load_receipt;
pub use extract::{NO_DATE, ReceiptExtractor, UNDEFINED_TITLE, normalize_title};
pub use output::write_csv;
