//! Receipt loading from JSON export files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ReadError, Result};
use crate::models::receipt::ReceiptDocument;

/// Read and parse a receipt JSON export.
///
/// The whole file is held in memory; exports are small. Both an unreadable
/// path and malformed JSON are reported as a [`ReadError`] so the caller can
/// abort before any extraction runs.
pub fn load_receipt(path: &Path) -> Result<ReceiptDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ReadError::Open(format!("{}: {}", path.display(), e)))?;

    let doc: ReceiptDocument =
        serde_json::from_str(&contents).map_err(|e| ReadError::Json(e.to_string()))?;

    debug!(
        "loaded {} records from {}",
        doc.data.receipts.len(),
        path.display()
    );

    Ok(doc)
}
