//! Line item and metadata extraction from parsed receipt exports.

pub mod title;

use tracing::{debug, warn};

use crate::error::{ExtractionError, Result};
use crate::models::config::ExtractionConfig;
use crate::models::receipt::{
    Item, Metadata, ParsedReceipt, RawItem, RawRecord, ReceiptDocument, unknown_amount,
    WAREHOUSE_RECEIPT_DETAIL,
};

pub use title::{UNDEFINED_TITLE, normalize_title};

/// Default transaction date when the source record carries none.
pub const NO_DATE: &str = "nodate";

/// Receipt extractor with a configurable document type tag.
pub struct ReceiptExtractor {
    document_type: String,
}

impl ReceiptExtractor {
    /// Create an extractor matching the stock warehouse export tag.
    pub fn new() -> Self {
        Self {
            document_type: WAREHOUSE_RECEIPT_DETAIL.to_string(),
        }
    }

    /// Set the document type tag that marks the totals record.
    pub fn with_document_type(mut self, tag: impl Into<String>) -> Self {
        self.document_type = tag.into();
        self
    }

    /// Create an extractor from pipeline configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_document_type(config.document_type.clone())
    }

    /// Extract normalized line items and metadata from a parsed export.
    ///
    /// Metadata comes from the first record tagged with the configured
    /// document type; no such record is a fatal
    /// [`ExtractionError::MissingMetadata`]. Missing per-item fields are not
    /// errors and degrade to sentinel or empty values.
    pub fn extract(&self, doc: &ReceiptDocument) -> Result<ParsedReceipt> {
        let records = &doc.data.receipts;

        let metadata = self.extract_metadata(records)?;

        // The last record with a non-null itemArray wins; item lists from
        // earlier records are discarded, not merged.
        let mut items: Vec<Item> = Vec::new();
        for record in records {
            if let Some(raw_items) = &record.item_array {
                if !items.is_empty() {
                    warn!("multiple records carry an itemArray, keeping the last one");
                }
                items = raw_items.iter().map(normalize_item).collect();
            }
        }

        debug!("extracted {} line items", items.len());

        Ok(ParsedReceipt { items, metadata })
    }

    fn extract_metadata(&self, records: &[RawRecord]) -> Result<Metadata> {
        let source = records
            .iter()
            .find(|r| r.document_type.as_deref() == Some(self.document_type.as_str()))
            .ok_or_else(|| ExtractionError::MissingMetadata(self.document_type.clone()))?;

        Ok(Metadata {
            total: source.total.unwrap_or_else(unknown_amount),
            subtotal: source.sub_total.unwrap_or_else(unknown_amount),
            taxes: source.taxes.unwrap_or_else(unknown_amount),
            date: source
                .transaction_date
                .clone()
                .unwrap_or_else(|| NO_DATE.to_string()),
        })
    }
}

impl Default for ReceiptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_item(raw: &RawItem) -> Item {
    let title = normalize_title(raw.item_description01.as_deref().unwrap_or(UNDEFINED_TITLE));

    Item {
        id: raw.item_number,
        title,
        price: raw.amount,
    }
}
