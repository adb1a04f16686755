//! Receipt data models for the warehouse JSON export format.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Document type tag of the record that carries receipt totals.
pub const WAREHOUSE_RECEIPT_DETAIL: &str = "WarehouseReceiptDetail";

/// Sentinel amount for totals missing from the source record.
///
/// Downstream consumers expect a numeric column, so absent values render as
/// the maximum representable integer rather than an empty cell.
pub fn unknown_amount() -> Decimal {
    Decimal::from(i64::MAX)
}

/// A parsed receipt export, mirroring the source JSON shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptDocument {
    #[serde(default)]
    pub data: ReceiptList,
}

/// The `data` envelope of an export.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReceiptList {
    #[serde(default)]
    pub receipts: Vec<RawRecord>,
}

/// One tagged sub-object of the receipts array.
///
/// Every field is optional at the serde level; defaults are applied during
/// extraction, not here. Fields the pipeline does not consume are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    pub document_type: Option<String>,
    pub total: Option<Decimal>,
    pub sub_total: Option<Decimal>,
    pub taxes: Option<Decimal>,
    pub transaction_date: Option<String>,
    /// Absent and JSON `null` both map to `None`.
    #[serde(default)]
    pub item_array: Option<Vec<RawItem>>,
}

/// One entry of a record's `itemArray`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItem {
    pub item_description01: Option<String>,
    pub item_number: Option<i64>,
    pub amount: Option<Decimal>,
}

/// A normalized line item ready for CSV output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    /// Warehouse item number, passed through from the source.
    pub id: Option<i64>,

    /// Human-readable description, see [`crate::extract::normalize_title`].
    pub title: String,

    /// Line amount, passed through from the source.
    pub price: Option<Decimal>,
}

/// Transaction-level totals and the transaction date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub total: Decimal,
    pub subtotal: Decimal,
    pub taxes: Decimal,

    /// Transaction date as shipped by the export, `"nodate"` when absent.
    pub date: String,
}

impl Metadata {
    /// The transaction date as a calendar date, when it parses as one.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// Extraction output: line items in source order plus receipt metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReceipt {
    pub items: Vec<Item>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_full_record() {
        let doc: ReceiptDocument = serde_json::from_str(
            r#"{"data":{"receipts":[{
                "documentType":"WarehouseReceiptDetail",
                "total":105.50,
                "subTotal":100.00,
                "taxes":5.50,
                "transactionDate":"2023-01-15",
                "itemArray":[{"itemDescription01":"MILK 2% GAL","itemNumber":123456,"amount":4.99}]
            }]}}"#,
        )
        .unwrap();

        let record = &doc.data.receipts[0];
        assert_eq!(record.document_type.as_deref(), Some("WarehouseReceiptDetail"));
        assert_eq!(record.transaction_date.as_deref(), Some("2023-01-15"));

        let items = record.item_array.as_ref().unwrap();
        assert_eq!(items[0].item_number, Some(123456));
    }

    #[test]
    fn amounts_keep_their_scale() {
        let doc: ReceiptDocument = serde_json::from_str(
            r#"{"data":{"receipts":[{"total":105.50,"taxes":5.50}]}}"#,
        )
        .unwrap();

        let record = &doc.data.receipts[0];
        assert_eq!(record.total.unwrap().to_string(), "105.50");
        assert_eq!(record.taxes.unwrap().to_string(), "5.50");
    }

    #[test]
    fn missing_receipts_key_is_empty() {
        let doc: ReceiptDocument = serde_json::from_str(r#"{"data":{}}"#).unwrap();
        assert!(doc.data.receipts.is_empty());

        let doc: ReceiptDocument = serde_json::from_str(r#"{}"#).unwrap();
        assert!(doc.data.receipts.is_empty());
    }

    #[test]
    fn null_item_array_is_none() {
        let doc: ReceiptDocument = serde_json::from_str(
            r#"{"data":{"receipts":[{"itemArray":null}]}}"#,
        )
        .unwrap();
        assert!(doc.data.receipts[0].item_array.is_none());
    }

    #[test]
    fn calendar_date_parses_iso_dates_only() {
        let meta = Metadata {
            total: Decimal::ZERO,
            subtotal: Decimal::ZERO,
            taxes: Decimal::ZERO,
            date: "2023-01-15".to_string(),
        };
        assert_eq!(
            meta.calendar_date(),
            NaiveDate::from_ymd_opt(2023, 1, 15)
        );

        let meta = Metadata { date: "nodate".to_string(), ..meta };
        assert_eq!(meta.calendar_date(), None);
    }
}
