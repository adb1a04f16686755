//! Configuration structures for the receipt pipeline.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::receipt::WAREHOUSE_RECEIPT_DETAIL;

/// Main configuration for the rcpt pipeline.
///
/// The defaults reproduce the stock behavior; a config file only needs to
/// name the fields it overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RcptConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Document type tag of the record that carries receipt totals.
    pub document_type: String,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            document_type: WAREHOUSE_RECEIPT_DETAIL.to_string(),
        }
    }
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the CSV file is written into.
    pub dir: PathBuf,

    /// File name prefix, producing `<prefix>-<date>.csv`.
    pub prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            prefix: "costco".to_string(),
        }
    }
}

impl RcptConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_stock_behavior() {
        let config = RcptConfig::default();
        assert_eq!(config.extraction.document_type, "WarehouseReceiptDetail");
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.output.prefix, "costco");
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: RcptConfig =
            serde_json::from_str(r#"{"output":{"prefix":"sams"}}"#).unwrap();
        assert_eq!(config.output.prefix, "sams");
        assert_eq!(config.output.dir, PathBuf::from("."));
        assert_eq!(config.extraction.document_type, "WarehouseReceiptDetail");
    }
}
