//! CSV output for parsed receipts.

use std::path::PathBuf;

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::error::{Result, WriteError};
use crate::models::config::OutputConfig;
use crate::models::receipt::{Item, Metadata};

/// Column header, fixed order.
const HEADER: [&str; 3] = ["id", "title", "price"];

/// Write items and summary rows to `<dir>/<prefix>-<date>.csv`.
///
/// The file is assembled in a temporary file in the target directory and
/// renamed over the final name on success, so a failed run leaves no partial
/// output behind. An existing file of the same name is overwritten.
pub fn write_csv(items: &[Item], metadata: &Metadata, opts: &OutputConfig) -> Result<PathBuf> {
    if metadata.calendar_date().is_none() {
        warn!(
            "transaction date {:?} is not a calendar date, using it in the file name as-is",
            metadata.date
        );
    }

    let path = opts.dir.join(format!("{}-{}.csv", opts.prefix, metadata.date));

    let tmp = NamedTempFile::new_in(&opts.dir).map_err(|e| WriteError::Create {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    let mut writer = csv::Writer::from_writer(tmp);

    writer.write_record(HEADER).map_err(csv_error)?;

    for item in items {
        writer
            .write_record([
                item.id.map(|id| id.to_string()).unwrap_or_default(),
                item.title.clone(),
                item.price.map(|p| p.to_string()).unwrap_or_default(),
            ])
            .map_err(csv_error)?;
    }

    // Summary rows carry an empty id column and their label as the title.
    for (label, value) in [
        ("taxes", metadata.taxes),
        ("subtotal", metadata.subtotal),
        ("total", metadata.total),
    ] {
        let value = value.to_string();
        writer
            .write_record(["", label, value.as_str()])
            .map_err(csv_error)?;
    }

    let tmp = writer
        .into_inner()
        .map_err(|e| WriteError::Csv(e.to_string()))?;

    tmp.persist(&path).map_err(|e| WriteError::Persist {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    info!("wrote {}", path.display());

    Ok(path)
}

fn csv_error(e: csv::Error) -> WriteError {
    WriteError::Csv(e.to_string())
}
