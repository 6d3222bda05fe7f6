//! CSV Export functionality
//!
//! Exports transactions, with their category snapshots flattened into
//! columns, in chronological order.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use crate::error::{StoryCashError, StoryCashResult};
use crate::models::Transaction;
use crate::storage::write_atomic;

const HEADER: [&str; 7] = [
    "id",
    "date",
    "type",
    "value",
    "category_title",
    "category_image",
    "category_color",
];

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Write all transactions as CSV, oldest first
///
/// Transactions sharing a timestamp keep their storage order.
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> StoryCashResult<()> {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by_key(|t| t.date);

    let mut csv_writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Necessary)
        .from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_error)?;

    for txn in sorted {
        csv_writer
            .write_record([
                txn.id.to_string(),
                txn.date.format(DATE_FORMAT).to_string(),
                txn.transaction_type.as_str().to_string(),
                txn.value.value().to_string(),
                txn.category.title.clone(),
                txn.category.image.clone(),
                txn.category.color.clone(),
            ])
            .map_err(export_error)?;
    }

    csv_writer
        .flush()
        .map_err(|e| StoryCashError::Export(e.to_string()))?;
    Ok(())
}

/// File name for an export made at `now`
pub fn export_file_name(now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Secs, true)
        .replace(':', "-");
    format!("transactions_{}.csv", stamp)
}

/// Export into `dir`, creating it if needed, and return the written path
pub fn export_to_dir(
    dir: &Path,
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> StoryCashResult<PathBuf> {
    let mut buffer = Vec::new();
    export_transactions_csv(transactions, &mut buffer)?;

    let path = dir.join(export_file_name(now));
    write_atomic(&path, &buffer)
        .map_err(|e| StoryCashError::Export(format!("Failed to write {}: {}", path.display(), e)))?;

    info!(
        "Exported {} transactions to {}",
        transactions.len(),
        path.display()
    );
    Ok(path)
}

fn export_error(err: csv::Error) -> StoryCashError {
    StoryCashError::Export(err.to_string())
}
