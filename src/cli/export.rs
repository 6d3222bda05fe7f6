//! CLI command for data export

use std::path::PathBuf;

use chrono::Utc;

use crate::config::StoryCashPaths;
use crate::error::StoryCashResult;
use crate::export::export_to_dir;
use crate::storage::LedgerStore;

/// Export all transactions as CSV into `output`, or the default exports directory
pub fn handle_export_command(
    store: &LedgerStore,
    paths: &StoryCashPaths,
    output: Option<PathBuf>,
) -> StoryCashResult<PathBuf> {
    let dir = output.unwrap_or_else(|| paths.exports_dir());
    let path = export_to_dir(&dir, store.transactions(), Utc::now())?;

    println!(
        "Exported {} transactions to {}",
        store.transactions().len(),
        path.display()
    );
    Ok(path)
}
