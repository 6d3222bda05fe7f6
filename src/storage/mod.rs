//! Storage layer for StoryCash
//!
//! Provides the ledger store, its JSON codec, and file helpers with atomic
//! writes and automatic directory creation.

pub mod codec;
pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{read_json_optional, write_atomic, write_json_atomic};
pub use init::{default_categories, default_ledger};
pub use ledger::{LedgerInfo, LedgerStore};
