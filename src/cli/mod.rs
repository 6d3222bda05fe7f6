//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod category;
pub mod export;
pub mod report;
pub mod tips;
pub mod transaction;

pub use category::{handle_category_command, CategoryCommands};
pub use export::handle_export_command;
pub use report::handle_stats_command;
pub use tips::{build_tips_cache, handle_tips_command};
pub use transaction::{handle_transaction_command, TransactionCommands};
