//! Service layer for StoryCash
//!
//! The service layer provides business logic on top of the ledger store:
//! cached totals and selection state for the main screen, and category
//! lookup and editing.

pub mod category;
pub mod finance;

pub use category::{CategoryEdit, CategoryService};
pub use finance::{DisplayMode, FinanceSession, Totals};
