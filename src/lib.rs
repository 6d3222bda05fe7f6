//! StoryCash - personal income and expense tracker
//!
//! This library provides the core of the StoryCash ledger: transactions
//! recorded against income or expense categories, persisted as a single JSON
//! document, with totals over preset intervals, CSV export and a small set
//! of advisory tips that degrade gracefully when offline.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, money, periods)
//! - `storage`: Ledger store and its JSON codec
//! - `services`: Finance session and category management
//! - `tips`: Tips cache with remote, on-disk and bundled sources
//! - `export`: CSV export
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `storycash` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use storycash::config::{Settings, StoryCashPaths};
//! use storycash::services::FinanceSession;
//! use storycash::storage::LedgerStore;
//!
//! let paths = StoryCashPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut store = LedgerStore::open(paths.ledger_file());
//! let session = FinanceSession::new(&mut store);
//! println!("{}", session.totals().balance);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod tips;

pub use error::{StoryCashError, StoryCashResult};
