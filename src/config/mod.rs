//! Configuration module for StoryCash
//!
//! This module provides configuration management including:
//! - Base directory resolution with an environment override
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StoryCashPaths;
pub use settings::Settings;
