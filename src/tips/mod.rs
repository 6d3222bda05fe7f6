//! Advisory tips
//!
//! A read-mostly list of short tips with graceful degradation: remote source,
//! then the on-disk cache, then the list compiled into the binary.

pub mod cache;
pub mod source;

pub use cache::{TipsCache, TipsOrigin};
pub use source::{HttpTipSource, TipSource};

use tracing::error;

use crate::models::Tip;

const BUNDLED_TIPS: &str = include_str!("../../assets/tips.json");

/// The tips shipped with the binary
pub fn bundled_tips() -> Vec<Tip> {
    match serde_json::from_str(BUNDLED_TIPS) {
        Ok(tips) => tips,
        Err(e) => {
            error!("Bundled tips are malformed: {}", e);
            Vec::new()
        }
    }
}
