//! Tips CLI command

use std::sync::Arc;

use tracing::warn;

use crate::config::{Settings, StoryCashPaths};
use crate::display::report::format_tips;
use crate::tips::{bundled_tips, HttpTipSource, TipSource, TipsCache, TipsOrigin};

/// Build the tips cache from settings
pub fn build_tips_cache(paths: &StoryCashPaths, settings: &Settings) -> TipsCache {
    let source: Option<Arc<dyn TipSource>> = match settings.tips_url.as_deref() {
        Some(url) => match HttpTipSource::new(url, settings.tips_timeout()) {
            Ok(source) => Some(Arc::new(source) as Arc<dyn TipSource>),
            Err(e) => {
                warn!("Remote tips disabled: {}", e);
                None
            }
        },
        None => None,
    };

    TipsCache::new(
        paths.tips_cache_file(),
        source,
        settings.tips_timeout(),
        bundled_tips(),
    )
}

/// Print the tips, refreshing first when asked
pub async fn handle_tips_command(paths: &StoryCashPaths, settings: &Settings, refresh: bool) {
    let cache = build_tips_cache(paths, settings);
    if refresh {
        cache.refresh().await;
    }

    print!("{}", format_tips(&cache.current_items()));

    let origin = match cache.origin() {
        TipsOrigin::Remote => "remote",
        TipsOrigin::Cache => "cache",
        TipsOrigin::Bundled => "bundled",
    };
    println!("\n(source: {})", origin);
}
