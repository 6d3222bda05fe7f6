//! Statistics CLI command

use chrono::{DateTime, Utc};

use crate::config::Settings;
use crate::display::report::{format_stats, format_totals};
use crate::error::{StoryCashError, StoryCashResult};
use crate::models::{DateRange, Interval};
use crate::services::{DisplayMode, FinanceSession};
use crate::storage::LedgerStore;

use super::transaction::parse_date;

/// Print all-time totals, then totals for an interval or an explicit range
pub fn handle_stats_command(
    store: &mut LedgerStore,
    settings: &Settings,
    interval: Interval,
    from: Option<String>,
    to: Option<String>,
    now: DateTime<Utc>,
) -> StoryCashResult<()> {
    let symbol = settings.currency_symbol.as_str();
    let mut session = FinanceSession::new(store);
    session.set_interval(interval);

    println!("All time");
    print!(
        "{}",
        format_totals(&session.totals(), DisplayMode::Balance, symbol)
    );
    println!();

    match (from, to) {
        (Some(from), Some(to)) => {
            let range = DateRange::from_dates(parse_date(&from)?, parse_date(&to)?)
                .map_err(|e| StoryCashError::Validation(e.to_string()))?;
            let totals = session.range_totals(&range);
            print!("{}", format_stats(&range.to_string(), &totals, symbol));
        }
        (None, None) => {
            let totals = session.interval_totals(now);
            print!("{}", format_stats(interval.label(), &totals, symbol));
        }
        _ => {
            return Err(StoryCashError::Validation(
                "--from and --to must be given together".into(),
            ))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_half_open_range_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::open(temp_dir.path().join("app_data.json"));

        let err = handle_stats_command(
            &mut store,
            &Settings::default(),
            Interval::Week,
            Some("2025-01-01".into()),
            None,
            Utc::now(),
        )
        .unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_interval_and_range() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = LedgerStore::open(temp_dir.path().join("app_data.json"));

        handle_stats_command(&mut store, &Settings::default(), Interval::Year, None, None, Utc::now())
            .unwrap();
        handle_stats_command(
            &mut store,
            &Settings::default(),
            Interval::Week,
            Some("2025-01-01".into()),
            Some("2025-01-31".into()),
            Utc::now(),
        )
        .unwrap();
    }
}
