//! Transaction CLI commands
//!
//! Implements `add`, `list`, `edit` and `delete`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::Subcommand;

use crate::config::Settings;
use crate::display::transaction::{format_transaction_details, format_transaction_register};
use crate::error::{StoryCashError, StoryCashResult};
use crate::models::{DateRange, Money, Transaction, TransactionType};
use crate::services::{CategoryService, FinanceSession};
use crate::storage::LedgerStore;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Amount (e.g., "42.50"); never negative, use --income for income
        amount: String,
        /// Record as income instead of expense
        #[arg(short, long)]
        income: bool,
        /// Category title or ID; defaults to the first category of the type
        #[arg(short, long)]
        category: Option<String>,
        /// Transaction date (YYYY-MM-DD), defaults to now
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions, newest first
    List {
        /// Only show income or expense
        #[arg(short = 't', long = "type")]
        transaction_type: Option<TransactionType>,
        /// Start date (YYYY-MM-DD), inclusive
        #[arg(long)]
        from: Option<String>,
        /// End date (YYYY-MM-DD), inclusive
        #[arg(long)]
        to: Option<String>,
        /// Number of transactions to show (0 for all)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        id: String,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New category of the same type
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    store: &mut LedgerStore,
    settings: &Settings,
    cmd: TransactionCommands,
) -> StoryCashResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        TransactionCommands::Add {
            amount,
            income,
            category,
            date,
        } => {
            let transaction_type = if income {
                TransactionType::Income
            } else {
                TransactionType::Expense
            };
            let value = parse_amount(&amount)?;
            let date = match date {
                Some(date_str) => start_of_day(parse_date(&date_str)?),
                None => Utc::now(),
            };

            let category = match category {
                Some(identifier) => CategoryService::new(store)
                    .find_category(&identifier, Some(transaction_type))
                    .ok_or_else(|| StoryCashError::category_not_found(identifier))?,
                None => FinanceSession::new(store)
                    .selected_category(transaction_type)
                    .cloned()
                    .ok_or_else(|| {
                        StoryCashError::Validation(format!(
                            "No {} categories exist; add one with 'storycash category add'",
                            transaction_type
                        ))
                    })?,
            };

            let mut session = FinanceSession::new(store);
            session.select_category(category.clone());
            let txn = session.save_transaction(value, transaction_type, &category, date)?;

            println!("Created transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::List {
            transaction_type,
            from,
            to,
            limit,
        } => {
            let from = from.as_deref().map(parse_date).transpose()?;
            let to = to.as_deref().map(parse_date).transpose()?;
            if let (Some(from), Some(to)) = (from, to) {
                // Rejects an inverted range
                DateRange::from_dates(from, to)
                    .map_err(|e| StoryCashError::Validation(e.to_string()))?;
            }

            let session = FinanceSession::new(store);
            let mut transactions: Vec<Transaction> = session
                .transactions_newest_first()
                .into_iter()
                .filter(|t| transaction_type.map_or(true, |ty| t.transaction_type == ty))
                .filter(|t| from.map_or(true, |d| t.date.date_naive() >= d))
                .filter(|t| to.map_or(true, |d| t.date.date_naive() <= d))
                .collect();

            let total = transactions.len();
            let limit = limit.unwrap_or(settings.recent_limit);
            if limit > 0 {
                transactions.truncate(limit);
            }

            print!("{}", format_transaction_register(&transactions, symbol));
            println!("\nShowing {} of {} transactions", transactions.len(), total);
        }

        TransactionCommands::Edit {
            id,
            amount,
            date,
            category,
        } => {
            let mut txn = FinanceSession::new(store)
                .find_transaction(&id)
                .cloned()
                .ok_or_else(|| StoryCashError::transaction_not_found(&id))?;

            if let Some(amount) = amount {
                txn.value = parse_amount(&amount)?;
            }
            if let Some(date_str) = date {
                txn.date = start_of_day(parse_date(&date_str)?);
            }
            if let Some(identifier) = category {
                txn.category = CategoryService::new(store)
                    .find_category(&identifier, Some(txn.transaction_type))
                    .ok_or_else(|| StoryCashError::category_not_found(identifier))?;
            }

            let mut session = FinanceSession::new(store);
            if !session.update_transaction(txn.clone())? {
                return Err(StoryCashError::transaction_not_found(id));
            }

            println!("Updated transaction:");
            print!("{}", format_transaction_details(&txn, symbol));
        }

        TransactionCommands::Delete { id } => {
            let mut session = FinanceSession::new(store);
            let txn_id = session
                .find_transaction(&id)
                .map(|t| t.id)
                .ok_or_else(|| StoryCashError::transaction_not_found(&id))?;

            session.delete_transaction(txn_id);
            println!("Deleted transaction {}", txn_id.short());
        }
    }

    Ok(())
}

/// Parse a user-supplied amount
pub(crate) fn parse_amount(amount: &str) -> StoryCashResult<Money> {
    Money::parse(amount).map_err(|e| {
        StoryCashError::Validation(format!(
            "Invalid amount: '{}'. Use a non-negative number like '42.50'. Error: {}",
            amount, e
        ))
    })
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(date_str: &str) -> StoryCashResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        StoryCashError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}
