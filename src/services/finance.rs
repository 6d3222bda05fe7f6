//! Finance session
//!
//! A facade over the ledger store holding what the main screen needs:
//! the selected polarity, the selected category for each polarity, the
//! display mode and look-back interval, and cached totals. Totals are
//! recomputed after every mutation made through the session, or on an
//! explicit `refresh_totals` call.

use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::StoryCashResult;
use crate::models::{
    Category, DateRange, Interval, Money, Transaction, TransactionId, TransactionType,
};
use crate::storage::LedgerStore;

/// Which total the main screen highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    Income,
    #[default]
    Balance,
    Expense,
}

impl DisplayMode {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Balance => "Balance",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "balance" => Ok(Self::Balance),
            "expense" => Ok(Self::Expense),
            other => Err(format!("Unknown display mode: {}", other)),
        }
    }
}

/// Income, expense and balance computed together
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub income: Money,
    pub expense: Money,
    pub balance: Money,
}

impl Totals {
    /// The figure matching `mode`
    pub fn for_mode(&self, mode: DisplayMode) -> Money {
        match mode {
            DisplayMode::Income => self.income,
            DisplayMode::Balance => self.balance,
            DisplayMode::Expense => self.expense,
        }
    }
}

/// Session state layered over a borrowed ledger store
pub struct FinanceSession<'a> {
    store: &'a mut LedgerStore,
    selected_type: TransactionType,
    selected_income: Option<Category>,
    selected_expense: Option<Category>,
    interval: Interval,
    mode: DisplayMode,
    totals: Totals,
}

impl<'a> FinanceSession<'a> {
    /// Create a session and compute the initial totals
    pub fn new(store: &'a mut LedgerStore) -> Self {
        let mut session = Self {
            store,
            selected_type: TransactionType::Expense,
            selected_income: None,
            selected_expense: None,
            interval: Interval::default(),
            mode: DisplayMode::default(),
            totals: Totals::default(),
        };
        session.setup_initial_categories();
        session.refresh_totals();
        debug!("Finance session started:\n{}", session.store.info());
        session
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &LedgerStore {
        &*self.store
    }

    fn setup_initial_categories(&mut self) {
        if self.selected_income.is_none() {
            self.selected_income = self
                .store
                .categories_of_type(TransactionType::Income)
                .into_iter()
                .next();
        }
        if self.selected_expense.is_none() {
            self.selected_expense = self
                .store
                .categories_of_type(TransactionType::Expense)
                .into_iter()
                .next();
        }
    }

    /// Recompute income, expense and balance in one pass
    pub fn refresh_totals(&mut self) {
        let mut totals = Totals::default();
        for txn in self.store.transactions() {
            match txn.transaction_type {
                TransactionType::Income => totals.income += txn.value,
                TransactionType::Expense => totals.expense += txn.value,
            }
        }
        totals.balance = totals.income - totals.expense;
        self.totals = totals;
    }

    /// Totals as of the last mutation or refresh
    pub fn totals(&self) -> Totals {
        self.totals
    }

    /// The cached total for the current display mode
    pub fn displayed_total(&self) -> Money {
        self.totals.for_mode(self.mode)
    }

    /// Totals over the selected interval ending at `now`
    pub fn interval_totals(&self, now: DateTime<Utc>) -> Totals {
        self.range_totals(&self.interval.range_ending(now))
    }

    /// Totals over an arbitrary closed range
    pub fn range_totals(&self, range: &DateRange) -> Totals {
        Totals {
            income: self.store.total_income_in(range),
            expense: self.store.total_expense_in(range),
            balance: self.store.balance_in(range),
        }
    }

    // Transactions

    /// Record a new transaction against a snapshot of `category`
    pub fn save_transaction(
        &mut self,
        value: Money,
        transaction_type: TransactionType,
        category: &Category,
        date: DateTime<Utc>,
    ) -> StoryCashResult<Transaction> {
        let txn = Transaction::with_type(value, date, transaction_type, category.clone());
        self.store.add_transaction(txn.clone())?;
        self.refresh_totals();
        Ok(txn)
    }

    /// Replace an existing transaction; `Ok(false)` if the ID is unknown
    pub fn update_transaction(&mut self, updated: Transaction) -> StoryCashResult<bool> {
        let applied = self.store.update_transaction(updated)?;
        self.refresh_totals();
        Ok(applied)
    }

    pub fn delete_transaction(&mut self, id: TransactionId) -> bool {
        let removed = self.store.delete_transaction(id);
        self.refresh_totals();
        removed
    }

    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// Find a transaction by full ID or short ID (`txn-1234abcd`)
    pub fn find_transaction(&self, identifier: &str) -> Option<&Transaction> {
        let identifier = identifier.trim();
        if let Ok(id) = identifier.parse::<TransactionId>() {
            return self.store.transaction(id);
        }
        self.store
            .transactions()
            .iter()
            .find(|t| t.id.short() == identifier)
    }

    /// All transactions, newest first
    pub fn transactions_newest_first(&self) -> Vec<Transaction> {
        let mut transactions = self.store.transactions().to_vec();
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        transactions
    }

    /// The `limit` most recent transactions
    pub fn recent_transactions(&self, limit: usize) -> Vec<Transaction> {
        let mut transactions = self.transactions_newest_first();
        transactions.truncate(limit);
        transactions
    }

    // Categories

    pub fn categories(&self) -> &[Category] {
        self.store.categories()
    }

    pub fn categories_of_type(&self, transaction_type: TransactionType) -> Vec<Category> {
        self.store.categories_of_type(transaction_type)
    }

    // Selection state

    pub fn selected_type(&self) -> TransactionType {
        self.selected_type
    }

    pub fn set_selected_type(&mut self, transaction_type: TransactionType) {
        self.selected_type = transaction_type;
    }

    /// The chosen category for a polarity
    pub fn selected_category(&self, transaction_type: TransactionType) -> Option<&Category> {
        match transaction_type {
            TransactionType::Income => self.selected_income.as_ref(),
            TransactionType::Expense => self.selected_expense.as_ref(),
        }
    }

    /// Remember `category` as the choice for its own polarity
    pub fn select_category(&mut self, category: Category) {
        match category.transaction_type {
            TransactionType::Income => self.selected_income = Some(category),
            TransactionType::Expense => self.selected_expense = Some(category),
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: DisplayMode) {
        self.mode = mode;
    }

    pub fn interval(&self) -> Interval {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    /// Wipe the ledger back to defaults and re-derive everything
    pub fn reset(&mut self) -> StoryCashResult<()> {
        let saved = self.store.reset();
        self.selected_income = None;
        self.selected_expense = None;
        self.setup_initial_categories();
        self.refresh_totals();
        saved
    }
}
