//! Summary formatting for totals, statistics and tips

use crate::models::{Money, Tip};
use crate::services::{DisplayMode, Totals};

const BAR_WIDTH: usize = 30;

/// One line per figure, with the highlighted one marked
pub fn format_totals(totals: &Totals, highlighted: DisplayMode, symbol: &str) -> String {
    let mut output = String::new();

    for mode in [DisplayMode::Income, DisplayMode::Expense, DisplayMode::Balance] {
        let marker = if mode == highlighted { "▶" } else { " " };
        output.push_str(&format!(
            "{} {:8} {:>14}\n",
            marker,
            mode.title(),
            totals.for_mode(mode).format_with_symbol(symbol)
        ));
    }

    output
}

/// Income and expense over a period, side by side as bars
pub fn format_stats(label: &str, totals: &Totals, symbol: &str) -> String {
    let income = totals.income.value();
    let expense = totals.expense.value();
    let max = income.max(expense);

    let mut output = String::new();
    output.push_str(&format!("{}\n", label));
    output.push_str(&separator(label.chars().count().max(BAR_WIDTH + 26)));
    output.push('\n');
    output.push_str(&format!(
        "Income   {:>14}  {}\n",
        totals.income.format_with_symbol(symbol),
        format_bar(income, max, BAR_WIDTH)
    ));
    output.push_str(&format!(
        "Expense  {:>14}  {}\n",
        totals.expense.format_with_symbol(symbol),
        format_bar(expense, max, BAR_WIDTH)
    ));
    output.push_str(&format!(
        "Balance  {:>14}\n",
        totals.balance.format_with_symbol(symbol)
    ));

    if income > 0.0 {
        output.push_str(&format!(
            "Spent {} of income\n",
            format_percentage(expense / income * 100.0)
        ));
    }

    output
}

/// Numbered tip list
pub fn format_tips(tips: &[Tip]) -> String {
    if tips.is_empty() {
        return "No tips available.\n".to_string();
    }

    let mut output = String::new();
    for (i, tip) in tips.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!("{}. {}\n", i + 1, tip.title));
        output.push_str(&format!("   {}\n", tip.body));
    }
    output
}

/// Format a money amount with color hints for terminal display
pub fn format_money_colored(amount: Money, symbol: &str) -> String {
    let text = amount.format_with_symbol(symbol);
    if amount.is_negative() {
        format!("\x1b[31m{}\x1b[0m", text)
    } else if amount.value() > 0.0 {
        format!("\x1b[32m{}\x1b[0m", text)
    } else {
        text
    }
}

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn separator(width: usize) -> String {
    "─".repeat(width)
}
