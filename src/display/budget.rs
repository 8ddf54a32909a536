//! Budget status display formatting

use crate::models::{BudgetStatus, Money, Period};

use super::format::{format_bar, format_percentage};

/// Format budget status rows as a table with usage bars
pub fn format_budget_status(statuses: &[BudgetStatus], period: Period) -> String {
    if statuses.is_empty() {
        return "No budgets set. Use 'finsight budget set <category> <amount>' first.".to_string();
    }

    let category_width = statuses
        .iter()
        .map(|s| s.category.len())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!("Budget Status - {}\n\n", period));

    output.push_str(&format!(
        "{:<category_width$}  {:>12}  {:>12}  {:>12}  {:<12}  {:>7}\n",
        "Category",
        "Limit",
        "Spent",
        "Remaining",
        "Usage",
        "Used",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:-<category_width$}  {:->12}  {:->12}  {:->12}  {:-<12}  {:->7}\n",
        "",
        "",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));

    for status in statuses {
        let (bar, used) = match status.percent_used() {
            Some(pct) => (
                format_bar(pct.min(100.0), 100.0, 12),
                format_percentage(pct),
            ),
            // Zero limit: any spending is over, and a ratio is undefined
            None => (" ".repeat(12), "-".to_string()),
        };

        let marker = if status.over_budget { " *" } else { "" };

        output.push_str(&format!(
            "{:<category_width$}  {:>12}  {:>12}  {:>12}  {:<12}  {:>7}{}\n",
            status.category,
            status.limit,
            status.spent,
            status.remaining,
            bar,
            used,
            marker,
            category_width = category_width,
        ));
    }

    let total_limit: Money = statuses.iter().map(|s| s.limit).sum();
    let total_spent: Money = statuses.iter().map(|s| s.spent).sum();
    let total_remaining: Money = statuses.iter().map(|s| s.remaining).sum();

    output.push_str(&format!(
        "{:-<category_width$}  {:->12}  {:->12}  {:->12}\n",
        "",
        "",
        "",
        "",
        category_width = category_width,
    ));
    output.push_str(&format!(
        "{:<category_width$}  {:>12}  {:>12}  {:>12}\n",
        "TOTAL",
        total_limit,
        total_spent,
        total_remaining,
        category_width = category_width,
    ));

    let over_count = statuses.iter().filter(|s| s.over_budget).count();
    if over_count > 0 {
        output.push_str("\n* = Over budget\n");
    }

    output
}
