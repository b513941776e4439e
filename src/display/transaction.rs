//! Transaction, category, budget and commitment display formatting

use tabled::Tabled;

use super::{format_bar, format_percentage, table, truncate};
use crate::models::{BudgetCategory, Category, Commitment, Money, Transaction};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Transactions newest first, income positive and expenses negative
pub fn format_transaction_list(transactions: &[Transaction], symbol: &str) -> String {
    let mut sorted: Vec<&Transaction> = transactions.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));

    let rows = sorted
        .into_iter()
        .map(|t| TransactionRow {
            id: t.id.to_string(),
            date: t.date.format("%Y-%m-%d").to_string(),
            category: t.category.clone(),
            description: truncate(&t.description, 30),
            amount: t.signed_amount().format_with_symbol(symbol),
        })
        .collect();
    table(rows, "No transactions found.")
}

pub fn format_transaction_details(txn: &Transaction, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!("Date:        {}\n", txn.date.format("%Y-%m-%d")));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    if !txn.description.is_empty() {
        output.push_str(&format!("Description: {}\n", txn.description));
    }
    if let Some(account) = &txn.account_id {
        output.push_str(&format!("Account:     {}\n", account));
    }
    output
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Used")]
    used: u32,
}

pub fn format_category_list(categories: &[Category]) -> String {
    let rows = categories
        .iter()
        .map(|c| CategoryRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: c.kind.to_string(),
            used: c.usage_count,
        })
        .collect();
    table(rows, "No categories found.")
}

/// Budgets with a usage bar; over-budget rows are flagged
pub fn format_budget_list(budgets: &[BudgetCategory], symbol: &str) -> String {
    if budgets.is_empty() {
        return "No budgets found.\n".to_string();
    }

    let name_width = budgets
        .iter()
        .map(|b| b.name.chars().count())
        .max()
        .unwrap_or(8)
        .max(8);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}  {:<12}  {}\n",
        "Category",
        "Spent",
        "Limit",
        "",
        "Used",
        name_width = name_width,
    ));
    for budget in budgets {
        let flag = if budget.is_over_budget() { "  OVER" } else { "" };
        output.push_str(&format!(
            "{:<name_width$}  {:>14}  {:>14}  {}  {}{}\n",
            budget.name,
            budget.spent.format_with_symbol(symbol),
            budget.budget_limit.format_with_symbol(symbol),
            format_bar(budget.utilization(), 100.0, 12),
            format_percentage(budget.utilization()),
            flag,
            name_width = name_width,
        ));
    }

    let spent: Money = budgets.iter().map(|b| b.spent).sum();
    let limit: Money = budgets.iter().map(|b| b.budget_limit).sum();
    output.push_str(&format!(
        "{:<name_width$}  {:>14}  {:>14}\n",
        "TOTAL",
        spent.format_with_symbol(symbol),
        limit.format_with_symbol(symbol),
        name_width = name_width,
    ));
    output
}

#[derive(Tabled)]
struct CommitmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Due")]
    due: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub fn format_commitment_list(commitments: &[Commitment], symbol: &str) -> String {
    let rows = commitments
        .iter()
        .map(|c| CommitmentRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            kind: c.kind.clone(),
            due: c.due_date.clone(),
            amount: c.amount.format_with_symbol(symbol),
        })
        .collect();
    table(rows, "No commitments found.")
}
