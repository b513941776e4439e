//! Display formatting for terminal output
//!
//! List views are rendered as tables; detail and dashboard views are plain
//! aligned text. Every function returns a `String` so the CLI decides where
//! it goes.

pub mod account;
pub mod dashboard;
pub mod investment;
pub mod transaction;

pub use account::{
    format_bank_account_details, format_bank_account_list, format_credit_card_details,
    format_credit_card_list, format_debit_card_list,
};
pub use dashboard::{
    format_cash_flow, format_dashboard, format_insights, format_overview, format_spend_type,
};
pub use investment::{format_investment_list, format_sip_list, format_vault_list};
pub use transaction::{
    format_budget_list, format_category_list, format_commitment_list, format_transaction_details,
    format_transaction_list,
};

use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Render rows as a table, or `empty` when there are none
pub(crate) fn table<T: Tabled>(rows: Vec<T>, empty: &str) -> String {
    if rows.is_empty() {
        return format!("{}\n", empty);
    }
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    format!("{}\n", table)
}

/// Format a percentage with sensible precision
pub fn format_percentage(pct: f64) -> String {
    if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// A signed percentage, as shown for returns ("+15.0%")
pub fn format_return(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Horizontal bar, `width` cells wide
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }
    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate on a character boundary, adding an ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 1 {
        "…".to_string()
    } else {
        let head: String = s.chars().take(max_len - 1).collect();
        format!("{}…", head)
    }
}

pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct Row {
        #[tabled(rename = "Name")]
        name: &'static str,
    }

    #[test]
    fn test_table_empty() {
        assert_eq!(table(Vec::<Row>::new(), "Nothing here."), "Nothing here.\n");
        assert!(table(vec![Row { name: "HDFC" }], "-").contains("HDFC"));
    }

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(5.26), "5.3%");
        assert_eq!(format_percentage(42.4), "42%");
        assert_eq!(format_return(15.0), "+15.0%");
        assert_eq!(format_return(-2.5), "-2.5%");
        assert_eq!(format_return(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        let bar = format_bar(50.0, 100.0, 10);
        assert_eq!(bar.chars().filter(|c| *c == '█').count(), 5);
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("Electricity bill", 6), "Elect…");
        assert_eq!(truncate("₹₹₹₹", 3), "₹₹…");
    }
}
