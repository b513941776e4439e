//! Investment, SIP and vault display formatting

use tabled::Tabled;

use super::{format_return, table};
use crate::models::{return_percentage, Investment, Money, Sip, VaultEntry};

#[derive(Tabled)]
struct InvestmentRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Invested")]
    invested: String,
    #[tabled(rename = "Current")]
    current: String,
    #[tabled(rename = "Return")]
    returns: String,
}

/// Holdings with a portfolio total row
pub fn format_investment_list(investments: &[Investment], symbol: &str) -> String {
    if investments.is_empty() {
        return table(Vec::<InvestmentRow>::new(), "No investments found.");
    }

    let mut rows: Vec<InvestmentRow> = investments
        .iter()
        .map(|i| InvestmentRow {
            id: i.id.to_string(),
            name: i.name.clone(),
            kind: i.kind.clone(),
            invested: i.invested_amount.format_with_symbol(symbol),
            current: i.current_value.format_with_symbol(symbol),
            returns: format_return(i.returns),
        })
        .collect();

    let invested: Money = investments.iter().map(|i| i.invested_amount).sum();
    let current: Money = investments.iter().map(|i| i.current_value).sum();
    rows.push(InvestmentRow {
        id: String::new(),
        name: "PORTFOLIO".into(),
        kind: String::new(),
        invested: invested.format_with_symbol(symbol),
        current: current.format_with_symbol(symbol),
        returns: format_return(return_percentage(invested, current)),
    });
    table(rows, "")
}

#[derive(Tabled)]
struct SipRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Next debit")]
    next_debit: String,
    #[tabled(rename = "Total invested")]
    total: String,
}

pub fn format_sip_list(sips: &[Sip], symbol: &str) -> String {
    let rows = sips
        .iter()
        .map(|s| SipRow {
            id: s.id.to_string(),
            name: s.name.clone(),
            amount: s.amount.format_with_symbol(symbol),
            frequency: s.frequency.clone(),
            next_debit: s
                .next_debit_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".into()),
            total: s.total_invested.format_with_symbol(symbol),
        })
        .collect();
    table(rows, "No SIPs found.")
}

#[derive(Tabled)]
struct VaultRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

pub fn format_vault_list(entries: &[VaultEntry], symbol: &str) -> String {
    let rows = entries
        .iter()
        .map(|v| VaultRow {
            id: v.id.to_string(),
            name: v.name.clone(),
            category: v.category.clone(),
            amount: v.amount.format_with_symbol(symbol),
            notes: super::truncate(&v.notes, 30),
        })
        .collect();
    table(rows, "Vault is empty.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::InvestmentId;

    #[test]
    fn test_portfolio_row() {
        let holdings = [
            Investment {
                id: InvestmentId::from("i1"),
                name: "Index fund".into(),
                kind: "mutual funds".into(),
                invested_amount: Money::from_major(10_000),
                current_value: Money::from_major(11_500),
                returns: 15.0,
            },
            Investment {
                id: InvestmentId::from("i2"),
                name: "Gold".into(),
                kind: "gold".into(),
                invested_amount: Money::from_major(10_000),
                current_value: Money::from_major(10_000),
                returns: 0.0,
            },
        ];
        let output = format_investment_list(&holdings, "₹");
        assert!(output.contains("+15.0%"));
        assert!(output.contains("PORTFOLIO"));
        assert!(output.contains("+7.5%"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_sip_list(&[], "₹").contains("No SIPs found"));
        assert!(format_vault_list(&[], "₹").contains("Vault is empty"));
    }
}
