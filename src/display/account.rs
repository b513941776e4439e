//! Bank account and card display formatting

use tabled::Tabled;

use super::{format_percentage, table};
use crate::models::{BankAccount, CreditCard, DebitCard, Money};

#[derive(Tabled)]
struct BankAccountRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Bank")]
    bank: String,
    #[tabled(rename = "Type")]
    account_type: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Balance")]
    balance: String,
}

/// Accounts as a table with a total row
pub fn format_bank_account_list(accounts: &[BankAccount], symbol: &str) -> String {
    if accounts.is_empty() {
        return table(Vec::<BankAccountRow>::new(), "No bank accounts found.");
    }

    let mut rows: Vec<BankAccountRow> = accounts
        .iter()
        .map(|a| BankAccountRow {
            id: a.id.to_string(),
            bank: a.bank_name.clone(),
            account_type: a.account_type.clone(),
            number: a.masked_number().unwrap_or_default(),
            balance: a.balance.format_with_symbol(symbol),
        })
        .collect();

    let total: Money = accounts.iter().map(|a| a.balance).sum();
    rows.push(BankAccountRow {
        id: String::new(),
        bank: "TOTAL".into(),
        account_type: String::new(),
        number: String::new(),
        balance: total.format_with_symbol(symbol),
    });
    table(rows, "")
}

pub fn format_bank_account_details(account: &BankAccount, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Account: {}\n", account.bank_name));
    output.push_str(&format!("  ID:       {}\n", account.id));
    output.push_str(&format!("  Type:     {}\n", account.account_type));
    if let Some(number) = account.masked_number() {
        output.push_str(&format!("  Number:   {}\n", number));
    }
    output.push_str(&format!(
        "  Balance:  {}\n",
        account.balance.format_with_symbol(symbol)
    ));
    output
}

#[derive(Tabled)]
struct CreditCardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Card")]
    name: String,
    #[tabled(rename = "Issuer")]
    issuer: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Balance")]
    balance: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Due")]
    due: String,
}

pub fn format_credit_card_list(cards: &[CreditCard], symbol: &str) -> String {
    let rows = cards
        .iter()
        .map(|c| CreditCardRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            issuer: c.issuer.clone(),
            limit: c.credit_limit.format_with_symbol(symbol),
            balance: c.current_balance.format_with_symbol(symbol),
            used: format_percentage(c.utilization()),
            due: c
                .due_day()
                .map(|d| format!("day {}", d))
                .unwrap_or_else(|| "-".into()),
        })
        .collect();
    table(rows, "No credit cards found.")
}

pub fn format_credit_card_details(card: &CreditCard, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!("Credit card: {}\n", card.name));
    output.push_str(&format!("  ID:            {}\n", card.id));
    if !card.issuer.is_empty() {
        output.push_str(&format!("  Issuer:        {}\n", card.issuer));
    }
    if !card.network.is_empty() {
        output.push_str(&format!("  Network:       {}\n", card.network));
    }
    output.push_str(&format!(
        "  Limit:         {}\n",
        card.credit_limit.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Balance:       {}\n",
        card.current_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Available:     {}\n",
        card.available_credit().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Utilization:   {}\n",
        format_percentage(card.utilization())
    ));
    let minimum = card.minimum_due().format_with_symbol(symbol);
    match card.due_day() {
        Some(day) => output.push_str(&format!(
            "  Minimum due:   {} (day {} of the month)\n",
            minimum, day
        )),
        None => output.push_str(&format!("  Minimum due:   {} (due day not set)\n", minimum)),
    }
    output
}

#[derive(Tabled)]
struct DebitCardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Card")]
    name: String,
    #[tabled(rename = "Bank")]
    bank: String,
    #[tabled(rename = "Network")]
    network: String,
    #[tabled(rename = "Number")]
    number: String,
    #[tabled(rename = "Linked account")]
    linked: String,
}

/// Debit cards; `accounts` resolves linked account ids to bank names
pub fn format_debit_card_list(cards: &[DebitCard], accounts: &[BankAccount]) -> String {
    let rows = cards
        .iter()
        .map(|c| DebitCardRow {
            id: c.id.to_string(),
            name: c.name.clone(),
            bank: c.bank_name.clone(),
            network: c.network.clone(),
            number: c
                .last_four
                .as_ref()
                .map(|d| format!("••{}", d))
                .unwrap_or_default(),
            linked: c
                .linked_account_id
                .as_ref()
                .map(|id| {
                    accounts
                        .iter()
                        .find(|a| &a.id == id)
                        .map(|a| a.to_string())
                        .unwrap_or_else(|| id.to_string())
                })
                .unwrap_or_default(),
        })
        .collect();
    table(rows, "No debit cards found.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BankAccountId, CreditCardId, DebitCardId};

    fn account(name: &str, balance: i64) -> BankAccount {
        BankAccount {
            id: BankAccountId::from(name.to_lowercase().as_str()),
            bank_name: name.into(),
            account_type: "savings".into(),
            balance: Money::from_major(balance),
            account_number: Some("12345678".into()),
        }
    }

    #[test]
    fn test_bank_account_list() {
        let output = format_bank_account_list(&[account("HDFC", 1000), account("SBI", 500)], "₹");
        assert!(output.contains("HDFC"));
        assert!(output.contains("••5678"));
        assert!(output.contains("TOTAL"));
        assert!(output.contains("₹1,500.00"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_bank_account_list(&[], "₹").contains("No bank accounts found"));
        assert!(format_credit_card_list(&[], "₹").contains("No credit cards found"));
    }

    #[test]
    fn test_credit_card_details() {
        let card = CreditCard {
            id: CreditCardId::from("cc1"),
            name: "Millennia".into(),
            issuer: "HDFC".into(),
            network: "Visa".into(),
            credit_limit: Money::from_major(100_000),
            current_balance: Money::from_major(25_000),
            due_date: 15,
        };
        let output = format_credit_card_details(&card, "₹");
        assert!(output.contains("Available:     ₹75,000.00"));
        assert!(output.contains("Minimum due:   ₹1,250.00 (day 15"));
    }

    #[test]
    fn test_debit_card_linked_account() {
        let card = DebitCard {
            id: DebitCardId::from("dc1"),
            name: "Salary card".into(),
            bank_name: "HDFC".into(),
            network: "RuPay".into(),
            last_four: Some("4321".into()),
            linked_account_id: Some(BankAccountId::from("hdfc")),
        };
        let output = format_debit_card_list(&[card], &[account("HDFC", 10)]);
        assert!(output.contains("HDFC (savings)"));
        assert!(output.contains("••4321"));
    }
}
