//! Transaction form

use chrono::{Local, NaiveDate};

use super::{amount_text, parse_amount, require, EntityForm};
use crate::context::FinanceContext;
use crate::models::dates::parse_date;
use crate::models::{BankAccountId, Transaction, TransactionId, TransactionType};
use crate::stores::TransactionStore;

#[derive(Debug, Clone)]
pub struct TransactionForm {
    pub kind: TransactionType,
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`; defaults to today
    pub date: String,
    pub description: String,
    /// Optional bank account id
    pub account_id: String,
}

impl Default for TransactionForm {
    fn default() -> Self {
        Self {
            kind: TransactionType::Expense,
            amount: String::new(),
            category: String::new(),
            date: Local::now().date_naive().format("%Y-%m-%d").to_string(),
            description: String::new(),
            account_id: String::new(),
        }
    }
}

impl TransactionForm {
    fn parsed_date(&self) -> Result<NaiveDate, String> {
        let raw = require("Date", &self.date)?;
        parse_date(&raw).ok_or_else(|| "Date must be in YYYY-MM-DD format".to_string())
    }
}

impl EntityForm for TransactionForm {
    type Record = Transaction;

    fn from_record(record: &Transaction) -> Self {
        Self {
            kind: record.kind,
            amount: amount_text(record.amount),
            category: record.category.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
            description: record.description.clone(),
            account_id: record
                .account_id
                .as_ref()
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }

    fn validate(&self) -> Result<(), String> {
        let amount = parse_amount("Amount", &self.amount)?;
        if amount.is_zero() {
            return Err("Amount must be greater than zero".into());
        }
        require("Category", &self.category)?;
        self.parsed_date()?;
        Ok(())
    }

    fn build(&self) -> Result<Transaction, String> {
        self.validate()?;
        let account_id = self.account_id.trim();
        Ok(Transaction {
            id: TransactionId::unassigned(),
            kind: self.kind,
            amount: parse_amount("Amount", &self.amount)?,
            category: require("Category", &self.category)?,
            date: self.parsed_date()?,
            description: self.description.trim().to_string(),
            account_id: (!account_id.is_empty()).then(|| BankAccountId::from(account_id)),
        })
    }

    fn store(ctx: &FinanceContext) -> &TransactionStore {
        &ctx.transactions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::testing::fixture;
    use crate::modals::Modal;
    use crate::models::Money;
    use crate::notify::NotificationType;

    fn filled() -> TransactionForm {
        TransactionForm {
            amount: "1,250.50".into(),
            category: "Groceries".into(),
            date: "2024-05-03".into(),
            description: "Weekly shop".into(),
            ..TransactionForm::default()
        }
    }

    #[test]
    fn test_build_record() {
        let txn = filled().build().unwrap();
        assert_eq!(txn.amount, Money::from_cents(125_050));
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        assert!(txn.account_id.is_none());
    }

    #[test]
    fn test_validation_messages() {
        let mut form = filled();
        form.amount = "0".into();
        assert_eq!(form.validate().unwrap_err(), "Amount must be greater than zero");

        let mut form = filled();
        form.category = "  ".into();
        assert_eq!(form.validate().unwrap_err(), "Category is required");

        let mut form = filled();
        form.date = "03/05/2024".into();
        assert_eq!(form.validate().unwrap_err(), "Date must be in YYYY-MM-DD format");
    }

    #[test]
    fn test_edit_prefill_round_trip() {
        let txn = filled().build().unwrap();
        let form = TransactionForm::from_record(&txn);
        assert_eq!(form.amount, "1250.50");
        assert_eq!(form.build().unwrap(), txn);
    }

    #[tokio::test]
    async fn test_save_then_edit_then_delete() {
        let fx = fixture();
        let mut modal = Modal::<TransactionForm>::new();

        modal.open(None);
        modal.form = filled();
        let saved = modal.save(&fx.ctx).await.unwrap();
        assert!(!modal.is_open());
        assert_eq!(fx.backend.collection("transactions").len(), 1);

        modal.open(Some(&saved));
        assert!(modal.is_edit());
        modal.form.description = "Monthly shop".into();
        let updated = modal.save(&fx.ctx).await.unwrap();
        assert_eq!(updated.id, saved.id);
        assert_eq!(fx.backend.collection("transactions")[0]["description"], "Monthly shop");

        modal.open(Some(&updated));
        modal.delete(&fx.ctx).await.unwrap();
        assert!(fx.backend.collection("transactions").is_empty());
        assert_eq!(fx.log.messages(NotificationType::Success).len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_form_sends_nothing() {
        let fx = fixture();
        let mut modal = Modal::<TransactionForm>::new();
        modal.open(None);

        let err = modal.save(&fx.ctx).await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(modal.error_message(), Some("Amount is required"));
        assert!(modal.is_open());
        assert_eq!(fx.backend.request_count(), 0);
    }
}
