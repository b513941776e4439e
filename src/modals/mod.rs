//! Add/edit/delete forms
//!
//! Each entity has a form type holding the raw field text. A [`Modal`]
//! wraps a form with open/save/delete: validation happens locally before
//! any request, then the record goes to the matching store in the finance
//! context.

pub mod account;
pub mod budget;
pub mod card;
pub mod category;
pub mod choice;
pub mod commitment;
pub mod delete_account;
pub mod investment;
pub mod transaction;
pub mod vault;

pub use account::BankAccountForm;
pub use budget::BudgetForm;
pub use card::{CreditCardForm, DebitCardForm};
pub use category::CategoryForm;
pub use choice::{ChoiceField, ChoiceValue, CUSTOM_ENTRY};
pub use commitment::CommitmentForm;
pub use delete_account::DeleteAccountModal;
pub use investment::{InvestmentForm, SipForm};
pub use transaction::TransactionForm;
pub use vault::VaultForm;

use tracing::debug;

use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{Money, Resource, UserOptions};
use crate::notify::Notification;
use crate::stores::EntityStore;

/// Form state for one record type
pub trait EntityForm: Default {
    type Record: Resource;

    /// Pre-fill from an existing record
    fn from_record(record: &Self::Record) -> Self;

    /// Check field text; the message is shown to the user as-is
    fn validate(&self) -> Result<(), String>;

    /// Validate and build the record to send
    fn build(&self) -> Result<Self::Record, String>;

    /// The store this form saves into
    fn store(ctx: &FinanceContext) -> &EntityStore<Self::Record>;

    /// Refresh choice fields from the user's option lists
    fn apply_options(&mut self, _options: &UserOptions) {}
}

pub struct Modal<F: EntityForm> {
    pub form: F,
    editing: Option<<F::Record as Resource>::Id>,
    open: bool,
    error_message: Option<String>,
}

impl<F: EntityForm> Default for Modal<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: EntityForm> Modal<F> {
    pub fn new() -> Self {
        Self {
            form: F::default(),
            editing: None,
            open: false,
            error_message: None,
        }
    }

    /// Open for editing `existing`, or reset to a blank form
    pub fn open(&mut self, existing: Option<&F::Record>) {
        self.form = existing.map(F::from_record).unwrap_or_default();
        self.editing = existing.map(|r| r.id().clone());
        self.open = true;
        self.error_message = None;
    }

    /// Like [`open`](Self::open), with choice fields drawn from `options`
    pub fn open_with(&mut self, existing: Option<&F::Record>, options: &UserOptions) {
        self.open(existing);
        self.form.apply_options(options);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.editing = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_edit(&self) -> bool {
        self.editing.is_some()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.error_message = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Validate, then create or update through the store
    pub async fn save(&mut self, ctx: &FinanceContext) -> FinanceResult<F::Record> {
        self.clear_error();
        let record = match self.form.build() {
            Ok(record) => record,
            Err(msg) => {
                debug!(form = <F::Record as Resource>::LABEL, error = %msg, "validation failed");
                ctx.notifier().notify(Notification::error(msg.clone()));
                self.set_error(msg.clone());
                return Err(FinanceError::Validation(msg));
            }
        };

        let store = F::store(ctx);
        let (saved, verb) = match &self.editing {
            Some(id) => (store.update(id, &record).await, "updated"),
            None => (store.add(&record).await, "added"),
        };

        match saved {
            Ok(saved) => {
                ctx.notifier().notify(Notification::success(format!(
                    "{} {}: {}",
                    <F::Record as Resource>::LABEL,
                    verb,
                    saved.title()
                )));
                self.close();
                Ok(saved)
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }

    /// Delete the record being edited
    pub async fn delete(&mut self, ctx: &FinanceContext) -> FinanceResult<()> {
        let Some(id) = self.editing.clone() else {
            return Err(FinanceError::Validation(format!(
                "No {} selected",
                <F::Record as Resource>::LABEL.to_lowercase()
            )));
        };

        let label = <F::Record as Resource>::LABEL;
        match F::store(ctx).delete(&id).await {
            Ok(()) => {
                ctx.notifier()
                    .notify(Notification::success(format!("{} deleted", label)));
                self.close();
                Ok(())
            }
            Err(err) => {
                self.set_error(err.to_string());
                Err(err)
            }
        }
    }
}

/// Parse a required amount field
pub(crate) fn parse_amount(label: &str, raw: &str) -> Result<Money, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(format!("{} is required", label));
    }
    let amount = Money::parse(raw).map_err(|_| format!("{} must be a number", label))?;
    if amount.is_negative() {
        return Err(format!("{} cannot be negative", label));
    }
    Ok(amount)
}

/// Parse an optional amount field; blank is `None`
pub(crate) fn parse_optional_amount(label: &str, raw: &str) -> Result<Option<Money>, String> {
    if raw.trim().is_empty() {
        Ok(None)
    } else {
        parse_amount(label, raw).map(Some)
    }
}

pub(crate) fn require(label: &str, raw: &str) -> Result<String, String> {
    let value = raw.trim();
    if value.is_empty() {
        Err(format!("{} is required", label))
    } else {
        Ok(value.to_string())
    }
}

/// Format an amount for a text field ("1500.50", "1500")
pub(crate) fn amount_text(amount: Money) -> String {
    if amount.cents_part() == 0 {
        amount.whole().to_string()
    } else {
        amount.to_string()
    }
}
