//! Vault entry form

use super::{amount_text, parse_amount, require, ChoiceField, EntityForm};
use crate::context::FinanceContext;
use crate::models::{OptionList, UserOptions, VaultEntry, VaultEntryId};
use crate::stores::VaultStore;

#[derive(Debug, Clone)]
pub struct VaultForm {
    pub name: String,
    pub category: ChoiceField,
    pub amount: String,
    pub notes: String,
}

impl Default for VaultForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: ChoiceField::new("Category", OptionList::VaultCategories),
            amount: String::new(),
            notes: String::new(),
        }
    }
}

impl EntityForm for VaultForm {
    type Record = VaultEntry;

    fn from_record(entry: &VaultEntry) -> Self {
        let mut form = Self {
            name: entry.name.clone(),
            amount: amount_text(entry.amount),
            notes: entry.notes.clone(),
            ..Self::default()
        };
        form.category.set_value(&entry.category);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Name", &self.name)?;
        parse_amount("Amount", &self.amount)?;
        Ok(())
    }

    fn build(&self) -> Result<VaultEntry, String> {
        self.validate()?;
        Ok(VaultEntry {
            id: VaultEntryId::unassigned(),
            name: require("Name", &self.name)?,
            category: self.category.resolve().unwrap_or_default(),
            amount: parse_amount("Amount", &self.amount)?,
            notes: self.notes.trim().to_string(),
        })
    }

    fn store(ctx: &FinanceContext) -> &VaultStore {
        &ctx.vault
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.category.set_options(options);
    }
}
