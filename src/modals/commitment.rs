//! Commitment form

use super::{amount_text, parse_amount, require, ChoiceField, EntityForm};
use crate::context::FinanceContext;
use crate::models::{Commitment, CommitmentId, OptionList, UserOptions};
use crate::stores::CommitmentStore;

#[derive(Debug, Clone)]
pub struct CommitmentForm {
    pub name: String,
    pub amount: String,
    /// Free text: a day of the month or a date
    pub due_date: String,
    pub kind: ChoiceField,
}

impl Default for CommitmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            amount: String::new(),
            due_date: String::new(),
            kind: ChoiceField::new("Type", OptionList::CommitmentTypes),
        }
    }
}

impl EntityForm for CommitmentForm {
    type Record = Commitment;

    fn from_record(commitment: &Commitment) -> Self {
        let mut form = Self {
            name: commitment.name.clone(),
            amount: amount_text(commitment.amount),
            due_date: commitment.due_date.clone(),
            ..Self::default()
        };
        form.kind.set_value(&commitment.kind);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Name", &self.name)?;
        parse_amount("Amount", &self.amount)?;
        self.kind.require()?;
        Ok(())
    }

    fn build(&self) -> Result<Commitment, String> {
        self.validate()?;
        Ok(Commitment {
            id: CommitmentId::unassigned(),
            name: require("Name", &self.name)?,
            amount: parse_amount("Amount", &self.amount)?,
            due_date: self.due_date.trim().to_string(),
            kind: self.kind.require()?,
        })
    }

    fn store(ctx: &FinanceContext) -> &CommitmentStore {
        &ctx.commitments
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.kind.set_options(options);
    }
}
