//! Investment and SIP forms

use chrono::NaiveDate;

use super::{amount_text, parse_amount, parse_optional_amount, require, ChoiceField, EntityForm};
use crate::context::FinanceContext;
use crate::models::dates::parse_date;
use crate::models::{
    return_percentage, Investment, InvestmentId, Money, OptionList, Sip, SipId, UserOptions,
};
use crate::stores::{InvestmentStore, SipStore};

#[derive(Debug, Clone)]
pub struct InvestmentForm {
    pub name: String,
    pub kind: ChoiceField,
    pub invested_amount: String,
    /// Blank means "same as invested"
    pub current_value: String,
}

impl Default for InvestmentForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            kind: ChoiceField::new("Type", OptionList::InvestmentTypes),
            invested_amount: String::new(),
            current_value: String::new(),
        }
    }
}

impl InvestmentForm {
    fn amounts(&self) -> Result<(Money, Money), String> {
        let invested = parse_amount("Invested amount", &self.invested_amount)?;
        let current = parse_optional_amount("Current value", &self.current_value)?.unwrap_or(invested);
        Ok((invested, current))
    }

    /// Return shown next to the fields while typing
    pub fn preview_return(&self) -> Option<f64> {
        self.amounts()
            .ok()
            .map(|(invested, current)| return_percentage(invested, current))
    }
}

impl EntityForm for InvestmentForm {
    type Record = Investment;

    fn from_record(investment: &Investment) -> Self {
        let mut form = Self {
            name: investment.name.clone(),
            invested_amount: amount_text(investment.invested_amount),
            current_value: amount_text(investment.current_value),
            ..Self::default()
        };
        form.kind.set_value(&investment.kind);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Name", &self.name)?;
        self.kind.require()?;
        self.amounts()?;
        Ok(())
    }

    fn build(&self) -> Result<Investment, String> {
        self.validate()?;
        let (invested, current) = self.amounts()?;
        Ok(Investment {
            id: InvestmentId::unassigned(),
            name: require("Name", &self.name)?,
            kind: self.kind.require()?,
            invested_amount: invested,
            current_value: current,
            returns: return_percentage(invested, current),
        })
    }

    fn store(ctx: &FinanceContext) -> &InvestmentStore {
        &ctx.investments
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.kind.set_options(options);
    }
}

#[derive(Debug, Clone)]
pub struct SipForm {
    pub name: String,
    pub amount: String,
    pub frequency: ChoiceField,
    /// Optional `YYYY-MM-DD`
    pub next_debit_date: String,
    pub total_invested: String,
}

impl Default for SipForm {
    fn default() -> Self {
        let mut frequency = ChoiceField::new("Frequency", OptionList::SipFrequencies);
        frequency.set_value("monthly");
        Self {
            name: String::new(),
            amount: String::new(),
            frequency,
            next_debit_date: String::new(),
            total_invested: String::new(),
        }
    }
}

impl SipForm {
    fn next_debit(&self) -> Result<Option<NaiveDate>, String> {
        let raw = self.next_debit_date.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        parse_date(raw)
            .map(Some)
            .ok_or_else(|| "Next debit date must be in YYYY-MM-DD format".to_string())
    }
}

impl EntityForm for SipForm {
    type Record = Sip;

    fn from_record(sip: &Sip) -> Self {
        let mut form = Self {
            name: sip.name.clone(),
            amount: amount_text(sip.amount),
            next_debit_date: sip
                .next_debit_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            total_invested: amount_text(sip.total_invested),
            ..Self::default()
        };
        form.frequency.set_value(&sip.frequency);
        form
    }

    fn validate(&self) -> Result<(), String> {
        require("Name", &self.name)?;
        let amount = parse_amount("Amount", &self.amount)?;
        if amount.is_zero() {
            return Err("Amount must be greater than zero".into());
        }
        self.frequency.require()?;
        self.next_debit()?;
        parse_optional_amount("Total invested", &self.total_invested)?;
        Ok(())
    }

    fn build(&self) -> Result<Sip, String> {
        self.validate()?;
        Ok(Sip {
            id: SipId::unassigned(),
            name: require("Name", &self.name)?,
            amount: parse_amount("Amount", &self.amount)?,
            frequency: self.frequency.require()?,
            next_debit_date: self.next_debit()?,
            total_invested: parse_optional_amount("Total invested", &self.total_invested)?
                .unwrap_or_else(Money::zero),
        })
    }

    fn store(ctx: &FinanceContext) -> &SipStore {
        &ctx.sips
    }

    fn apply_options(&mut self, options: &UserOptions) {
        self.frequency.set_options(options);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modals::testing::fixture;
    use crate::modals::Modal;

    fn investment(invested: &str, current: &str) -> InvestmentForm {
        let mut form = InvestmentForm {
            name: "Index fund".into(),
            invested_amount: invested.into(),
            current_value: current.into(),
            ..InvestmentForm::default()
        };
        form.kind.set_value("mutual funds");
        form
    }

    #[test]
    fn test_return_computed_on_build() {
        let built = investment("10000", "11500").build().unwrap();
        assert_eq!(built.returns, 15.0);
        assert_eq!(investment("10000", "11500").preview_return(), Some(15.0));
    }

    #[test]
    fn test_blank_current_means_no_gain() {
        let built = investment("10000", "").build().unwrap();
        assert_eq!(built.current_value, Money::from_major(10_000));
        assert_eq!(built.returns, 0.0);
    }

    #[tokio::test]
    async fn test_saved_investment_carries_return() {
        let fx = fixture();
        let mut modal = Modal::<InvestmentForm>::new();
        modal.open(None);
        modal.form = investment("10000", "11500");
        modal.save(&fx.ctx).await.unwrap();

        assert_eq!(fx.backend.collection("investments")[0]["returns"], 15.0);
    }

    #[tokio::test]
    async fn test_saved_returns_for_lakh_holdings() {
        let fx = fixture();
        let mut modal = Modal::<InvestmentForm>::new();

        modal.open(None);
        modal.form = investment("100000", "115000");
        let gained = modal.save(&fx.ctx).await.unwrap();
        assert_eq!(gained.returns, 15.0);

        modal.open(None);
        modal.form = investment("100000", "");
        let flat = modal.save(&fx.ctx).await.unwrap();
        assert_eq!(flat.returns, 0.0);
        assert_eq!(flat.current_value, Money::from_major(100_000));

        let stored = fx.backend.collection("investments");
        assert_eq!(stored[0]["returns"], 15.0);
        assert_eq!(stored[1]["returns"], 0.0);
    }

    #[test]
    fn test_sip_defaults_to_monthly() {
        let form = SipForm {
            name: "Nifty 50".into(),
            amount: "5000".into(),
            ..SipForm::default()
        };
        let sip = form.build().unwrap();
        assert_eq!(sip.frequency, "monthly");
        assert!(sip.next_debit_date.is_none());
    }

    #[test]
    fn test_sip_bad_date() {
        let form = SipForm {
            name: "Nifty 50".into(),
            amount: "5000".into(),
            next_debit_date: "tomorrow".into(),
            ..SipForm::default()
        };
        assert_eq!(
            form.validate().unwrap_err(),
            "Next debit date must be in YYYY-MM-DD format"
        );
    }
}
