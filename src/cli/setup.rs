//! First-run setup
//!
//! Shows whether the account still needs setting up, then either applies
//! the starter data given as flags or asks for it interactively.

use clap::Args;

use super::{confirm, prompt_string};
use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::modals::{BankAccountForm, EntityForm};
use crate::setup::{SetupStatus, StarterPlan};

#[derive(Args)]
pub struct SetupArgs {
    /// Create the default income and expense categories
    #[arg(long)]
    pub defaults: bool,

    /// Create a first bank account with this bank name
    #[arg(long)]
    pub bank: Option<String>,

    /// Balance of the first bank account
    #[arg(long, default_value = "0")]
    pub balance: String,

    /// Only report whether setup is needed
    #[arg(long)]
    pub status: bool,
}

fn account_from(bank: &str, balance: &str) -> FinanceResult<crate::models::BankAccount> {
    let mut form = BankAccountForm {
        bank_name: bank.to_string(),
        balance: balance.to_string(),
        ..BankAccountForm::default()
    };
    form.account_type.set_value("savings");
    form.build().map_err(FinanceError::Validation)
}

fn interactive_plan() -> FinanceResult<StarterPlan> {
    println!();
    println!("Let's set up your finances.");
    println!("Press Enter to skip a step.");
    println!();

    let mut plan = StarterPlan::default();

    let bank = prompt_string("Bank name for your main account: ")?;
    if !bank.is_empty() {
        loop {
            let balance = prompt_string("Current balance [0]: ")?;
            let balance = if balance.is_empty() { "0".to_string() } else { balance };
            match account_from(&bank, &balance) {
                Ok(account) => {
                    plan.account = Some(account);
                    break;
                }
                Err(e) => println!("{}", e),
            }
        }
    }

    plan.default_categories = confirm("Create the default income and expense categories?")?;
    Ok(plan)
}

pub async fn handle_setup(ctx: &FinanceContext, args: SetupArgs) -> FinanceResult<()> {
    if !ctx.is_authenticated() {
        return Err(FinanceError::NotAuthenticated);
    }

    let snapshot = ctx.refresh().await;
    let counts = snapshot.counts();
    let status = SetupStatus::derive(&counts);

    if args.status {
        println!("New user:    {}", if status.is_new_user { "yes" } else { "no" });
        println!("Needs setup: {}", if status.needs_setup { "yes" } else { "no" });
        for step in SetupStatus::checklist(&counts) {
            println!("  - {}", step);
        }
        return Ok(());
    }

    let plan = if args.defaults || args.bank.is_some() {
        StarterPlan {
            account: match &args.bank {
                Some(bank) => Some(account_from(bank, &args.balance)?),
                None => None,
            },
            default_categories: args.defaults,
        }
    } else {
        if !status.needs_setup {
            println!("Your account is already set up.");
            return Ok(());
        }
        interactive_plan()?
    };

    if plan.is_empty() {
        println!("Nothing to do.");
        return Ok(());
    }

    let result = plan.apply(ctx).await?;
    if let Some(account) = &result.account {
        println!("Created account: {}", account);
    }
    if plan.default_categories {
        println!("Created {} categories", result.categories_created);
    }

    let after = ctx.refresh().await.counts();
    let remaining = SetupStatus::checklist(&after);
    if !remaining.is_empty() {
        println!();
        println!("Next steps:");
        for step in remaining {
            println!("  - {}", step);
        }
    }
    Ok(())
}
