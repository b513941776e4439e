//! CLI command handlers
//!
//! Each module pairs a clap `Subcommand` enum with an async handler that
//! runs it against the finance context. Saves go through the same modals
//! an interactive front end would use, so validation is identical.

pub mod account;
pub mod admin;
pub mod automation;
pub mod budget;
pub mod card;
pub mod category;
pub mod commitment;
pub mod dashboard;
pub mod export;
pub mod investment;
pub mod options;
pub mod setup;
pub mod transaction;
pub mod vault;

pub use account::{handle_account_command, AccountCommands};
pub use admin::{handle_delete_account, handle_secrets, handle_wipe};
pub use automation::{handle_automation_command, AutomationCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use card::{
    handle_credit_card_command, handle_debit_card_command, CreditCardCommands, DebitCardCommands,
};
pub use category::{handle_category_command, CategoryCommands};
pub use commitment::{handle_commitment_command, CommitmentCommands};
pub use dashboard::{handle_dashboard, DashboardArgs};
pub use export::{handle_export, ExportArgs};
pub use investment::{handle_investment_command, handle_sip_command, InvestmentCommands, SipCommands};
pub use options::{handle_options_command, OptionsCommands};
pub use setup::{handle_setup, SetupArgs};
pub use transaction::{handle_transaction_command, TransactionCommands};
pub use vault::{handle_vault_command, VaultCommands};

use std::io::{self, Write};

use crate::config::session::ACCESS_TOKEN_ENV;
use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::modals::{EntityForm, Modal};

/// Open a modal (blank or pre-filled), let `fill` set fields, then save
pub(crate) async fn save_form<F, Fill>(
    ctx: &FinanceContext,
    existing: Option<&F::Record>,
    fill: Fill,
) -> FinanceResult<F::Record>
where
    F: EntityForm,
    Fill: FnOnce(&mut F),
{
    let options = ctx.options.options().await;
    let mut modal = Modal::<F>::new();
    modal.open_with(existing, &options);
    fill(&mut modal.form);
    modal.save(ctx).await
}

pub(crate) async fn delete_record<F: EntityForm>(
    ctx: &FinanceContext,
    record: &F::Record,
) -> FinanceResult<()> {
    let mut modal = Modal::<F>::new();
    modal.open(Some(record));
    modal.delete(ctx).await
}

/// Remind the user why a list came back empty
pub(crate) fn signed_out_hint(ctx: &FinanceContext) {
    if !ctx.is_authenticated() {
        eprintln!(
            "Not signed in: set {} or add an accessToken to session.json.",
            ACCESS_TOKEN_ENV
        );
    }
}

/// Prompt for a string value
pub(crate) fn prompt_string(prompt: &str) -> FinanceResult<String> {
    print!("{}", prompt);
    io::stdout().flush().map_err(|e| FinanceError::Io(e.to_string()))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| FinanceError::Io(e.to_string()))?;

    Ok(input.trim().to_string())
}

/// Ask a yes/no question; anything but "y"/"yes" is no
pub(crate) fn confirm(prompt: &str) -> FinanceResult<bool> {
    let answer = prompt_string(&format!("{} [y/N]: ", prompt))?;
    Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
}
