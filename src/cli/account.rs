//! Bank account CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::{format_bank_account_details, format_bank_account_list};
use crate::error::FinanceResult;
use crate::modals::BankAccountForm;

#[derive(Subcommand)]
pub enum AccountCommands {
    /// List bank accounts with balances
    List,
    /// Show account details
    Show {
        /// Bank name or ID
        account: String,
    },
    /// Add a bank account
    Add {
        /// Bank name
        bank_name: String,
        /// Account type (savings, current, salary, ... or any custom type)
        #[arg(short = 't', long = "type", default_value = "savings")]
        account_type: String,
        /// Current balance (e.g. "25000" or "25,000.50")
        #[arg(short, long, default_value = "0")]
        balance: String,
        /// Account number; only the last four digits are ever shown
        #[arg(short, long)]
        number: Option<String>,
    },
    /// Edit a bank account
    Edit {
        /// Bank name or ID
        account: String,
        #[arg(long)]
        bank_name: Option<String>,
        #[arg(short = 't', long = "type")]
        account_type: Option<String>,
        #[arg(short, long)]
        balance: Option<String>,
        #[arg(short, long)]
        number: Option<String>,
    },
    /// Delete a bank account
    Delete {
        /// Bank name or ID
        account: String,
    },
}

pub async fn handle_account_command(ctx: &FinanceContext, cmd: AccountCommands) -> FinanceResult<()> {
    let symbol = ctx.currency();

    match cmd {
        AccountCommands::List => {
            let accounts = ctx.bank_accounts.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_bank_account_list(&accounts, symbol));
        }

        AccountCommands::Show { account } => {
            let found = ctx.bank_accounts.find(&account).await?;
            print!("{}", format_bank_account_details(&found, symbol));
        }

        AccountCommands::Add {
            bank_name,
            account_type,
            balance,
            number,
        } => {
            let account = save_form::<BankAccountForm, _>(ctx, None, |form| {
                form.bank_name = bank_name;
                form.account_type.set_value(&account_type);
                form.balance = balance;
                form.account_number = number.unwrap_or_default();
            })
            .await?;
            println!("  ID: {}", account.id);
        }

        AccountCommands::Edit {
            account,
            bank_name,
            account_type,
            balance,
            number,
        } => {
            let found = ctx.bank_accounts.find(&account).await?;
            save_form::<BankAccountForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = bank_name {
                    form.bank_name = name;
                }
                if let Some(kind) = account_type {
                    form.account_type.set_value(&kind);
                }
                if let Some(balance) = balance {
                    form.balance = balance;
                }
                if let Some(number) = number {
                    form.account_number = number;
                }
            })
            .await?;
        }

        AccountCommands::Delete { account } => {
            let found = ctx.bank_accounts.find(&account).await?;
            delete_record::<BankAccountForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
