//! Credit and debit card CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::{format_credit_card_details, format_credit_card_list, format_debit_card_list};
use crate::error::FinanceResult;
use crate::modals::{CreditCardForm, DebitCardForm};
use crate::models::EntityId;

#[derive(Subcommand)]
pub enum CreditCardCommands {
    /// List credit cards
    List,
    /// Show limit, available credit and minimum due
    Show {
        /// Card name or ID
        card: String,
    },
    /// Add a credit card
    Add {
        /// Card name
        name: String,
        /// Credit limit
        #[arg(short, long)]
        limit: String,
        /// Statement due day (1-31)
        #[arg(short, long)]
        due: String,
        /// Issuing bank
        #[arg(short, long, default_value = "")]
        issuer: String,
        /// Card network (Visa, Mastercard, ...)
        #[arg(long)]
        network: Option<String>,
        /// Outstanding balance
        #[arg(short, long, default_value = "0")]
        balance: String,
    },
    /// Edit a credit card
    Edit {
        /// Card name or ID
        card: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(short, long)]
        due: Option<String>,
        #[arg(short, long)]
        issuer: Option<String>,
        #[arg(long)]
        network: Option<String>,
        #[arg(short, long)]
        balance: Option<String>,
    },
    /// Delete a credit card
    Delete {
        /// Card name or ID
        card: String,
    },
}

pub async fn handle_credit_card_command(
    ctx: &FinanceContext,
    cmd: CreditCardCommands,
) -> FinanceResult<()> {
    let symbol = ctx.currency();

    match cmd {
        CreditCardCommands::List => {
            let cards = ctx.credit_cards.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_credit_card_list(&cards, symbol));
        }

        CreditCardCommands::Show { card } => {
            let found = ctx.credit_cards.find(&card).await?;
            print!("{}", format_credit_card_details(&found, symbol));
        }

        CreditCardCommands::Add {
            name,
            limit,
            due,
            issuer,
            network,
            balance,
        } => {
            let card = save_form::<CreditCardForm, _>(ctx, None, |form| {
                form.name = name;
                form.credit_limit = limit;
                form.due_date = due;
                form.issuer = issuer;
                form.current_balance = balance;
                if let Some(network) = network {
                    form.network.set_value(&network);
                }
            })
            .await?;
            println!("  ID: {}", card.id);
        }

        CreditCardCommands::Edit {
            card,
            name,
            limit,
            due,
            issuer,
            network,
            balance,
        } => {
            let found = ctx.credit_cards.find(&card).await?;
            save_form::<CreditCardForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(limit) = limit {
                    form.credit_limit = limit;
                }
                if let Some(due) = due {
                    form.due_date = due;
                }
                if let Some(issuer) = issuer {
                    form.issuer = issuer;
                }
                if let Some(network) = network {
                    form.network.set_value(&network);
                }
                if let Some(balance) = balance {
                    form.current_balance = balance;
                }
            })
            .await?;
        }

        CreditCardCommands::Delete { card } => {
            let found = ctx.credit_cards.find(&card).await?;
            delete_record::<CreditCardForm>(ctx, &found).await?;
        }
    }

    Ok(())
}

#[derive(Subcommand)]
pub enum DebitCardCommands {
    /// List debit cards
    List,
    /// Add a debit card
    Add {
        /// Card name
        name: String,
        /// Bank name
        #[arg(short, long)]
        bank: String,
        #[arg(long)]
        network: Option<String>,
        /// Last four digits of the card number
        #[arg(long)]
        last_four: Option<String>,
        /// Bank account the card draws from (name or ID)
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Edit a debit card
    Edit {
        /// Card name or ID
        card: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        bank: Option<String>,
        #[arg(long)]
        network: Option<String>,
        #[arg(long)]
        last_four: Option<String>,
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Delete a debit card
    Delete {
        /// Card name or ID
        card: String,
    },
}

/// Resolve a bank account by name or id to its id
async fn linked_account_id(ctx: &FinanceContext, account: Option<String>) -> FinanceResult<Option<String>> {
    match account {
        Some(needle) if !needle.trim().is_empty() => {
            let found = ctx.bank_accounts.find(&needle).await?;
            Ok(Some(found.id.as_str().to_string()))
        }
        _ => Ok(None),
    }
}

pub async fn handle_debit_card_command(
    ctx: &FinanceContext,
    cmd: DebitCardCommands,
) -> FinanceResult<()> {
    match cmd {
        DebitCardCommands::List => {
            let cards = ctx.debit_cards.try_entities().await?;
            let accounts = ctx.bank_accounts.entities().await;
            signed_out_hint(ctx);
            print!("{}", format_debit_card_list(&cards, &accounts));
        }

        DebitCardCommands::Add {
            name,
            bank,
            network,
            last_four,
            account,
        } => {
            let linked = linked_account_id(ctx, account).await?;
            let card = save_form::<DebitCardForm, _>(ctx, None, |form| {
                form.name = name;
                form.bank_name = bank;
                form.last_four = last_four.unwrap_or_default();
                form.linked_account_id = linked.unwrap_or_default();
                if let Some(network) = network {
                    form.network.set_value(&network);
                }
            })
            .await?;
            println!("  ID: {}", card.id);
        }

        DebitCardCommands::Edit {
            card,
            name,
            bank,
            network,
            last_four,
            account,
        } => {
            let found = ctx.debit_cards.find(&card).await?;
            let linked = linked_account_id(ctx, account).await?;
            save_form::<DebitCardForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(bank) = bank {
                    form.bank_name = bank;
                }
                if let Some(network) = network {
                    form.network.set_value(&network);
                }
                if let Some(last_four) = last_four {
                    form.last_four = last_four;
                }
                if let Some(linked) = linked {
                    form.linked_account_id = linked;
                }
            })
            .await?;
        }

        DebitCardCommands::Delete { card } => {
            let found = ctx.debit_cards.find(&card).await?;
            delete_record::<DebitCardForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
