//! Transaction CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::{format_transaction_details, format_transaction_list};
use crate::error::{FinanceError, FinanceResult};
use crate::modals::TransactionForm;
use crate::models::{EntityId, Transaction, TransactionType};

#[derive(Subcommand)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
        /// Number of transactions to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
    /// Show a transaction
    Show {
        /// Transaction ID or description
        transaction: String,
    },
    /// Record a transaction (an expense unless --income is given)
    Add {
        /// Amount (always positive)
        amount: String,
        /// Category name
        #[arg(short, long)]
        category: String,
        /// Record as income
        #[arg(short, long)]
        income: bool,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        /// Bank account name or ID
        #[arg(short, long)]
        account: Option<String>,
    },
    /// Edit a transaction
    Edit {
        /// Transaction ID
        transaction: String,
        #[arg(long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// Change the type (income or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        transaction: String,
    },
}

fn parse_kind(raw: &str) -> FinanceResult<TransactionType> {
    TransactionType::parse(raw).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid transaction type: '{}'. Use income or expense",
            raw
        ))
    })
}

pub async fn handle_transaction_command(
    ctx: &FinanceContext,
    cmd: TransactionCommands,
) -> FinanceResult<()> {
    let symbol = ctx.currency();

    match cmd {
        TransactionCommands::List { category, limit } => {
            let mut transactions = ctx.transactions.try_entities().await?;
            signed_out_hint(ctx);
            if let Some(category) = category {
                transactions.retain(|t| t.category.eq_ignore_ascii_case(category.trim()));
            }
            transactions.sort_by(|a, b| b.date.cmp(&a.date));
            transactions.truncate(limit);
            print!("{}", format_transaction_list(&transactions, symbol));
        }

        TransactionCommands::Show { transaction } => {
            let found = ctx.transactions.find(&transaction).await?;
            print!("{}", format_transaction_details(&found, symbol));
        }

        TransactionCommands::Add {
            amount,
            category,
            income,
            date,
            description,
            account,
        } => {
            let account_id = match account {
                Some(needle) => Some(ctx.bank_accounts.find(&needle).await?.id),
                None => None,
            };
            let txn = save_form::<TransactionForm, _>(ctx, None, |form| {
                form.kind = if income {
                    TransactionType::Income
                } else {
                    TransactionType::Expense
                };
                form.amount = amount;
                form.category = category;
                if let Some(date) = date {
                    form.date = date;
                }
                form.description = description;
                form.account_id = account_id
                    .map(|id| id.as_str().to_string())
                    .unwrap_or_default();
            })
            .await?;
            println!("  ID: {}", txn.id);
        }

        TransactionCommands::Edit {
            transaction,
            amount,
            category,
            kind,
            date,
            description,
        } => {
            let found: Transaction = ctx.transactions.find(&transaction).await?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            save_form::<TransactionForm, _>(ctx, Some(&found), |form| {
                if let Some(kind) = kind {
                    form.kind = kind;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(category) = category {
                    form.category = category;
                }
                if let Some(date) = date {
                    form.date = date;
                }
                if let Some(description) = description {
                    form.description = description;
                }
            })
            .await?;
        }

        TransactionCommands::Delete { transaction } => {
            let found = ctx.transactions.find(&transaction).await?;
            delete_record::<TransactionForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
