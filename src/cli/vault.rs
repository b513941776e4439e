//! Vault CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::format_vault_list;
use crate::error::FinanceResult;
use crate::modals::VaultForm;

#[derive(Subcommand)]
pub enum VaultCommands {
    List,
    /// Put money aside
    Add {
        name: String,
        #[arg(short, long)]
        amount: String,
        /// Category (emergency, travel, ... or any custom category)
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    Edit {
        /// Entry name or ID
        entry: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Delete {
        /// Entry name or ID
        entry: String,
    },
}

pub async fn handle_vault_command(ctx: &FinanceContext, cmd: VaultCommands) -> FinanceResult<()> {
    match cmd {
        VaultCommands::List => {
            let entries = ctx.vault.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_vault_list(&entries, ctx.currency()));
        }

        VaultCommands::Add {
            name,
            amount,
            category,
            notes,
        } => {
            let entry = save_form::<VaultForm, _>(ctx, None, |form| {
                form.name = name;
                form.amount = amount;
                if let Some(category) = category {
                    form.category.set_value(&category);
                }
                form.notes = notes;
            })
            .await?;
            println!("  ID: {}", entry.id);
        }

        VaultCommands::Edit {
            entry,
            name,
            amount,
            category,
            notes,
        } => {
            let found = ctx.vault.find(&entry).await?;
            save_form::<VaultForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(category) = category {
                    form.category.set_value(&category);
                }
                if let Some(notes) = notes {
                    form.notes = notes;
                }
            })
            .await?;
        }

        VaultCommands::Delete { entry } => {
            let found = ctx.vault.find(&entry).await?;
            delete_record::<VaultForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
