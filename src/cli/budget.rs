//! Budget CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::format_budget_list;
use crate::error::FinanceResult;
use crate::modals::BudgetForm;

#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Show spending against each budget
    List,
    /// Add a budget category
    Add {
        /// Category name
        name: String,
        /// Monthly limit
        #[arg(short, long)]
        limit: String,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Change a budget
    Edit {
        /// Budget name or ID
        budget: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        limit: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a budget
    Delete {
        /// Budget name or ID
        budget: String,
    },
}

pub async fn handle_budget_command(ctx: &FinanceContext, cmd: BudgetCommands) -> FinanceResult<()> {
    match cmd {
        BudgetCommands::List => {
            let budgets = ctx.budgets.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_budget_list(&budgets, ctx.currency()));
        }

        BudgetCommands::Add {
            name,
            limit,
            icon,
            color,
        } => {
            let budget = save_form::<BudgetForm, _>(ctx, None, |form| {
                form.name = name;
                form.limit = limit;
                form.icon = icon.unwrap_or_default();
                form.color = color.unwrap_or_default();
            })
            .await?;
            println!("  ID: {}", budget.id);
        }

        BudgetCommands::Edit {
            budget,
            name,
            limit,
            icon,
            color,
        } => {
            let found = ctx.budgets.find(&budget).await?;
            save_form::<BudgetForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(limit) = limit {
                    form.limit = limit;
                }
                if let Some(icon) = icon {
                    form.icon = icon;
                }
                if let Some(color) = color {
                    form.color = color;
                }
            })
            .await?;
        }

        BudgetCommands::Delete { budget } => {
            let found = ctx.budgets.find(&budget).await?;
            delete_record::<BudgetForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
