//! Category CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::format_category_list;
use crate::error::{FinanceError, FinanceResult};
use crate::modals::CategoryForm;
use crate::models::category::sort_by_usage;
use crate::models::TransactionType;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List categories, most used first
    List,
    /// Create a category
    Add {
        name: String,
        /// income or expense
        #[arg(short = 't', long = "type", default_value = "expense")]
        kind: String,
        /// Hex color, e.g. #4caf50
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename or recolor a category
    Edit {
        /// Category name or ID
        category: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    Delete {
        /// Category name or ID
        category: String,
    },
}

fn parse_kind(raw: &str) -> FinanceResult<TransactionType> {
    TransactionType::parse(raw).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid category type: '{}'. Use income or expense",
            raw
        ))
    })
}

pub async fn handle_category_command(
    ctx: &FinanceContext,
    cmd: CategoryCommands,
) -> FinanceResult<()> {
    match cmd {
        CategoryCommands::List => {
            let mut categories = ctx.categories.try_entities().await?;
            signed_out_hint(ctx);
            let transactions = ctx.transactions.entities().await;
            for category in &mut categories {
                category.usage_count = transactions
                    .iter()
                    .filter(|t| category.matches(&t.category))
                    .count() as u32;
            }
            sort_by_usage(&mut categories);
            print!("{}", format_category_list(&categories));
        }

        CategoryCommands::Add { name, kind, color } => {
            let kind = parse_kind(&kind)?;
            let category = save_form::<CategoryForm, _>(ctx, None, |form| {
                form.name = name;
                form.kind = kind;
                form.color = color.unwrap_or_default();
            })
            .await?;
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            kind,
            color,
        } => {
            let found = ctx.categories.find(&category).await?;
            let kind = kind.as_deref().map(parse_kind).transpose()?;
            save_form::<CategoryForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(kind) = kind {
                    form.kind = kind;
                }
                if let Some(color) = color {
                    form.color = color;
                }
            })
            .await?;
        }

        CategoryCommands::Delete { category } => {
            let found = ctx.categories.find(&category).await?;
            delete_record::<CategoryForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
