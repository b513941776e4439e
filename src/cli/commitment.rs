//! Commitment CLI commands (bills, subscriptions, loan payments)

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::format_commitment_list;
use crate::error::FinanceResult;
use crate::modals::CommitmentForm;

#[derive(Subcommand)]
pub enum CommitmentCommands {
    List,
    /// Add a recurring commitment
    Add {
        name: String,
        #[arg(short, long)]
        amount: String,
        /// Type (bill, subscription, loan, ... or any custom type)
        #[arg(short = 't', long = "type", default_value = "bill")]
        kind: String,
        /// When it falls due, e.g. "5" or "2024-07-01"
        #[arg(short, long, default_value = "")]
        due: String,
    },
    Edit {
        /// Commitment name or ID
        commitment: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long)]
        due: Option<String>,
    },
    Delete {
        /// Commitment name or ID
        commitment: String,
    },
}

pub async fn handle_commitment_command(
    ctx: &FinanceContext,
    cmd: CommitmentCommands,
) -> FinanceResult<()> {
    match cmd {
        CommitmentCommands::List => {
            let commitments = ctx.commitments.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_commitment_list(&commitments, ctx.currency()));
        }

        CommitmentCommands::Add {
            name,
            amount,
            kind,
            due,
        } => {
            let commitment = save_form::<CommitmentForm, _>(ctx, None, |form| {
                form.name = name;
                form.amount = amount;
                form.kind.set_value(&kind);
                form.due_date = due;
            })
            .await?;
            println!("  ID: {}", commitment.id);
        }

        CommitmentCommands::Edit {
            commitment,
            name,
            amount,
            kind,
            due,
        } => {
            let found = ctx.commitments.find(&commitment).await?;
            save_form::<CommitmentForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(kind) = kind {
                    form.kind.set_value(&kind);
                }
                if let Some(due) = due {
                    form.due_date = due;
                }
            })
            .await?;
        }

        CommitmentCommands::Delete { commitment } => {
            let found = ctx.commitments.find(&commitment).await?;
            delete_record::<CommitmentForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
