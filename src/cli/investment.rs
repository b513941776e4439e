//! Investment and SIP CLI commands

use clap::Subcommand;

use super::{delete_record, save_form, signed_out_hint};
use crate::context::FinanceContext;
use crate::display::{format_investment_list, format_sip_list};
use crate::error::FinanceResult;
use crate::modals::{InvestmentForm, SipForm};

#[derive(Subcommand)]
pub enum InvestmentCommands {
    /// List holdings with returns
    List,
    /// Add a holding
    Add {
        name: String,
        /// Type (stocks, mutual funds, ... or any custom type)
        #[arg(short = 't', long = "type")]
        kind: String,
        /// Amount invested
        #[arg(short, long)]
        invested: String,
        /// Current value; defaults to the invested amount
        #[arg(short, long)]
        current: Option<String>,
    },
    /// Update a holding, typically its current value
    Edit {
        /// Investment name or ID
        investment: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
        #[arg(short, long)]
        invested: Option<String>,
        #[arg(short, long)]
        current: Option<String>,
    },
    Delete {
        /// Investment name or ID
        investment: String,
    },
}

pub async fn handle_investment_command(
    ctx: &FinanceContext,
    cmd: InvestmentCommands,
) -> FinanceResult<()> {
    match cmd {
        InvestmentCommands::List => {
            let investments = ctx.investments.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_investment_list(&investments, ctx.currency()));
        }

        InvestmentCommands::Add {
            name,
            kind,
            invested,
            current,
        } => {
            let investment = save_form::<InvestmentForm, _>(ctx, None, |form| {
                form.name = name;
                form.kind.set_value(&kind);
                form.invested_amount = invested;
                form.current_value = current.unwrap_or_default();
            })
            .await?;
            println!("  ID: {}  Return: {:.1}%", investment.id, investment.returns);
        }

        InvestmentCommands::Edit {
            investment,
            name,
            kind,
            invested,
            current,
        } => {
            let found = ctx.investments.find(&investment).await?;
            let saved = save_form::<InvestmentForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(kind) = kind {
                    form.kind.set_value(&kind);
                }
                if let Some(invested) = invested {
                    form.invested_amount = invested;
                }
                if let Some(current) = current {
                    form.current_value = current;
                }
            })
            .await?;
            println!("  Return: {:.1}%", saved.returns);
        }

        InvestmentCommands::Delete { investment } => {
            let found = ctx.investments.find(&investment).await?;
            delete_record::<InvestmentForm>(ctx, &found).await?;
        }
    }

    Ok(())
}

#[derive(Subcommand)]
pub enum SipCommands {
    List,
    /// Register a systematic investment plan
    Add {
        name: String,
        /// Instalment amount
        #[arg(short, long)]
        amount: String,
        /// monthly, quarterly, yearly or a custom frequency
        #[arg(short, long, default_value = "monthly")]
        frequency: String,
        /// Next debit date (YYYY-MM-DD)
        #[arg(short, long)]
        next: Option<String>,
        /// Invested so far
        #[arg(short, long)]
        total: Option<String>,
    },
    Edit {
        /// SIP name or ID
        sip: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        frequency: Option<String>,
        #[arg(short, long)]
        next: Option<String>,
        #[arg(short, long)]
        total: Option<String>,
    },
    Delete {
        /// SIP name or ID
        sip: String,
    },
}

pub async fn handle_sip_command(ctx: &FinanceContext, cmd: SipCommands) -> FinanceResult<()> {
    match cmd {
        SipCommands::List => {
            let sips = ctx.sips.try_entities().await?;
            signed_out_hint(ctx);
            print!("{}", format_sip_list(&sips, ctx.currency()));
        }

        SipCommands::Add {
            name,
            amount,
            frequency,
            next,
            total,
        } => {
            let sip = save_form::<SipForm, _>(ctx, None, |form| {
                form.name = name;
                form.amount = amount;
                form.frequency.set_value(&frequency);
                form.next_debit_date = next.unwrap_or_default();
                form.total_invested = total.unwrap_or_default();
            })
            .await?;
            println!("  ID: {}", sip.id);
        }

        SipCommands::Edit {
            sip,
            name,
            amount,
            frequency,
            next,
            total,
        } => {
            let found = ctx.sips.find(&sip).await?;
            save_form::<SipForm, _>(ctx, Some(&found), |form| {
                if let Some(name) = name {
                    form.name = name;
                }
                if let Some(amount) = amount {
                    form.amount = amount;
                }
                if let Some(frequency) = frequency {
                    form.frequency.set_value(&frequency);
                }
                if let Some(next) = next {
                    form.next_debit_date = next;
                }
                if let Some(total) = total {
                    form.total_invested = total;
                }
            })
            .await?;
        }

        SipCommands::Delete { sip } => {
            let found = ctx.sips.find(&sip).await?;
            delete_record::<SipForm>(ctx, &found).await?;
        }
    }

    Ok(())
}
