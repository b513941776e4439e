//! Option list CLI commands
//!
//! The lists feed the choice fields of the add/edit commands (investment
//! types, account types, ...). Values outside a list are still accepted as
//! custom entries.

use clap::Subcommand;

use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::models::{OptionList, UserOptions};

#[derive(Subcommand)]
pub enum OptionsCommands {
    /// Show one list, or all of them
    Show {
        /// investment-types, account-types, commitment-types,
        /// sip-frequencies, card-networks or vault-categories
        list: Option<String>,
    },
    /// Add a value to a list
    Add { list: String, value: String },
    /// Remove a value from a list
    Remove { list: String, value: String },
    /// Restore a list to its defaults
    Reset { list: String },
}

fn parse_list(raw: &str) -> FinanceResult<OptionList> {
    OptionList::parse(raw).ok_or_else(|| {
        let names: Vec<&str> = OptionList::ALL.iter().map(|l| l.label()).collect();
        FinanceError::Validation(format!(
            "Unknown option list '{}'. Valid lists: {}",
            raw,
            names.join(", ")
        ))
    })
}

fn print_list(options: &UserOptions, list: OptionList) {
    println!("{}:", list.label());
    for value in options.list(list) {
        println!("  - {}", value);
    }
}

pub async fn handle_options_command(ctx: &FinanceContext, cmd: OptionsCommands) -> FinanceResult<()> {
    match cmd {
        OptionsCommands::Show { list } => {
            let options = ctx.options.try_options().await?;
            match list {
                Some(raw) => print_list(&options, parse_list(&raw)?),
                None => {
                    for list in OptionList::ALL {
                        print_list(&options, list);
                    }
                }
            }
        }

        OptionsCommands::Add { list, value } => {
            let list = parse_list(&list)?;
            let value = value.trim().to_string();
            if value.is_empty() {
                return Err(FinanceError::Validation("Value is required".into()));
            }
            let mut options = ctx.options.try_options().await?;
            let values = options.list_mut(list);
            if values.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
                println!("'{}' is already in {}", value, list.label());
                return Ok(());
            }
            values.push(value.clone());
            ctx.options.update(&options).await?;
            println!("Added '{}' to {}", value, list.label());
        }

        OptionsCommands::Remove { list, value } => {
            let list = parse_list(&list)?;
            let mut options = ctx.options.try_options().await?;
            let values = options.list_mut(list);
            let before = values.len();
            values.retain(|v| !v.eq_ignore_ascii_case(value.trim()));
            if values.len() == before {
                return Err(FinanceError::not_found("Option", value));
            }
            ctx.options.update(&options).await?;
            println!("Removed '{}' from {}", value.trim(), list.label());
        }

        OptionsCommands::Reset { list } => {
            let list = parse_list(&list)?;
            let mut options = ctx.options.try_options().await?;
            *options.list_mut(list) = UserOptions::default().list(list).to_vec();
            ctx.options.update(&options).await?;
            println!("Reset {} to defaults", list.label());
        }
    }

    Ok(())
}
