//! Automation rule CLI commands
//!
//! Kept so the command surface is complete; every call reports that the
//! capability is not available.

use clap::Subcommand;

use crate::context::FinanceContext;
use crate::error::FinanceResult;
use crate::models::{AutomationRule, AutomationRuleId};

#[derive(Subcommand)]
pub enum AutomationCommands {
    List,
    Add {
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    Enable { rule: String },
    Disable { rule: String },
    Delete { rule: String },
}

pub async fn handle_automation_command(
    ctx: &FinanceContext,
    cmd: AutomationCommands,
) -> FinanceResult<()> {
    let rules = &ctx.automation;

    match cmd {
        AutomationCommands::List => {
            for rule in rules.list().await? {
                let state = if rule.enabled { "on" } else { "off" };
                println!("{}  [{}] {}", rule.id, state, rule.name);
            }
        }
        AutomationCommands::Add { name, description } => {
            let rule = AutomationRule {
                id: AutomationRuleId::unassigned(),
                name,
                description,
                enabled: true,
            };
            let created = rules.create(&rule).await?;
            println!("Created rule {}", created.id);
        }
        AutomationCommands::Enable { rule } => {
            rules.toggle(&AutomationRuleId::from(rule.as_str()), true).await?;
        }
        AutomationCommands::Disable { rule } => {
            rules.toggle(&AutomationRuleId::from(rule.as_str()), false).await?;
        }
        AutomationCommands::Delete { rule } => {
            rules.delete(&AutomationRuleId::from(rule.as_str())).await?;
        }
    }

    Ok(())
}
