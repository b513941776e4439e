//! Account deletion, deployment secrets and data wipe

use crate::admin::{generate_secrets, wipe_user_data};
use crate::config::paths::FintrackPaths;
use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::modals::DeleteAccountModal;

use super::confirm;

/// Prompt for a password (hidden input)
fn prompt_password(prompt: &str) -> FinanceResult<String> {
    rpassword::prompt_password(prompt)
        .map_err(|e| FinanceError::Io(format!("Failed to read password: {}", e)))
}

pub async fn handle_delete_account(
    ctx: &FinanceContext,
    paths: &FintrackPaths,
    yes: bool,
) -> FinanceResult<()> {
    if !ctx.is_authenticated() {
        return Err(FinanceError::NotAuthenticated);
    }

    println!("This permanently deletes your account and every record in it.");
    if !yes && !confirm("Continue?")? {
        println!("Cancelled.");
        return Ok(());
    }

    let mut modal = DeleteAccountModal::new();
    modal.open();
    modal.set_password(prompt_password("Password: ")?);
    modal.confirm(ctx).await?;

    ctx.api().session().forget(paths)?;
    Ok(())
}

pub fn handle_secrets() -> FinanceResult<()> {
    for secret in generate_secrets() {
        println!("{}", secret.env_line());
    }
    Ok(())
}

pub async fn handle_wipe(ctx: &FinanceContext, yes: bool) -> FinanceResult<()> {
    if !ctx.is_authenticated() {
        return Err(FinanceError::NotAuthenticated);
    }

    if !yes
        && !confirm("Delete ALL of your records? Your account stays, everything in it goes.")?
    {
        println!("Cancelled.");
        return Ok(());
    }

    let report = wipe_user_data(ctx).await?;
    for (collection, count) in &report.deleted {
        if *count > 0 {
            println!("  {:<14} {:>5}", collection, count);
        }
    }
    println!("Deleted {} records", report.total());
    Ok(())
}
