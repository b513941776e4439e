//! Administrative utilities
//!
//! Secret generation for deploying the backend, and a full wipe of the
//! signed-in user's records.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::context::FinanceContext;
use crate::error::{FinanceError, FinanceResult};
use crate::models::Resource;
use crate::stores::EntityStore;

/// Names of the generated deployment secrets, in output order
pub const SECRET_NAMES: [&str; 3] = ["JWT_SECRET", "JWT_REFRESH_SECRET", "SESSION_SECRET"];

/// Bytes of entropy per secret
pub const SECRET_BYTES: usize = 32;

pub struct Secret {
    pub name: &'static str,
    pub value: Zeroizing<String>,
}

impl Secret {
    /// `NAME=value`, ready for an env file
    pub fn env_line(&self) -> String {
        format!("{}={}", self.name, self.value.as_str())
    }
}

/// Fresh 256-bit values from the OS RNG, base64 encoded
pub fn generate_secrets() -> Vec<Secret> {
    SECRET_NAMES
        .iter()
        .map(|&name| {
            let mut bytes = Zeroizing::new([0u8; SECRET_BYTES]);
            OsRng.fill_bytes(&mut bytes[..]);
            Secret {
                name,
                value: Zeroizing::new(STANDARD.encode(&bytes[..])),
            }
        })
        .collect()
}

/// Records deleted per collection, in deletion order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WipeReport {
    pub deleted: Vec<(&'static str, usize)>,
}

impl WipeReport {
    pub fn total(&self) -> usize {
        self.deleted.iter().map(|(_, n)| n).sum()
    }

    pub fn count(&self, collection: &str) -> usize {
        self.deleted
            .iter()
            .find(|(name, _)| *name == collection)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

async fn wipe_collection<R: Resource>(
    store: &EntityStore<R>,
    report: &mut WipeReport,
) -> FinanceResult<()> {
    let records = store.try_entities().await?;
    let mut deleted = 0;
    for record in &records {
        store.delete(record.id()).await?;
        deleted += 1;
    }
    info!(collection = R::PATH, deleted, "collection wiped");
    report.deleted.push((R::PATH, deleted));
    Ok(())
}

async fn wipe_in_order(ctx: &FinanceContext, report: &mut WipeReport) -> FinanceResult<()> {
    wipe_collection(&ctx.transactions, report).await?;
    wipe_collection(&ctx.sips, report).await?;
    wipe_collection(&ctx.investments, report).await?;
    wipe_collection(&ctx.commitments, report).await?;
    wipe_collection(&ctx.vault, report).await?;
    wipe_collection(&ctx.budgets, report).await?;
    wipe_collection(&ctx.debit_cards, report).await?;
    wipe_collection(&ctx.credit_cards, report).await?;
    wipe_collection(&ctx.bank_accounts, report).await?;
    wipe_collection(&ctx.categories, report).await
}

/// Delete every record the user owns, dependants first
///
/// Stops at the first failure; collections already wiped stay wiped.
pub async fn wipe_user_data(ctx: &FinanceContext) -> FinanceResult<WipeReport> {
    if !ctx.is_authenticated() {
        return Err(FinanceError::NotAuthenticated);
    }

    let mut report = WipeReport::default();
    if let Err(err) = wipe_in_order(ctx, &mut report).await {
        warn!(error = %err, deleted = report.total(), "wipe stopped early");
        return Err(err);
    }
    ctx.reset();
    Ok(report)
}
