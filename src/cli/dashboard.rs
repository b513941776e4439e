//! Dashboard command

use clap::Args;

use super::signed_out_hint;
use crate::analytics::{AnalyticsQueries, CashFlowPeriod};
use crate::context::FinanceContext;
use crate::display::{
    format_cash_flow, format_dashboard, format_insights, format_overview, format_spend_type,
};
use crate::error::{FinanceError, FinanceResult};
use crate::query::QueryOptions;
use crate::setup::SetupStatus;

#[derive(Args)]
pub struct DashboardArgs {
    /// Cash-flow grouping: month or quarter
    #[arg(short, long, default_value = "month")]
    pub period: String,

    /// Also show totals computed from your records
    #[arg(long)]
    pub overview: bool,
}

pub async fn handle_dashboard(ctx: &FinanceContext, args: DashboardArgs) -> FinanceResult<()> {
    let period = CashFlowPeriod::parse(&args.period).ok_or_else(|| {
        FinanceError::Validation(format!(
            "Invalid period '{}'. Use month or quarter",
            args.period
        ))
    })?;
    signed_out_hint(ctx);

    let analytics = AnalyticsQueries::new(
        ctx.api().clone(),
        ctx.cache().clone(),
        QueryOptions::analytics(&ctx.settings().query),
    );
    let (summary, flow, insights, spend) = tokio::join!(
        analytics.summary(),
        analytics.cash_flow(period),
        analytics.insights(),
        analytics.spend_type(),
    );

    let symbol = ctx.currency();
    print!("{}", format_dashboard(&summary, symbol));
    print!("{}", format_cash_flow(&flow, period, symbol));
    print!("{}", format_spend_type(&spend, symbol));
    print!("{}", format_insights(&insights));

    if args.overview || ctx.is_authenticated() {
        let snapshot = ctx.refresh().await;
        if args.overview {
            print!("{}", format_overview(&snapshot, symbol));
        }

        let counts = snapshot.counts();
        if ctx.is_authenticated() && SetupStatus::derive(&counts).needs_setup {
            println!("\nGetting started:");
            for step in SetupStatus::checklist(&counts) {
                println!("  - {}", step);
            }
        }
    }

    Ok(())
}
