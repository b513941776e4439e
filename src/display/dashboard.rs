//! Dashboard rendering
//!
//! Analytics sections that fell back to empty values carry a short
//! "unavailable" note instead of an error.

use super::{format_bar, format_percentage, separator, truncate};
use crate::analytics::{
    AnalyticsOutcome, CashFlowPeriod, CashFlowPoint, DashboardSummary, Insight, InsightSeverity,
    SpendSlice,
};
use crate::context::FinanceSnapshot;

const WIDTH: usize = 60;
const UNAVAILABLE: &str = "  (temporarily unavailable, showing empty values)\n";

fn section(title: &str) -> String {
    format!("\n{}\n{}\n", title, separator(WIDTH))
}

fn degraded_note<T>(outcome: &AnalyticsOutcome<T>) -> &'static str {
    if outcome.degraded {
        UNAVAILABLE
    } else {
        ""
    }
}

pub fn format_dashboard(summary: &AnalyticsOutcome<DashboardSummary>, symbol: &str) -> String {
    let s = &summary.data;
    let mut output = section("Dashboard");
    output.push_str(degraded_note(summary));
    output.push_str(&format!(
        "  Total balance:        {:>16}\n",
        s.total_balance.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Income this month:    {:>16}\n",
        s.monthly_income.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Expenses this month:  {:>16}\n",
        s.monthly_expenses.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Net savings:          {:>16}\n",
        s.net_savings().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Savings rate:         {:>16}\n",
        format_percentage(s.savings_rate)
    ));
    output.push_str(&format!(
        "  Investments:          {:>16}\n",
        s.total_investments.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Credit card debt:     {:>16}\n",
        s.credit_card_debt.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "  Upcoming commitments: {:>16}\n",
        s.upcoming_commitments.format_with_symbol(symbol)
    ));
    output
}

/// Income and expense bars per period, scaled to the largest value
pub fn format_cash_flow(
    flow: &AnalyticsOutcome<Vec<CashFlowPoint>>,
    period: CashFlowPeriod,
    symbol: &str,
) -> String {
    let mut output = section(&format!("Cash flow (by {})", period));
    output.push_str(degraded_note(flow));
    if flow.data.is_empty() {
        output.push_str("  No cash-flow data yet.\n");
        return output;
    }

    let max = flow
        .data
        .iter()
        .map(|p| p.income.as_decimal().max(p.expenses.as_decimal()))
        .fold(0.0, f64::max);

    for point in &flow.data {
        output.push_str(&format!(
            "  {:<10} in  {} {:>14}\n",
            truncate(&point.label, 10),
            format_bar(point.income.as_decimal(), max, 20),
            point.income.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "  {:<10} out {} {:>14}  net {}\n",
            "",
            format_bar(point.expenses.as_decimal(), max, 20),
            point.expenses.format_with_symbol(symbol),
            point.net().format_with_symbol(symbol)
        ));
    }
    output
}

pub fn format_insights(insights: &AnalyticsOutcome<Vec<Insight>>) -> String {
    let mut output = section("Insights");
    output.push_str(degraded_note(insights));
    if insights.data.is_empty() {
        output.push_str("  Nothing to report.\n");
        return output;
    }
    for insight in &insights.data {
        let icon = match insight.severity {
            InsightSeverity::Positive => "✓",
            InsightSeverity::Info => "ℹ",
            InsightSeverity::Warning => "⚠",
            InsightSeverity::Critical => "✗",
        };
        if insight.title.is_empty() {
            output.push_str(&format!("  {} {}\n", icon, insight.message));
        } else {
            output.push_str(&format!("  {} {}: {}\n", icon, insight.title, insight.message));
        }
    }
    output
}

pub fn format_spend_type(slices: &AnalyticsOutcome<Vec<SpendSlice>>, symbol: &str) -> String {
    let mut output = section("Spending by type");
    output.push_str(degraded_note(slices));
    if slices.data.is_empty() {
        output.push_str("  No spending recorded.\n");
        return output;
    }
    for slice in &slices.data {
        output.push_str(&format!(
            "  {:<12} {} {:>6} {:>14}\n",
            truncate(&slice.label, 12),
            format_bar(slice.percentage, 100.0, 20),
            format_percentage(slice.percentage),
            slice.amount.format_with_symbol(symbol)
        ));
    }
    output
}

/// Totals computed locally from the loaded collections
pub fn format_overview(snapshot: &FinanceSnapshot, symbol: &str) -> String {
    let mut output = section("Overview");
    let lines = [
        ("Bank balance", snapshot.total_bank_balance()),
        ("Portfolio value", snapshot.portfolio_value()),
        ("Vault", snapshot.total_vault()),
        ("Card debt", snapshot.total_card_debt()),
        ("Monthly commitments", snapshot.monthly_commitments()),
        ("Net worth", snapshot.net_worth()),
    ];
    for (label, amount) in lines {
        output.push_str(&format!(
            "  {:<22}{:>16}\n",
            format!("{}:", label),
            amount.format_with_symbol(symbol)
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::analytics::AnalyticsQueries;
    use crate::api::fake::{FakeBackend, Scripted};
    use crate::api::{endpoints, ApiClient, HttpMethod};
    use crate::config::{QuerySettings, Session};
    use crate::models::Money;
    use crate::query::{QueryClient, QueryOptions};

    #[tokio::test]
    async fn test_rate_limited_backend_renders_empty_dashboard() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail_next(
            endpoints::ANALYTICS_DASHBOARD,
            Scripted::Status(500, "Too many requests, please try again later.".into()),
        );
        backend.fail_next(
            endpoints::ANALYTICS_INSIGHTS,
            Scripted::Status(500, "Too many requests, please try again later.".into()),
        );
        let settings = QuerySettings {
            retry_delay_ms: 0,
            ..QuerySettings::default()
        };
        let queries = AnalyticsQueries::new(
            ApiClient::new(backend.clone(), Arc::new(Session::with_token("tok"))),
            Arc::new(QueryClient::new()),
            QueryOptions::analytics(&settings),
        );

        let summary = queries.summary().await;
        let insights = queries.insights().await;
        let output = format_dashboard(&summary, "₹");

        assert!(output.contains(UNAVAILABLE));
        assert!(output.contains("Total balance:"));
        assert!(!output.contains("Too many requests"));
        assert_eq!(summary.data, DashboardSummary::default());
        assert!(format_insights(&insights).contains(UNAVAILABLE));
        assert_eq!(backend.count(HttpMethod::Get, endpoints::ANALYTICS_DASHBOARD), 1);
        assert_eq!(backend.count(HttpMethod::Get, endpoints::ANALYTICS_INSIGHTS), 1);
    }

    #[test]
    fn test_degraded_summary_shows_note() {
        let outcome = AnalyticsOutcome {
            data: DashboardSummary::default(),
            degraded: true,
        };
        let output = format_dashboard(&outcome, "₹");
        assert!(output.contains("temporarily unavailable"));
        assert!(output.contains("₹0.00"));
    }

    #[test]
    fn test_cash_flow_bars() {
        let flow = AnalyticsOutcome {
            data: vec![CashFlowPoint {
                label: "Jan".into(),
                income: Money::from_major(50_000),
                expenses: Money::from_major(30_000),
            }],
            degraded: false,
        };
        let output = format_cash_flow(&flow, CashFlowPeriod::Month, "₹");
        assert!(output.contains("by month"));
        assert!(output.contains("net ₹20,000.00"));
        assert!(!output.contains("unavailable"));
    }

    #[test]
    fn test_insights() {
        let insights = AnalyticsOutcome {
            data: vec![Insight {
                title: "Dining".into(),
                message: "Up 20% on last month".into(),
                severity: InsightSeverity::Warning,
            }],
            degraded: false,
        };
        assert!(format_insights(&insights).contains("⚠ Dining: Up 20% on last month"));
    }
}
