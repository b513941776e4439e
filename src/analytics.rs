//! Dashboard analytics
//!
//! Read-only aggregate views computed by the backend. These bypass the
//! finance context: they have their own cache window, and a failure never
//! reaches the caller. A rate-limit reply ends the attempt at once; other
//! failures get one retry. Either way the caller receives an empty value
//! flagged as degraded.

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::api::{endpoints, ApiClient};
use crate::models::Money;
use crate::query::{QueryClient, QueryKey, QueryOptions};

/// Headline numbers for the dashboard cards
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardSummary {
    #[serde(alias = "balance")]
    pub total_balance: Money,
    #[serde(alias = "totalIncome")]
    pub monthly_income: Money,
    #[serde(alias = "totalExpenses")]
    pub monthly_expenses: Money,
    pub savings_rate: f64,
    pub total_investments: Money,
    pub credit_card_debt: Money,
    pub upcoming_commitments: Money,
}

impl DashboardSummary {
    pub fn net_savings(&self) -> Money {
        self.monthly_income - self.monthly_expenses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CashFlowPeriod {
    #[default]
    Month,
    Quarter,
}

impl CashFlowPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "month" | "monthly" | "m" => Some(Self::Month),
            "quarter" | "quarterly" | "q" => Some(Self::Quarter),
            _ => None,
        }
    }
}

impl fmt::Display for CashFlowPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bar of the cash-flow chart
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CashFlowPoint {
    #[serde(alias = "period", alias = "month")]
    pub label: String,
    pub income: Money,
    pub expenses: Money,
}

impl CashFlowPoint {
    pub fn net(&self) -> Money {
        self.income - self.expenses
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightSeverity {
    Positive,
    Warning,
    Critical,
    #[default]
    #[serde(other)]
    Info,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Insight {
    pub title: String,
    #[serde(alias = "description")]
    pub message: String,
    #[serde(alias = "type")]
    pub severity: InsightSeverity,
}

/// Share of spending by type (needs, wants, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpendSlice {
    #[serde(alias = "type", alias = "name")]
    pub label: String,
    pub amount: Money,
    pub percentage: f64,
}

/// A value plus whether it is a fallback standing in for a failed fetch
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsOutcome<T> {
    pub data: T,
    pub degraded: bool,
}

impl<T: Default> AnalyticsOutcome<T> {
    fn fresh(data: T) -> Self {
        Self {
            data,
            degraded: false,
        }
    }

    fn fallback() -> Self {
        Self {
            data: T::default(),
            degraded: true,
        }
    }
}

pub struct AnalyticsQueries {
    api: ApiClient,
    cache: Arc<QueryClient>,
    options: QueryOptions,
}

impl AnalyticsQueries {
    pub fn new(api: ApiClient, cache: Arc<QueryClient>, options: QueryOptions) -> Self {
        Self { api, cache, options }
    }

    fn root() -> QueryKey {
        QueryKey::from("analytics")
    }

    pub async fn summary(&self) -> AnalyticsOutcome<DashboardSummary> {
        self.load(Self::root().child("dashboard"), endpoints::ANALYTICS_DASHBOARD, &[])
            .await
    }

    pub async fn cash_flow(&self, period: CashFlowPeriod) -> AnalyticsOutcome<Vec<CashFlowPoint>> {
        let key = Self::root().child("cash-flow").child(period.as_str());
        self.load(key, endpoints::ANALYTICS_CASH_FLOW, &[("period", period.as_str())])
            .await
    }

    pub async fn insights(&self) -> AnalyticsOutcome<Vec<Insight>> {
        self.load(Self::root().child("insights"), endpoints::ANALYTICS_INSIGHTS, &[])
            .await
    }

    pub async fn spend_type(&self) -> AnalyticsOutcome<Vec<SpendSlice>> {
        self.load(Self::root().child("spend-type"), endpoints::ANALYTICS_SPEND_TYPE, &[])
            .await
    }

    /// Drop every cached view
    pub fn reset(&self) {
        self.cache.remove_queries(&Self::root());
    }

    async fn load<T>(&self, key: QueryKey, path: &str, query: &[(&str, &str)]) -> AnalyticsOutcome<T>
    where
        T: Default + Serialize + DeserializeOwned,
    {
        if !self.api.is_authenticated() {
            return AnalyticsOutcome::fresh(T::default());
        }

        let api = &self.api;
        let result = self
            .cache
            .fetch_query(&key, &self.options, move || async move {
                let data = api.get_with_query::<T>(path, query).await.into_result()?;
                Ok(data.unwrap_or_default())
            })
            .await;

        match result {
            Ok(data) => AnalyticsOutcome::fresh(data),
            Err(err) if err.is_rate_limited() => {
                info!(%key, "rate limited, showing empty view");
                AnalyticsOutcome::fallback()
            }
            Err(err) => {
                warn!(%key, error = %err, "analytics unavailable, showing empty view");
                AnalyticsOutcome::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeBackend, Scripted};
    use crate::api::HttpMethod;
    use crate::config::{QuerySettings, Session};
    use serde_json::json;

    fn queries(backend: Arc<FakeBackend>, token: Option<&str>) -> AnalyticsQueries {
        let session = token.map(Session::with_token).unwrap_or_else(Session::anonymous);
        let settings = QuerySettings {
            retry_delay_ms: 0,
            ..QuerySettings::default()
        };
        AnalyticsQueries::new(
            ApiClient::new(backend, Arc::new(session)),
            Arc::new(QueryClient::new()),
            QueryOptions::analytics(&settings),
        )
    }

    #[tokio::test]
    async fn test_summary_reads_backend_shape() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(
            endpoints::ANALYTICS_DASHBOARD,
            json!({"totalBalance": 150000, "totalIncome": 80000, "totalExpenses": 52000.5, "savingsRate": 35.0}),
        );

        let outcome = queries(backend, Some("tok")).summary().await;
        assert!(!outcome.degraded);
        assert_eq!(outcome.data.total_balance, Money::from_major(150_000));
        assert_eq!(outcome.data.net_savings(), Money::from_cents(2_799_950));
    }

    #[tokio::test]
    async fn test_rate_limit_is_not_retried() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(endpoints::ANALYTICS_INSIGHTS, json!([]));
        backend.fail_next(
            endpoints::ANALYTICS_INSIGHTS,
            Scripted::Status(500, "Too many requests, please try again later.".into()),
        );

        let outcome = queries(backend.clone(), Some("tok")).insights().await;
        assert!(outcome.degraded);
        assert!(outcome.data.is_empty());
        assert_eq!(backend.count(HttpMethod::Get, endpoints::ANALYTICS_INSIGHTS), 1);
    }

    #[tokio::test]
    async fn test_429_without_message_is_not_retried() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail_next(endpoints::ANALYTICS_SPEND_TYPE, Scripted::Body(429, String::new()));

        let outcome = queries(backend.clone(), Some("tok")).spend_type().await;
        assert!(outcome.degraded);
        assert_eq!(backend.request_count(), 1);
    }

    #[tokio::test]
    async fn test_other_failures_retry_once() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(
            endpoints::ANALYTICS_CASH_FLOW,
            json!([{"month": "Jan", "income": 100, "expenses": 40}]),
        );
        backend.fail_next(endpoints::ANALYTICS_CASH_FLOW, Scripted::Network);

        let outcome = queries(backend.clone(), Some("tok")).cash_flow(CashFlowPeriod::Month).await;
        assert!(!outcome.degraded);
        assert_eq!(outcome.data[0].label, "Jan");
        assert_eq!(outcome.data[0].net(), Money::from_major(60));
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test]
    async fn test_persistent_failure_degrades_after_two_attempts() {
        let backend = Arc::new(FakeBackend::new());
        backend.fail_next(endpoints::ANALYTICS_DASHBOARD, Scripted::Status(503, "down".into()));
        backend.fail_next(endpoints::ANALYTICS_DASHBOARD, Scripted::Status(503, "down".into()));

        let outcome = queries(backend.clone(), Some("tok")).summary().await;
        assert!(outcome.degraded);
        assert_eq!(outcome.data, DashboardSummary::default());
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test]
    async fn test_views_are_cached_per_period() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(endpoints::ANALYTICS_CASH_FLOW, json!([]));
        let queries = queries(backend.clone(), Some("tok"));

        queries.cash_flow(CashFlowPeriod::Month).await;
        queries.cash_flow(CashFlowPeriod::Month).await;
        queries.cash_flow(CashFlowPeriod::Quarter).await;
        assert_eq!(backend.request_count(), 2);

        queries.reset();
        queries.cash_flow(CashFlowPeriod::Month).await;
        assert_eq!(backend.request_count(), 3);
    }

    #[tokio::test]
    async fn test_no_token_no_request() {
        let backend = Arc::new(FakeBackend::new());
        let outcome = queries(backend.clone(), None).summary().await;
        assert!(!outcome.degraded);
        assert_eq!(backend.request_count(), 0);
    }

    #[test]
    fn test_unknown_severity_is_info() {
        let insight: Insight =
            serde_json::from_str(r#"{"title":"Heads up","description":"x","type":"tip"}"#).unwrap();
        assert_eq!(insight.severity, InsightSeverity::Info);
        assert_eq!(CashFlowPeriod::parse("Quarterly"), Some(CashFlowPeriod::Quarter));
    }
}
