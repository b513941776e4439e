//! Backend routes below `/api`

pub const OPTIONS: &str = "settings/options";
pub const DELETE_ACCOUNT: &str = "auth/delete-account";
pub const ANALYTICS_DASHBOARD: &str = "analytics/dashboard";
pub const ANALYTICS_CASH_FLOW: &str = "analytics/cash-flow";
pub const ANALYTICS_INSIGHTS: &str = "analytics/insights";
pub const ANALYTICS_SPEND_TYPE: &str = "analytics/spend-type";

/// `<collection>/<id>`
pub fn item(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}
