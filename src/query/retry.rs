use std::time::Duration;

use crate::config::QuerySettings;
use crate::error::FinanceError;

/// When a failed fetch is attempted again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Retries after the first failure (so `1` means two attempts at most)
    pub max_retries: u32,
    /// Whether a rate-limit response may be retried at all
    pub retry_rate_limited: bool,
    pub delay: Duration,
}

impl RetryPolicy {
    /// A single attempt
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            retry_rate_limited: false,
            delay: Duration::ZERO,
        }
    }

    /// `failures` counts failed attempts so far, starting at 1
    pub fn should_retry(&self, failures: u32, error: &FinanceError) -> bool {
        if failures > self.max_retries || !error.is_retryable() {
            return false;
        }
        self.retry_rate_limited || !error.is_rate_limited()
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 1,
            retry_rate_limited: true,
            delay: Duration::from_secs(1),
        }
    }
}

/// Freshness and retry behaviour of one query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryOptions {
    pub stale_time: Duration,
    pub retry: RetryPolicy,
}

impl QueryOptions {
    /// Entity collections: short stale window, rate limits retried like any failure
    pub fn entities(settings: &QuerySettings) -> Self {
        Self {
            stale_time: settings.entity_stale_time(),
            retry: RetryPolicy {
                max_retries: settings.entity_retries,
                retry_rate_limited: true,
                delay: settings.retry_delay(),
            },
        }
    }

    /// Analytics views: long stale window, a rate limit ends the attempt
    pub fn analytics(settings: &QuerySettings) -> Self {
        Self {
            stale_time: settings.analytics_stale_time(),
            retry: RetryPolicy {
                max_retries: settings.analytics_retries,
                retry_rate_limited: false,
                delay: settings.retry_delay(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytics_policy() -> RetryPolicy {
        QueryOptions::analytics(&QuerySettings::default()).retry
    }

    #[test]
    fn test_retries_once_then_stops() {
        let policy = analytics_policy();
        let err = FinanceError::Network("reset".into());
        assert!(policy.should_retry(1, &err));
        assert!(!policy.should_retry(2, &err));
    }

    #[test]
    fn test_rate_limit_not_retried_for_analytics() {
        let err = FinanceError::from_api(Some(500), "Too many requests, slow down");
        assert!(!analytics_policy().should_retry(1, &err));
        assert!(QueryOptions::entities(&QuerySettings::default())
            .retry
            .should_retry(1, &err));
    }

    #[test]
    fn test_client_errors_not_retried() {
        let policy = RetryPolicy::default();
        assert!(!policy.should_retry(1, &FinanceError::Validation("x".into())));
        assert!(!policy.should_retry(1, &FinanceError::NotAuthenticated));
        assert!(!policy.should_retry(1, &FinanceError::from_api(Some(404), "gone")));
        assert!(policy.should_retry(1, &FinanceError::from_api(Some(503), "busy")));
        assert!(!RetryPolicy::none().should_retry(1, &FinanceError::Network("x".into())));
    }
}
