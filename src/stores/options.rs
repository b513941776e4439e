//! Settings-options store
//!
//! The per-user option lists behind every free-text choice field.

use std::sync::Arc;

use tracing::{info, warn};

use crate::api::{endpoints, ApiClient};
use crate::error::{FinanceError, FinanceResult};
use crate::models::UserOptions;
use crate::notify::{Notification, Notifier};
use crate::query::{QueryClient, QueryKey, QueryOptions};

pub struct OptionsStore {
    api: ApiClient,
    cache: Arc<QueryClient>,
    notifier: Arc<dyn Notifier>,
    options: QueryOptions,
}

impl OptionsStore {
    pub fn new(
        api: ApiClient,
        cache: Arc<QueryClient>,
        notifier: Arc<dyn Notifier>,
        options: QueryOptions,
    ) -> Self {
        Self {
            api,
            cache,
            notifier,
            options,
        }
    }

    pub fn key() -> QueryKey {
        QueryKey::from("options")
    }

    pub fn version(&self) -> u64 {
        self.cache.version(&Self::key())
    }

    /// Load the user's lists, with defaults filled in
    pub async fn try_options(&self) -> FinanceResult<UserOptions> {
        if !self.api.is_authenticated() {
            return Ok(UserOptions::default());
        }

        let api = &self.api;
        let options = self
            .cache
            .fetch_query(&Self::key(), &self.options, move || async move {
                let fetched = api.get::<UserOptions>(endpoints::OPTIONS).await.into_result()?;
                Ok(fetched.unwrap_or_default().with_defaults())
            })
            .await?;
        Ok(options)
    }

    /// Load the user's lists; any failure falls back to the defaults
    pub async fn options(&self) -> UserOptions {
        match self.try_options().await {
            Ok(options) => options,
            Err(err) => {
                warn!(error = %err, "failed to load options, using defaults");
                UserOptions::default()
            }
        }
    }

    /// Save the lists; the cache holds the server's copy afterwards
    pub async fn update(&self, options: &UserOptions) -> FinanceResult<UserOptions> {
        if !self.api.is_authenticated() {
            return Err(self.report(FinanceError::NotAuthenticated));
        }

        let saved = match self
            .api
            .put::<UserOptions, _>(endpoints::OPTIONS, options)
            .await
            .into_result()
        {
            Ok(saved) => saved.unwrap_or_else(|| options.clone()).with_defaults(),
            Err(err) => return Err(self.report(err)),
        };
        self.cache.set_query_data(&Self::key(), &saved)?;
        info!("options updated");
        Ok(saved)
    }

    fn report(&self, err: FinanceError) -> FinanceError {
        self.notifier
            .notify(Notification::error(format!("Failed to update options: {}", err)));
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeBackend;
    use crate::config::{QuerySettings, Session};
    use crate::models::OptionList;
    use crate::notify::NotificationLog;
    use serde_json::json;

    fn store(backend: Arc<FakeBackend>) -> OptionsStore {
        let api = ApiClient::new(backend, Arc::new(Session::with_token("tok")));
        OptionsStore::new(
            api,
            Arc::new(QueryClient::new()),
            Arc::new(NotificationLog::new()),
            QueryOptions::entities(&QuerySettings::default()),
        )
    }

    #[tokio::test]
    async fn test_options_fill_defaults() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(endpoints::OPTIONS, json!({ "accountTypes": ["nre", "nro"] }));

        let opts = store(backend).options().await;
        assert_eq!(opts.account_types, vec!["nre".to_string(), "nro".to_string()]);
        assert!(!opts.list(OptionList::CardNetworks).is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_cache() {
        let backend = Arc::new(FakeBackend::new());
        backend.set_document(endpoints::OPTIONS, json!({}));
        let store = store(backend.clone());

        let mut opts = store.options().await;
        opts.vault_categories.push("wedding".into());
        store.update(&opts).await.unwrap();

        assert!(store.options().await.vault_categories.contains(&"wedding".to_string()));
        assert_eq!(backend.request_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_defaults() {
        let backend = Arc::new(FakeBackend::new());
        let opts = store(backend).options().await;
        assert_eq!(opts, UserOptions::default());
    }
}
