//! Generic entity store
//!
//! One store per backend collection. Reads go through the query cache;
//! creates are pessimistic (the server record is appended once it comes
//! back with an id), deletes are optimistic (removed first, restored if the
//! request fails).

use std::marker::PhantomData;
use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};

use crate::api::{endpoints, ApiClient};
use crate::error::{FinanceError, FinanceResult};
use crate::models::{EntityId, Resource};
use crate::notify::{Notification, Notifier};
use crate::query::{QueryClient, QueryKey, QueryOptions};

pub struct EntityStore<R: Resource> {
    api: ApiClient,
    cache: Arc<QueryClient>,
    notifier: Arc<dyn Notifier>,
    options: QueryOptions,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> EntityStore<R> {
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
            _record: PhantomData,
        }
    }

    /// Cache key of the collection
    pub fn key() -> QueryKey {
        QueryKey::from(R::PATH)
    }

    /// Version of the cached list, 0 before the first load
    pub fn version(&self) -> u64 {
        self.cache.version(&Self::key())
    }

    /// Read the collection, surfacing failures
    ///
    /// Without an access token nothing is requested and the list is empty.
    pub async fn try_entities(&self) -> FinanceResult<Vec<R>> {
        if !self.api.is_authenticated() {
            return Ok(Vec::new());
        }

        let api = &self.api;
        let mut records = self
            .cache
            .fetch_query(&Self::key(), &self.options, move || async move {
                api.get::<Vec<R>>(R::PATH).await.into_data()
            })
            .await?;
        records.iter_mut().for_each(R::normalize);
        Ok(records)
    }

    /// Read the collection; failures degrade to an empty list
    pub async fn entities(&self) -> Vec<R> {
        match self.try_entities().await {
            Ok(records) => records,
            Err(err) => {
                warn!(collection = R::PATH, error = %err, "failed to load, showing nothing");
                Vec::new()
            }
        }
    }

    /// Whatever is cached, without touching the network
    pub fn cached(&self) -> Vec<R> {
        let mut records: Vec<R> = self.cache.get_query_data(&Self::key()).unwrap_or_default();
        records.iter_mut().for_each(R::normalize);
        records
    }

    /// Find a record by id, or by title (case-insensitive)
    pub async fn find(&self, needle: &str) -> FinanceResult<R> {
        let needle = needle.trim();
        let records = self.try_entities().await?;
        records
            .iter()
            .find(|r| r.id().as_str() == needle)
            .or_else(|| records.iter().find(|r| r.title().eq_ignore_ascii_case(needle)))
            .cloned()
            .ok_or_else(|| FinanceError::not_found(R::LABEL, needle))
    }

    /// Create a record; the returned copy carries the server-assigned id
    pub async fn add(&self, record: &R) -> FinanceResult<R> {
        self.require_token("add")?;

        let mut created = match self.api.post::<R, R>(R::PATH, record).await.into_data() {
            Ok(created) => created,
            Err(err) => return Err(self.report("add", err)),
        };
        if created.id().is_unassigned() {
            let err = FinanceError::Api {
                status: None,
                message: format!("{} was saved without an id", R::LABEL),
            };
            return Err(self.report("add", err));
        }
        created.normalize();

        let appended = created.clone();
        let cached = self
            .cache
            .update_query_data::<Vec<R>, _>(&Self::key(), move |list| list.push(appended))?;
        if !cached {
            // never loaded: pull the list so readers of the cache see the new record
            self.cache.invalidate_queries(&Self::key());
            if let Err(err) = self.try_entities().await {
                warn!(collection = R::PATH, error = %err, "reload after create failed");
            }
        }
        self.invalidate_dependants();

        info!(collection = R::PATH, id = %created.id(), "created");
        Ok(created)
    }

    /// Replace a record; the cached copy is swapped for the server's version
    pub async fn update(&self, id: &R::Id, record: &R) -> FinanceResult<R> {
        self.require_token("update")?;

        let path = endpoints::item(R::PATH, id.as_str());
        let mut updated = match self.api.put::<R, R>(&path, record).await.into_data() {
            Ok(updated) => updated,
            Err(err) => return Err(self.report("update", err)),
        };
        if updated.id().is_unassigned() {
            updated = with_id(updated, id)?;
        }
        updated.normalize();

        let replacement = updated.clone();
        let replaced = self.cache.update_query_data::<Vec<R>, _>(&Self::key(), move |list| {
            if let Some(slot) = list.iter_mut().find(|r| r.id() == replacement.id()) {
                *slot = replacement;
            }
        })?;
        if !replaced {
            self.cache.invalidate_queries(&Self::key());
        }
        self.invalidate_dependants();

        info!(collection = R::PATH, id = %id, "updated");
        Ok(updated)
    }

    /// Delete a record, removing it from the cached list before the request
    pub async fn delete(&self, id: &R::Id) -> FinanceResult<()> {
        self.require_token("delete")?;

        let key = Self::key();
        let previous: Option<Vec<R>> = self.cache.get_query_data(&key);
        if let Some(list) = &previous {
            let remaining: Vec<&R> = list.iter().filter(|r| r.id() != id).collect();
            self.cache.set_query_data(&key, &remaining)?;
        }

        let path = endpoints::item(R::PATH, id.as_str());
        match self.api.delete::<Value>(&path).await.into_result() {
            Ok(_) => {
                self.invalidate_dependants();
                info!(collection = R::PATH, %id, "deleted");
                Ok(())
            }
            Err(err) => {
                if let Some(list) = previous {
                    self.cache.set_query_data(&key, &list)?;
                }
                Err(self.report("delete", err))
            }
        }
    }

    fn require_token(&self, action: &str) -> FinanceResult<()> {
        if self.api.is_authenticated() {
            Ok(())
        } else {
            Err(self.report(action, FinanceError::NotAuthenticated))
        }
    }

    fn invalidate_dependants(&self) {
        for dependant in R::INVALIDATES {
            self.cache.invalidate_queries(&QueryKey::from(*dependant));
        }
    }

    fn report(&self, action: &str, err: FinanceError) -> FinanceError {
        warn!(collection = R::PATH, action, error = %err, "mutation failed");
        self.notifier.notify(Notification::error(format!(
            "Failed to {} {}: {}",
            action,
            R::LABEL.to_lowercase(),
            err
        )));
        err
    }
}

/// Put `id` back on a record the server echoed without one
fn with_id<R: Resource>(record: R, id: &R::Id) -> FinanceResult<R> {
    let mut value = serde_json::to_value(&record)?;
    if let Value::Object(map) = &mut value {
        map.insert("id".into(), Value::String(id.as_str().to_string()));
    }
    Ok(serde_json::from_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{FakeBackend, Scripted};
    use crate::api::HttpMethod;
    use crate::config::{QuerySettings, Session};
    use crate::models::{
        BankAccount, BankAccountId, CreditCard, Money, Transaction, TransactionType,
    };
    use crate::notify::{NotificationLog, NotificationType};
    use chrono::NaiveDate;
    use serde_json::json;

    struct Harness {
        backend: Arc<FakeBackend>,
        cache: Arc<QueryClient>,
        log: Arc<NotificationLog>,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                backend: Arc::new(FakeBackend::new()),
                cache: Arc::new(QueryClient::new()),
                log: Arc::new(NotificationLog::new()),
            }
        }

        fn store<R: Resource>(&self, token: Option<&str>) -> EntityStore<R> {
            let session = match token {
                Some(t) => Session::with_token(t),
                None => Session::anonymous(),
            };
            let api = ApiClient::new(self.backend.clone(), Arc::new(session));
            let settings = QuerySettings {
                retry_delay_ms: 0,
                ..QuerySettings::default()
            };
            EntityStore::new(
                api,
                self.cache.clone(),
                self.log.clone(),
                QueryOptions::entities(&settings),
            )
        }
    }

    fn account(name: &str) -> BankAccount {
        BankAccount {
            id: BankAccountId::unassigned(),
            bank_name: name.into(),
            account_type: "savings".into(),
            balance: Money::from_major(1000),
            account_number: None,
        }
    }

    #[tokio::test]
    async fn test_add_appends_server_record() {
        let h = Harness::new();
        let store = h.store::<BankAccount>(Some("tok"));

        assert!(store.entities().await.is_empty());
        let created = store.add(&account("HDFC")).await.unwrap();
        assert!(!created.id.is_unassigned());

        let listed = store.entities().await;
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        // list was fresh, so the append was served from cache
        assert_eq!(h.backend.count(HttpMethod::Get, "accounts"), 1);
    }

    #[tokio::test]
    async fn test_add_into_unloaded_list_fills_cache() {
        let h = Harness::new();
        h.backend.seed("accounts", vec![json!({"id":"a1","bankName":"ICICI","accountType":"savings","balance":10})]);
        let store = h.store::<BankAccount>(Some("tok"));

        assert!(store.cached().is_empty());
        let created = store.add(&account("HDFC")).await.unwrap();

        let cached = store.cached();
        assert_eq!(cached.len(), 2);
        assert!(cached.iter().any(|a| a.id == created.id));
        assert_eq!(h.backend.count(HttpMethod::Get, "accounts"), 1);
    }

    #[tokio::test]
    async fn test_legacy_card_row_keeps_list_visible() {
        let h = Harness::new();
        h.backend.seed(
            "credit-cards",
            vec![
                json!({"id":"c1","name":"Regalia","creditLimit":100000,"dueDate":15}),
                json!({"id":"c2","name":"Amazon Pay","creditLimit":50000,"dueDate":"2024-05-15"}),
            ],
        );
        let store = h.store::<CreditCard>(Some("tok"));

        let cards = store.try_entities().await.unwrap();
        assert_eq!(cards.len(), 2);
        assert!(cards.iter().all(|c| c.due_day() == Some(15)));
    }

    #[tokio::test]
    async fn test_add_without_server_id_fails() {
        let h = Harness::new();
        h.backend.omit_ids_on_create();
        let store = h.store::<BankAccount>(Some("tok"));

        let err = store.add(&account("SBI")).await.unwrap_err();
        assert!(err.to_string().contains("without an id"));
        assert_eq!(h.log.messages(NotificationType::Error).len(), 1);
    }

    #[tokio::test]
    async fn test_add_transaction_invalidates_related() {
        let h = Harness::new();
        let accounts = h.store::<BankAccount>(Some("tok"));
        let transactions = h.store::<Transaction>(Some("tok"));
        accounts.entities().await;

        let txn = Transaction {
            id: Default::default(),
            kind: TransactionType::Expense,
            amount: Money::from_major(200),
            category: "Food".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            description: "Lunch".into(),
            account_id: None,
        };
        transactions.add(&txn).await.unwrap();

        assert!(h.cache.is_invalidated(&EntityStore::<BankAccount>::key()));
        accounts.entities().await;
        assert_eq!(h.backend.count(HttpMethod::Get, "accounts"), 2);
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let h = Harness::new();
        h.backend.seed(
            "accounts",
            vec![
                json!({"id":"a1","bankName":"HDFC","accountType":"savings","balance":10}),
                json!({"id":"a2","bankName":"SBI","accountType":"salary","balance":20}),
            ],
        );
        let store = h.store::<BankAccount>(Some("tok"));
        assert_eq!(store.entities().await.len(), 2);

        store.delete(&BankAccountId::from("a1")).await.unwrap();
        let ids: Vec<_> = store.entities().await.into_iter().map(|a| a.id.to_string()).collect();
        assert_eq!(ids, vec!["a2"]);
        assert_eq!(h.backend.collection("accounts").len(), 1);
    }

    #[tokio::test]
    async fn test_failed_delete_restores_list() {
        let h = Harness::new();
        h.backend.seed(
            "accounts",
            vec![json!({"id":"a1","bankName":"HDFC","accountType":"savings"})],
        );
        let store = h.store::<BankAccount>(Some("tok"));
        store.entities().await;

        h.backend.fail_next("accounts/a1", Scripted::Status(500, "database unavailable".into()));
        let err = store.delete(&BankAccountId::from("a1")).await.unwrap_err();
        assert_eq!(err.to_string(), "database unavailable");

        assert_eq!(store.cached().len(), 1);
        assert_eq!(
            h.log.last().unwrap().message,
            "Failed to delete account: database unavailable"
        );
    }

    #[tokio::test]
    async fn test_update_replaces_cached_item() {
        let h = Harness::new();
        h.backend.seed(
            "accounts",
            vec![json!({"id":"a1","bankName":"HDFC","accountType":"savings","balance":10})],
        );
        let store = h.store::<BankAccount>(Some("tok"));
        let mut existing = store.entities().await.remove(0);

        existing.balance = Money::from_major(99);
        store.update(&existing.id.clone(), &existing).await.unwrap();

        assert_eq!(store.entities().await[0].balance, Money::from_major(99));
        assert_eq!(h.backend.count(HttpMethod::Get, "accounts"), 1);
    }

    #[tokio::test]
    async fn test_no_token_means_no_requests() {
        let h = Harness::new();
        let store = h.store::<BankAccount>(None);

        assert!(store.entities().await.is_empty());
        assert_eq!(store.add(&account("X")).await.unwrap_err(), FinanceError::NotAuthenticated);
        assert_eq!(h.backend.request_count(), 0);
    }

    #[tokio::test]
    async fn test_read_failure_degrades_after_one_retry() {
        let h = Harness::new();
        h.backend.fail_next("accounts", Scripted::Network);
        h.backend.fail_next("accounts", Scripted::Network);
        let store = h.store::<BankAccount>(Some("tok"));

        assert!(store.try_entities().await.unwrap_err().to_string().contains("Network"));
        assert_eq!(h.backend.request_count(), 2);
        assert!(store.entities().await.is_empty());
    }

    #[tokio::test]
    async fn test_find_by_id_or_title() {
        let h = Harness::new();
        h.backend.seed(
            "accounts",
            vec![json!({"id":"a7","bankName":"Axis Bank","accountType":"current"})],
        );
        let store = h.store::<BankAccount>(Some("tok"));

        assert_eq!(store.find("a7").await.unwrap().bank_name, "Axis Bank");
        assert_eq!(store.find("axis bank").await.unwrap().id.to_string(), "a7");
        assert!(store.find("nope").await.unwrap_err().is_not_found());
    }
}
