//! Finance context
//!
//! One object per session holding every entity store over a shared API
//! client and query cache. It is built once and passed by reference to
//! whatever needs it. The aggregated [`FinanceSnapshot`] is memoized on the
//! cache versions of the underlying collections.

use std::sync::{Arc, Mutex};

use tracing::debug;

use crate::api::ApiClient;
use crate::config::Settings;
use crate::models::{
    BankAccount, BudgetCategory, Category, Commitment, CreditCard, DebitCard, Investment, Money,
    Sip, Transaction, UserOptions, VaultEntry,
};
use crate::notify::Notifier;
use crate::query::{QueryClient, QueryOptions};
use crate::setup::{SetupCounts, SetupStatus};
use crate::stores::{
    AutomationRules, BankAccountStore, BudgetStore, CategoryStore, CommitmentStore,
    CreditCardStore, DebitCardStore, EntityStore, InvestmentStore, OptionsStore, SipStore,
    TransactionStore, VaultStore,
};

/// Every collection as last loaded
#[derive(Debug, Clone, Default)]
pub struct FinanceSnapshot {
    pub transactions: Vec<Transaction>,
    pub bank_accounts: Vec<BankAccount>,
    pub credit_cards: Vec<CreditCard>,
    pub debit_cards: Vec<DebitCard>,
    pub budgets: Vec<BudgetCategory>,
    pub commitments: Vec<Commitment>,
    pub vault: Vec<VaultEntry>,
    pub investments: Vec<Investment>,
    pub sips: Vec<Sip>,
    pub categories: Vec<Category>,
    pub options: UserOptions,
}

impl FinanceSnapshot {
    pub fn counts(&self) -> SetupCounts {
        SetupCounts {
            bank_accounts: self.bank_accounts.len(),
            credit_cards: self.credit_cards.len(),
            debit_cards: self.debit_cards.len(),
            categories: self.categories.len(),
            transactions: self.transactions.len(),
            investments: self.investments.len(),
            budgets: self.budgets.len(),
        }
    }

    pub fn setup_status(&self) -> SetupStatus {
        SetupStatus::derive(&self.counts())
    }

    pub fn total_bank_balance(&self) -> Money {
        self.bank_accounts.iter().map(|a| a.balance).sum()
    }

    pub fn total_card_debt(&self) -> Money {
        self.credit_cards.iter().map(|c| c.current_balance).sum()
    }

    pub fn total_invested(&self) -> Money {
        self.investments.iter().map(|i| i.invested_amount).sum()
    }

    pub fn portfolio_value(&self) -> Money {
        self.investments.iter().map(|i| i.current_value).sum()
    }

    pub fn total_vault(&self) -> Money {
        self.vault.iter().map(|v| v.amount).sum()
    }

    pub fn monthly_commitments(&self) -> Money {
        self.commitments.iter().map(|c| c.amount).sum()
    }

    /// Assets minus card debt
    pub fn net_worth(&self) -> Money {
        self.total_bank_balance() + self.portfolio_value() + self.total_vault() - self.total_card_debt()
    }
}

type Versions = [u64; 11];

pub struct FinanceContext {
    api: ApiClient,
    cache: Arc<QueryClient>,
    settings: Settings,
    pub transactions: TransactionStore,
    pub bank_accounts: BankAccountStore,
    pub credit_cards: CreditCardStore,
    pub debit_cards: DebitCardStore,
    pub budgets: BudgetStore,
    pub commitments: CommitmentStore,
    pub vault: VaultStore,
    pub investments: InvestmentStore,
    pub sips: SipStore,
    pub categories: CategoryStore,
    pub options: OptionsStore,
    pub automation: AutomationRules,
    notifier: Arc<dyn Notifier>,
    memo: Mutex<Option<(Versions, Arc<FinanceSnapshot>)>>,
}

impl FinanceContext {
    pub fn new(
        api: ApiClient,
        cache: Arc<QueryClient>,
        notifier: Arc<dyn Notifier>,
        settings: Settings,
    ) -> Self {
        let options = QueryOptions::entities(&settings.query);
        let store = || (api.clone(), cache.clone(), notifier.clone(), options);

        macro_rules! entity_store {
            () => {{
                let (api, cache, notifier, options) = store();
                EntityStore::new(api, cache, notifier, options)
            }};
        }

        let (o_api, o_cache, o_notifier, o_options) = store();
        Self {
            transactions: entity_store!(),
            bank_accounts: entity_store!(),
            credit_cards: entity_store!(),
            debit_cards: entity_store!(),
            budgets: entity_store!(),
            commitments: entity_store!(),
            vault: entity_store!(),
            investments: entity_store!(),
            sips: entity_store!(),
            categories: entity_store!(),
            options: OptionsStore::new(o_api, o_cache, o_notifier, o_options),
            automation: AutomationRules::new(),
            memo: Mutex::new(None),
            api,
            cache,
            notifier,
            settings,
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn cache(&self) -> &Arc<QueryClient> {
        &self.cache
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.notifier.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn currency(&self) -> &str {
        &self.settings.currency_symbol
    }

    pub fn is_authenticated(&self) -> bool {
        self.api.is_authenticated()
    }

    fn versions(&self) -> Versions {
        [
            self.transactions.version(),
            self.bank_accounts.version(),
            self.credit_cards.version(),
            self.debit_cards.version(),
            self.budgets.version(),
            self.commitments.version(),
            self.vault.version(),
            self.investments.version(),
            self.sips.version(),
            self.categories.version(),
            self.options.version(),
        ]
    }

    /// Aggregate of the cached collections; the same `Arc` while nothing changed
    pub fn snapshot(&self) -> Arc<FinanceSnapshot> {
        let versions = self.versions();
        let Ok(mut memo) = self.memo.lock() else {
            return Arc::new(self.build_snapshot());
        };
        if let Some((seen, snapshot)) = memo.as_ref() {
            if *seen == versions {
                return snapshot.clone();
            }
        }

        debug!("rebuilding finance snapshot");
        let snapshot = Arc::new(self.build_snapshot());
        *memo = Some((versions, snapshot.clone()));
        snapshot
    }

    fn build_snapshot(&self) -> FinanceSnapshot {
        let options = if self.options.version() == 0 {
            UserOptions::default()
        } else {
            self.cache
                .get_query_data::<UserOptions>(&OptionsStore::key())
                .unwrap_or_default()
        };

        FinanceSnapshot {
            transactions: self.transactions.cached(),
            bank_accounts: self.bank_accounts.cached(),
            credit_cards: self.credit_cards.cached(),
            debit_cards: self.debit_cards.cached(),
            budgets: self.budgets.cached(),
            commitments: self.commitments.cached(),
            vault: self.vault.cached(),
            investments: self.investments.cached(),
            sips: self.sips.cached(),
            categories: self.categories.cached(),
            options,
        }
    }

    /// Load every collection concurrently, then snapshot
    pub async fn refresh(&self) -> Arc<FinanceSnapshot> {
        tokio::join!(
            self.transactions.entities(),
            self.bank_accounts.entities(),
            self.credit_cards.entities(),
            self.debit_cards.entities(),
            self.budgets.entities(),
            self.commitments.entities(),
            self.vault.entities(),
            self.investments.entities(),
            self.sips.entities(),
            self.categories.entities(),
            self.options.options(),
        );
        self.snapshot()
    }

    pub async fn setup_status(&self) -> SetupStatus {
        self.refresh().await.setup_status()
    }

    /// Forget everything cached (after account deletion or a wipe)
    pub fn reset(&self) {
        self.cache.clear();
    }
}
