use tracing::{info, warn};

use crate::domain::{Entry, EntryId, Ledger};
use crate::settings::Settings;
use crate::storage::{EntryStore, StoreError};

use super::{AppError, BudgetSummary, EntryDraft, ExpenseRow, IdCounters};

/// Budget session: the in-memory ledger, its durable mirror and the id counters.
///
/// Every mutation goes to the store first and reaches the ledger only once the
/// store write succeeded, so a failed call leaves both unchanged. If the two
/// ever diverge (e.g. the process dies between the calls), `reload` rebuilds
/// the ledger from the store.
pub struct BudgetService {
    store: EntryStore,
    ledger: Ledger,
    counters: IdCounters,
}

impl BudgetService {
    /// Open (or create) the database at the given path and load it.
    pub async fn init(database_path: &str) -> Result<Self, AppError> {
        let db_url = format!("sqlite:{}?mode=rwc", database_path);
        let store = EntryStore::init(&db_url).await?;
        Self::load(store).await
    }

    /// Open the database configured by `budgie.toml` / `BUDGIE__*` variables.
    pub async fn open_default() -> Result<Self, AppError> {
        let settings = Settings::new()?;
        Self::from_settings(&settings).await
    }

    /// Open the database named in the settings and load it.
    pub async fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        let store = EntryStore::init(&settings.database.url()).await?;
        Self::load(store).await
    }

    /// Build a session from whatever the store holds.
    /// Kinds that were never stored start empty.
    pub async fn load(store: EntryStore) -> Result<Self, AppError> {
        let (ledger, counters) = Self::read_state(&store).await?;
        info!(
            income = ledger.income_list().len(),
            expenses = ledger.expense_list().len(),
            "loaded budget"
        );
        Ok(Self {
            store,
            ledger,
            counters,
        })
    }

    /// Rebuild the ledger and counters from the store.
    pub async fn reload(&mut self) -> Result<(), AppError> {
        let (ledger, counters) = Self::read_state(&self.store).await?;
        self.ledger = ledger;
        self.counters = counters;
        Ok(())
    }

    async fn read_state(store: &EntryStore) -> Result<(Ledger, IdCounters), AppError> {
        let income = store.get_incomes().await?.unwrap_or_default();
        let expenses = store.get_expenses().await?.unwrap_or_default();

        let counters = IdCounters::from_entries(income.iter().chain(expenses.iter()));
        Ok((Ledger::from_entries(income, expenses), counters))
    }

    /// Validate a draft, assign it the next id of its kind and record it.
    pub async fn add_entry(&mut self, draft: EntryDraft) -> Result<Entry, AppError> {
        draft.validate()?;

        let id = self.counters.peek(draft.kind);
        let entry = draft.into_entry(id.seq());

        self.store.add_entry(&entry).await?;
        self.counters.observe(&id);
        self.ledger.add_entry(entry.clone());

        info!(id = %entry.id(), amount = entry.amount(), "added entry");
        Ok(entry)
    }

    /// Remove an entry from the store and the ledger.
    ///
    /// Unknown ids, including ids of a kind that was never stored, are a
    /// no-op returning `None`.
    pub async fn remove_entry(&mut self, id: &EntryId) -> Result<Option<Entry>, AppError> {
        match self.store.remove_entry(id).await {
            Ok(_) => {}
            Err(StoreError::NotInitialized(kind)) => {
                warn!(%id, %kind, "nothing stored for this kind; ignoring removal");
                return Ok(None);
            }
            Err(err) => return Err(err.into()),
        }

        let removed = self.ledger.remove_entry(id);
        match &removed {
            Some(entry) => info!(id = %entry.id(), "removed entry"),
            None => warn!(%id, "entry not found; ignoring removal"),
        }
        Ok(removed)
    }

    /// Remove an entry given its textual id ("expense-3").
    pub async fn remove_entry_str(&mut self, id: &str) -> Result<Option<Entry>, AppError> {
        let id: EntryId = id.parse()?;
        self.remove_entry(&id).await
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::from_ledger(&self.ledger)
    }

    pub fn expense_rows(&self) -> Vec<ExpenseRow> {
        ExpenseRow::rows(&self.ledger)
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn store(&self) -> &EntryStore {
        &self.store
    }
}
