use anyhow::Context;
use sqlx::{Row, SqliteConnection, SqlitePool};
use tracing::debug;

use crate::domain::{Entry, EntryId, EntryKind};

use super::{StoreError, MIGRATION_001_INITIAL};

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable mirror of the ledger's entry lists.
///
/// Each kind lives under its own key ("income", "expenses") as a JSON array.
/// A key that was never written is reported as `None`, which is not the same
/// as an empty list.
pub struct EntryStore {
    pool: SqlitePool,
}

impl EntryStore {
    /// Create a new store with the given SQLite connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to a SQLite database at the given URL.
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let pool = SqlitePool::connect(database_url)
            .await
            .context("Failed to connect to database")?;
        Ok(Self::new(pool))
    }

    /// Run database migrations.
    pub async fn migrate(&self) -> StoreResult<()> {
        sqlx::query(MIGRATION_001_INITIAL)
            .execute(&self.pool)
            .await
            .context("Failed to run migration 001")?;
        Ok(())
    }

    /// Initialize a store (connect + migrate).
    pub async fn init(database_url: &str) -> StoreResult<Self> {
        let store = Self::connect(database_url).await?;
        store.migrate().await?;
        Ok(store)
    }

    /// Stored income entries, or `None` if none were ever added.
    pub async fn get_incomes(&self) -> StoreResult<Option<Vec<Entry>>> {
        self.get_entries(EntryKind::Income).await
    }

    /// Stored expense entries, or `None` if none were ever added.
    pub async fn get_expenses(&self) -> StoreResult<Option<Vec<Entry>>> {
        self.get_entries(EntryKind::Expense).await
    }

    pub async fn get_entries(&self, kind: EntryKind) -> StoreResult<Option<Vec<Entry>>> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .context("Failed to acquire connection")?;

        read_list(&mut conn, kind).await
    }

    /// Append an entry to the list of its kind.
    ///
    /// The first add for a kind seeds that kind's key with an empty list
    /// before appending.
    pub async fn add_entry(&self, entry: &Entry) -> StoreResult<()> {
        let kind = entry.kind();
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let mut entries = match read_list(&mut tx, kind).await? {
            Some(entries) => entries,
            None => {
                debug!(key = kind.storage_key(), "seeding empty entry list");
                write_list(&mut tx, kind, &[]).await?;
                Vec::new()
            }
        };

        entries.push(entry.clone());
        write_list(&mut tx, kind, &entries).await?;

        tx.commit().await.context("Failed to commit entry")?;
        Ok(())
    }

    /// Remove the first entry with the given id and write the list back.
    ///
    /// Fails with `NotInitialized` when nothing of that kind was ever added.
    /// An id missing from an initialized list returns `Ok(None)`.
    pub async fn remove_entry(&self, id: &EntryId) -> StoreResult<Option<Entry>> {
        let kind = id.kind();
        let mut tx = self
            .pool
            .begin()
            .await
            .context("Failed to begin transaction")?;

        let mut entries = read_list(&mut tx, kind)
            .await?
            .ok_or(StoreError::NotInitialized(kind))?;

        let removed = entries
            .iter()
            .position(|entry| entry.id() == *id)
            .map(|position| entries.remove(position));

        write_list(&mut tx, kind, &entries).await?;

        tx.commit().await.context("Failed to commit removal")?;
        Ok(removed)
    }

    #[cfg(test)]
    async fn put_raw(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let mut conn = self.pool.acquire().await?;
        write_raw(&mut conn, key, value).await
    }
}

async fn read_list(
    conn: &mut SqliteConnection,
    kind: EntryKind,
) -> StoreResult<Option<Vec<Entry>>> {
    let key = kind.storage_key();
    let row = sqlx::query("SELECT value FROM entry_lists WHERE key = ?")
        .bind(key)
        .fetch_optional(&mut *conn)
        .await
        .context("Failed to read entry list")?;

    let Some(row) = row else {
        return Ok(None);
    };

    let raw: String = row.get("value");
    let entries: Vec<Entry> = serde_json::from_str(&raw)
        .map_err(|source| StoreError::Deserialization { kind, source })?;

    if let Some(misfiled) = entries.iter().find(|entry| entry.kind() != kind) {
        return Err(StoreError::MisfiledEntry {
            id: misfiled.id(),
            key,
        });
    }

    debug!(key, count = entries.len(), "read entry list");
    Ok(Some(entries))
}

async fn write_list(
    conn: &mut SqliteConnection,
    kind: EntryKind,
    entries: &[Entry],
) -> StoreResult<()> {
    // JSON has no NaN or infinity; such amounts would be written as null.
    if let Some(entry) = entries.iter().find(|entry| !entry.amount().is_finite()) {
        return Err(StoreError::NonFiniteAmount {
            id: entry.id(),
            amount: entry.amount(),
        });
    }

    let raw = serde_json::to_string(entries).context("Failed to encode entry list")?;
    write_raw(conn, kind.storage_key(), &raw).await?;
    debug!(key = kind.storage_key(), count = entries.len(), "wrote entry list");
    Ok(())
}

async fn write_raw(conn: &mut SqliteConnection, key: &str, value: &str) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        INSERT INTO entry_lists (key, value, updated_at)
        VALUES (?, ?, datetime('now'))
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = excluded.updated_at
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(&mut *conn)
    .await
    .context("Failed to write entry list")?;
    Ok(())
}
