use thiserror::Error;

use crate::domain::{EntryId, EntryKind};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No {0} entries have been stored yet")]
    NotInitialized(EntryKind),

    #[error("Stored {kind} entries are malformed: {source}")]
    Deserialization {
        kind: EntryKind,
        #[source]
        source: serde_json::Error,
    },

    #[error("Entry {id} is stored under the '{key}' key")]
    MisfiledEntry { id: EntryId, key: &'static str },

    #[error("Entry {id} has a non-finite amount ({amount})")]
    NonFiniteAmount { id: EntryId, amount: f64 },

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
