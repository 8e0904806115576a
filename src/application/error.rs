use thiserror::Error;

use crate::domain::{ParseAmountError, ParseEntryIdError};
use crate::storage::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Description cannot be empty")]
    EmptyDescription,

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseAmountError),

    #[error("{0}")]
    InvalidEntryId(#[from] ParseEntryIdError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
