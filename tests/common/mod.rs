// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use anyhow::Result;
use budgie::application::{BudgetService, EntryDraft};
use budgie::domain::EntryKind;
use budgie::EntryStore;
use tempfile::TempDir;

/// Path of the database file inside a test directory
pub fn db_path(temp_dir: &TempDir) -> PathBuf {
    temp_dir.path().join("test.db")
}

pub fn db_url(path: &Path) -> String {
    format!("sqlite:{}?mode=rwc", path.display())
}

/// Helper to create a test service with a temporary database
pub async fn test_service() -> Result<(BudgetService, TempDir)> {
    let temp_dir = TempDir::new()?;
    let service = open_service(&temp_dir).await?;
    Ok((service, temp_dir))
}

/// Open a fresh session on the database of an existing test directory
pub async fn open_service(temp_dir: &TempDir) -> Result<BudgetService> {
    let path = db_path(temp_dir);
    Ok(BudgetService::init(path.to_str().unwrap()).await?)
}

/// Helper to create a bare entry store with a temporary database
pub async fn test_store() -> Result<(EntryStore, TempDir)> {
    let temp_dir = TempDir::new()?;
    let store = EntryStore::init(&db_url(&db_path(&temp_dir))).await?;
    Ok((store, temp_dir))
}

pub fn income(description: &str, amount: f64) -> EntryDraft {
    EntryDraft::new(EntryKind::Income, description, amount)
}

pub fn expense(description: &str, amount: f64) -> EntryDraft {
    EntryDraft::new(EntryKind::Expense, description, amount)
}
