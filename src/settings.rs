//! Settings for the budget tracker.
//!
//! Read from an optional `budgie.toml` in the working directory, then from
//! environment variables prefixed `BUDGIE__`, with `__` between key parts
//! (`BUDGIE__DATABASE__PATH` sets `database.path`).
use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub const DEFAULT_DATABASE_PATH: &str = "budgie.db";

#[derive(Debug, Clone, Deserialize)]
pub struct Database {
    pub path: String,
}

impl Database {
    /// SQLite URL that creates the file when missing.
    pub fn url(&self) -> String {
        format!("sqlite:{}?mode=rwc", self.path)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub database: Database,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(Self::environment())
    }

    fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("budgie").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize()
    }

    fn environment() -> Environment {
        Environment::with_prefix("BUDGIE").separator("__")
    }

    /// Load settings from an explicit file, ignoring the environment.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::from(path.as_ref()))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder().set_default("database.path", DEFAULT_DATABASE_PATH)
    }
}
