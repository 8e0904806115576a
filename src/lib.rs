pub mod application;
pub mod domain;
pub mod settings;
pub mod storage;

pub use domain::*;
pub use storage::EntryStore;
