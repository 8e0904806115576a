// Application layer: the caller-side session that keeps the in-memory
// ledger and the entry store in step, plus validation and display summaries.

pub mod counters;
pub mod draft;
pub mod error;
pub mod reporting;
pub mod service;

pub use counters::*;
pub use draft::*;
pub use error::*;
pub use reporting::*;
pub use service::*;
