//! # Daybook Core
//!
//! Core library for Daybook - a single-user daily journal with one freeform
//! entry per calendar day.
//!
//! This crate provides the data model, storage abstractions, and the entry
//! store independent of any presentation surface.
//!
//! ## Architecture
//!
//! - **storage**: Storage engine trait and the SQLite backend
//! - **store**: The entry store (draft lifecycle, upsert-by-day, aggregation)
//! - **stats**: Derived writing-activity statistics
//! - **clock**: Injectable time source for day-boundary logic
//! - **words**: Word counting

pub mod clock;
pub mod error;
pub mod fs;
pub mod stats;
pub mod storage;
pub mod store;
pub mod words;

pub use clock::{Clock, SystemClock};
pub use error::{Result, StoreError};
pub use storage::{JournalStorage, SqliteStorage};
pub use store::{EntryStore, StoreChange};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
