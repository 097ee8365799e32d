/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - The in-memory product list and its two mutations (store.rs)

pub mod data;
pub mod store;

pub use data::{Field, Record, RecordForm};
pub use store::{RecordStore, StoreError};
