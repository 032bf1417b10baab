/// State management module
///
/// This module handles all application state, including:
/// - The car collection and its persistence (store.rs)
/// - Key-value storage backing (prefs.rs)
/// - Shared data structures (data.rs)
/// - Search filtering (filter.rs)

pub mod data;
pub mod filter;
pub mod prefs;
pub mod store;
