//! Victim selection (replacers).
//!
//! Currently implements:
//! - [`select_victim`] - least recently used page among a process's residents

mod lru;

pub use lru::select_victim;
