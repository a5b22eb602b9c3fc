//! Common types and utilities shared across pagewise.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and [`config::PagerConfig`]
//! - Error types
//! - Identifiers (ProcessId, PageId)

pub mod config;
pub mod error;
mod page_id;
mod process_id;

pub use config::{PagerConfig, ProbabilityModel};
pub use error::{Error, Result};
pub use page_id::PageId;
pub use process_id::ProcessId;
