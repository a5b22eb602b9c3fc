//! Error types for pagewise.

use thiserror::Error;

use crate::common::{PageId, ProcessId};

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors raised by the decision engine.
///
/// Fetch failures, missing victims and missing predictions are part of
/// normal operation and never show up here. Everything in this enum means
/// the host broke one of its invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The host refused to evict a page the engine selected.
    ///
    /// A resident page can always be freed under a correct host, so there
    /// is no retry path. Callers should treat this as fatal.
    #[error("failed to evict {page} of {proc}")]
    EvictionFailed { proc: ProcessId, page: PageId },

    /// The host's process table is larger than the configured capacity.
    #[error("process table has {count} slots, capacity is {max}")]
    TooManyProcesses { count: usize, max: usize },

    /// A process declares more pages than the configured capacity.
    #[error("{proc} declares {count} pages, capacity is {max}")]
    TooManyPages {
        proc: ProcessId,
        count: usize,
        max: usize,
    },

    /// A program counter maps to a page past the process's page count.
    #[error("{proc} references {page} but only has {page_count} pages")]
    PageOutOfRange {
        proc: ProcessId,
        page: PageId,
        page_count: usize,
    },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
