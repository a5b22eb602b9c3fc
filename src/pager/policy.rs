//! Runtime-selectable paging policies.

use std::fmt;

use crate::common::{PageId, PagerConfig, ProcessId, Result};
use crate::host::MemoryHost;
use crate::pager::clock::Tick;
use crate::pager::{LruPager, PagerStats, PredictivePager};

/// Which decision engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Reactive LRU: fetch on fault, evict the least recently used page.
    Lru,
    /// Markov prediction with prefetch, LRU on every fault.
    Predictive,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolicyKind::Lru => write!(f, "lru"),
            PolicyKind::Predictive => write!(f, "predictive"),
        }
    }
}

/// A page-replacement decision engine.
///
/// The host calls [`decide_for_all_processes`](Self::decide_for_all_processes)
/// once per logical tick. Calls must not overlap; wrap the engine in a
/// [`SharedPager`](crate::pager::SharedPager) when several threads drive it.
pub trait PagingPolicy: Send {
    fn kind(&self) -> PolicyKind;

    /// Run one decision pass over the host's whole process table.
    ///
    /// # Errors
    /// `Error::EvictionFailed` is fatal; the capacity errors mean the host
    /// table does not fit the engine's configuration.
    fn decide_for_all_processes(&mut self, host: &mut dyn MemoryHost) -> Result<()>;

    /// Current logical tick.
    fn now(&self) -> Tick;

    /// Last access tick recorded for `page` of `proc` (0 if never).
    fn last_access(&self, proc: ProcessId, page: PageId) -> Tick;

    fn stats(&self) -> &PagerStats;
}

/// Build a freshly initialized engine of the given kind.
///
/// # Errors
/// `Error::InvalidConfig` if `config` does not validate.
pub fn new_policy(kind: PolicyKind, config: PagerConfig) -> Result<Box<dyn PagingPolicy>> {
    Ok(match kind {
        PolicyKind::Lru => Box::new(LruPager::new(config)?),
        PolicyKind::Predictive => Box::new(PredictivePager::new(config)?),
    })
}
