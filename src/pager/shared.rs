//! Thread-safe engine handle with runtime policy swapping.

use log::info;
use parking_lot::Mutex;

use crate::common::{PagerConfig, Result};
use crate::host::MemoryHost;
use crate::pager::clock::Tick;
use crate::pager::policy::{new_policy, PagingPolicy, PolicyKind};
use crate::pager::StatsSnapshot;

/// A paging policy behind a lock.
///
/// Decision passes are serialized by the mutex, so hosts that drive ticks
/// from several threads can never overlap two passes. The policy can be
/// replaced at runtime; the replacement starts from empty tables.
///
/// # Thread Safety
/// - `policy`: `Mutex`, held for the duration of a pass or a swap
/// - `config`: immutable after construction
pub struct SharedPager {
    policy: Mutex<Box<dyn PagingPolicy>>,
    config: PagerConfig,
}

impl SharedPager {
    /// # Errors
    /// `Error::InvalidConfig` if `config` does not validate.
    pub fn new(kind: PolicyKind, config: PagerConfig) -> Result<Self> {
        Ok(Self {
            policy: Mutex::new(new_policy(kind, config)?),
            config,
        })
    }

    /// Run one decision pass under the lock.
    ///
    /// # Errors
    /// Whatever the active policy returns; `Error::EvictionFailed` is fatal.
    pub fn decide_for_all_processes(&self, host: &mut dyn MemoryHost) -> Result<()> {
        self.policy.lock().decide_for_all_processes(host)
    }

    /// Replace the active policy with a fresh engine of `kind`.
    ///
    /// Returns the kind that was replaced.
    pub fn swap_policy(&self, kind: PolicyKind) -> Result<PolicyKind> {
        let fresh = new_policy(kind, self.config)?;
        let mut policy = self.policy.lock();
        let previous = policy.kind();
        *policy = fresh;
        info!("paging policy swapped: {} -> {}", previous, kind);
        Ok(previous)
    }

    pub fn kind(&self) -> PolicyKind {
        self.policy.lock().kind()
    }

    pub fn now(&self) -> Tick {
        self.policy.lock().now()
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.policy.lock().stats().snapshot()
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }
}
