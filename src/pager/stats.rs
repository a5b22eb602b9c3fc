//! Decision engine statistics tracking.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters maintained by a paging policy.
///
/// All fields are atomic so a snapshot can be taken through a shared
/// reference while the owning engine sits behind a lock.
///
/// # Memory Ordering
/// Every operation uses `Ordering::Relaxed`: counters are independent and
/// only need to be atomic, not ordered with respect to each other.
///
/// # Example
/// ```
/// use pagewise::PagerStats;
/// use std::sync::atomic::Ordering;
///
/// let stats = PagerStats::new();
/// stats.faults.fetch_add(1, Ordering::Relaxed);
/// assert_eq!(stats.faults.load(Ordering::Relaxed), 1);
/// ```
#[derive(Debug)]
pub struct PagerStats {
    /// Completed decision passes.
    pub passes: AtomicU64,

    /// Page references examined (one per active process per pass).
    pub references: AtomicU64,

    /// References whose page was not resident.
    pub faults: AtomicU64,

    /// Successful `page_in` calls, demand and prefetch.
    pub page_ins: AtomicU64,

    /// Refused `page_in` calls.
    pub fetch_failures: AtomicU64,

    /// Successful `page_out` calls.
    pub evictions: AtomicU64,

    /// Times the predictor produced a page.
    pub predictions: AtomicU64,

    /// Predicted pages that were not resident and had to be fetched.
    pub prefetches: AtomicU64,
}

impl PagerStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self {
            passes: AtomicU64::new(0),
            references: AtomicU64::new(0),
            faults: AtomicU64::new(0),
            page_ins: AtomicU64::new(0),
            fetch_failures: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
            predictions: AtomicU64::new(0),
            prefetches: AtomicU64::new(0),
        }
    }

    #[inline]
    pub(crate) fn bump(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        self.snapshot().fault_rate()
    }

    /// Get a non-atomic copy for display/logging.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            passes: self.passes.load(Ordering::Relaxed),
            references: self.references.load(Ordering::Relaxed),
            faults: self.faults.load(Ordering::Relaxed),
            page_ins: self.page_ins.load(Ordering::Relaxed),
            fetch_failures: self.fetch_failures.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            predictions: self.predictions.load(Ordering::Relaxed),
            prefetches: self.prefetches.load(Ordering::Relaxed),
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.passes.store(0, Ordering::Relaxed);
        self.references.store(0, Ordering::Relaxed);
        self.faults.store(0, Ordering::Relaxed);
        self.page_ins.store(0, Ordering::Relaxed);
        self.fetch_failures.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        self.predictions.store(0, Ordering::Relaxed);
        self.prefetches.store(0, Ordering::Relaxed);
    }
}

impl Default for PagerStats {
    fn default() -> Self {
        Self::new()
    }
}

/// A point-in-time copy of [`PagerStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub passes: u64,
    pub references: u64,
    pub faults: u64,
    pub page_ins: u64,
    pub fetch_failures: u64,
    pub evictions: u64,
    pub predictions: u64,
    pub prefetches: u64,
}

impl StatsSnapshot {
    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ passes: {}, refs: {}, faults: {}, evictions: {}, prefetches: {}, fault_rate: {:.2}% }}",
            self.passes,
            self.references,
            self.faults,
            self.evictions,
            self.prefetches,
            self.fault_rate() * 100.0
        )
    }
}
