//! Logical time and last-access bookkeeping.
//!
//! [`LogicalClock`] orders accesses; [`TimestampTable`] remembers, for every
//! (process, page), the tick of its last access. A timestamp of 0 means the
//! page has not been touched since the engine was built.

use crate::common::{PageId, ProcessId};

/// Logical tick type.
pub type Tick = u64;

/// Monotonic step counter. Starts at 1 and is never reset.
#[derive(Debug, Clone)]
pub struct LogicalClock {
    now: Tick,
}

impl LogicalClock {
    pub fn new() -> Self {
        Self { now: 1 }
    }

    /// Current tick.
    #[inline]
    pub fn now(&self) -> Tick {
        self.now
    }

    /// Move to the next tick.
    #[inline]
    pub fn advance(&mut self) {
        self.now += 1;
    }
}

impl Default for LogicalClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Last-access tick per (process, page).
///
/// Stored as one flat, fixed-size buffer. Access outside the configured
/// bounds panics.
#[derive(Debug, Clone)]
pub struct TimestampTable {
    stamps: Vec<Tick>,
    max_pages: usize,
}

impl TimestampTable {
    /// Zeroed table for `max_processes × max_pages` slots.
    pub fn new(max_processes: usize, max_pages: usize) -> Self {
        Self {
            stamps: vec![0; max_processes * max_pages],
            max_pages,
        }
    }

    #[inline]
    fn offset(&self, proc: ProcessId, page: PageId) -> usize {
        assert!(
            page.index() < self.max_pages,
            "{} out of bounds ({} pages)",
            page,
            self.max_pages
        );
        proc.index() * self.max_pages + page.index()
    }

    /// Last access tick of `page`, 0 if never touched.
    #[inline]
    pub fn get(&self, proc: ProcessId, page: PageId) -> Tick {
        self.stamps[self.offset(proc, page)]
    }

    /// Record an access to `page` at the clock's current tick.
    #[inline]
    pub fn touch(&mut self, clock: &LogicalClock, proc: ProcessId, page: PageId) {
        let offset = self.offset(proc, page);
        debug_assert!(self.stamps[offset] <= clock.now(), "timestamp went backwards");
        self.stamps[offset] = clock.now();
    }
}
