//! Transition counts and current-page tracking.

use crate::common::{PageId, ProcessId};

/// Per-process `page × page` matrix of consecutive-access counts.
///
/// `count(proc, a, b)` is the number of times `proc` referenced `b` right
/// after `a`. Counts only ever grow.
#[derive(Debug, Clone)]
pub struct TransitionTable {
    counts: Vec<u32>,
    max_pages: usize,
}

impl TransitionTable {
    /// Zeroed table for `max_processes` processes of `max_pages` pages each.
    pub fn new(max_processes: usize, max_pages: usize) -> Self {
        Self {
            counts: vec![0; max_processes * max_pages * max_pages],
            max_pages,
        }
    }

    #[inline]
    fn offset(&self, proc: ProcessId, from: PageId, to: PageId) -> usize {
        assert!(
            from.index() < self.max_pages && to.index() < self.max_pages,
            "transition {} -> {} out of bounds ({} pages)",
            from,
            to,
            self.max_pages
        );
        (proc.index() * self.max_pages + from.index()) * self.max_pages + to.index()
    }

    /// Observed `from -> to` transitions for `proc`.
    #[inline]
    pub fn count(&self, proc: ProcessId, from: PageId, to: PageId) -> u32 {
        self.counts[self.offset(proc, from, to)]
    }

    /// Record one `from -> to` transition.
    #[inline]
    pub fn record(&mut self, proc: ProcessId, from: PageId, to: PageId) {
        let offset = self.offset(proc, from, to);
        self.counts[offset] = self.counts[offset].saturating_add(1);
    }

    /// Total transitions out of `from`, over the first `page_count` pages.
    pub fn outgoing(&self, proc: ProcessId, from: PageId, page_count: usize) -> u64 {
        let start = self.offset(proc, from, PageId::new(0));
        self.counts[start..start + page_count.min(self.max_pages)]
            .iter()
            .map(|&c| u64::from(c))
            .sum()
    }
}

/// Last referenced page per process. `None` until the first observation.
#[derive(Debug, Clone)]
pub struct CurrentPageTracker {
    current: Vec<Option<PageId>>,
}

impl CurrentPageTracker {
    pub fn new(max_processes: usize) -> Self {
        Self {
            current: vec![None; max_processes],
        }
    }

    #[inline]
    pub fn get(&self, proc: ProcessId) -> Option<PageId> {
        self.current[proc.index()]
    }

    /// Store `page` as current, returning the previous page if any.
    #[inline]
    pub fn replace(&mut self, proc: ProcessId, page: PageId) -> Option<PageId> {
        self.current[proc.index()].replace(page)
    }
}
