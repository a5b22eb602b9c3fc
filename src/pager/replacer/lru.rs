//! LRU (Least Recently Used) victim selection.
//!
//! Scans a process's pages in ascending order and picks the resident page
//! with the smallest last-access tick. The comparison is strict, so on a tie
//! the lowest page index wins.

use crate::common::{PageId, ProcessId};
use crate::host::ProcessSlot;
use crate::pager::clock::{Tick, TimestampTable};

/// Pick the page to evict from `proc`.
///
/// `protected` is never returned, even when it has the oldest timestamp: it
/// is the page being faulted in. Returns `None` when the process has no
/// other resident page.
pub fn select_victim(
    slot: &ProcessSlot,
    timestamps: &TimestampTable,
    proc: ProcessId,
    protected: PageId,
) -> Option<PageId> {
    let mut victim: Option<(PageId, Tick)> = None;

    for page in slot.resident_pages() {
        if page == protected {
            continue;
        }
        let stamp = timestamps.get(proc, page);
        let older = match victim {
            Some((_, oldest)) => stamp < oldest,
            None => true,
        };
        if older {
            victim = Some((page, stamp));
        }
    }

    victim.map(|(page, _)| page)
}
