//! Shared fault path: fetch, and on refusal evict an LRU victim.

use log::{debug, error};

use crate::common::{Error, PageId, PagerConfig, ProcessId, Result};
use crate::host::{MemoryHost, ProcessSlot};
use crate::pager::clock::TimestampTable;
use crate::pager::replacer::select_victim;
use crate::pager::stats::PagerStats;

/// Ask the host for `wanted`; if it refuses, free the least recently used
/// resident page other than `protected`.
///
/// The freed slot is used on a later pass; no second `page_in` is issued
/// here. Having no victim is not an error.
///
/// # Errors
/// `Error::EvictionFailed` if the host refuses to evict the chosen victim.
pub(crate) fn fetch_or_evict(
    host: &mut dyn MemoryHost,
    timestamps: &TimestampTable,
    stats: &PagerStats,
    proc: ProcessId,
    wanted: PageId,
    protected: PageId,
) -> Result<()> {
    if host.page_in(proc, wanted) {
        PagerStats::bump(&stats.page_ins);
        return Ok(());
    }
    PagerStats::bump(&stats.fetch_failures);

    let victim = select_victim(&host.processes()[proc.index()], timestamps, proc, protected);
    let Some(victim) = victim else {
        debug!("{}: no victim for {}, retrying next pass", proc, wanted);
        return Ok(());
    };

    if !host.page_out(proc, victim) {
        error!("{}: host refused to evict {}", proc, victim);
        return Err(Error::EvictionFailed { proc, page: victim });
    }
    PagerStats::bump(&stats.evictions);
    debug!("{}: evicted {} to make room for {}", proc, victim, wanted);

    Ok(())
}

/// Page referenced by `slot`'s program counter, checked against capacity.
///
/// # Errors
/// - `Error::TooManyPages` if the slot declares more pages than configured
/// - `Error::PageOutOfRange` if the counter maps past the page count
pub(crate) fn needed_page(
    config: &PagerConfig,
    proc: ProcessId,
    slot: &ProcessSlot,
) -> Result<PageId> {
    if slot.page_count() > config.max_pages_per_process {
        return Err(Error::TooManyPages {
            proc,
            count: slot.page_count(),
            max: config.max_pages_per_process,
        });
    }

    let page = PageId::from_pc(slot.pc, config.page_size);
    if page.index() >= slot.page_count() {
        return Err(Error::PageOutOfRange {
            proc,
            page,
            page_count: slot.page_count(),
        });
    }

    Ok(page)
}

/// Reject a process table the engine cannot serve.
///
/// Runs before a pass touches any state, so a rejected pass leaves the
/// clock, tables, stats and host untouched.
///
/// # Errors
/// - `Error::TooManyProcesses` if the table is larger than configured
/// - whatever [`needed_page`] reports for the first bad active slot
pub(crate) fn check_table(config: &PagerConfig, host: &dyn MemoryHost) -> Result<()> {
    let table = host.processes();
    if table.len() > config.max_processes {
        return Err(Error::TooManyProcesses {
            count: table.len(),
            max: config.max_processes,
        });
    }

    for (index, slot) in table.iter().enumerate() {
        if slot.active {
            needed_page(config, ProcessId::new(index), slot)?;
        }
    }
    Ok(())
}
