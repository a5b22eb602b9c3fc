//! Reactive LRU paging.
//!
//! Each pass walks the process table in index order. An active process
//! whose current page is missing gets a `page_in`; if the host refuses, the
//! least recently used resident page of that process is evicted and the
//! fetch is retried on a later pass.
//!
//! The clock advances once per table slot, inactive slots included.

use log::{debug, trace};

use crate::common::{PageId, PagerConfig, ProcessId, Result};
use crate::host::MemoryHost;
use crate::pager::clock::{LogicalClock, Tick, TimestampTable};
use crate::pager::fault::{check_table, fetch_or_evict, needed_page};
use crate::pager::policy::{PagingPolicy, PolicyKind};
use crate::pager::PagerStats;

/// LRU decision engine.
///
/// # Example
/// ```
/// use pagewise::{LruPager, PagerConfig, PagingPolicy};
///
/// let pager = LruPager::new(PagerConfig::default()).unwrap();
/// assert_eq!(pager.now(), 1);
/// ```
#[derive(Debug)]
pub struct LruPager {
    config: PagerConfig,
    clock: LogicalClock,
    timestamps: TimestampTable,
    stats: PagerStats,
}

impl LruPager {
    /// Create an engine with zeroed tables sized by `config`.
    ///
    /// # Errors
    /// `Error::InvalidConfig` if `config` does not validate.
    pub fn new(config: PagerConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            config,
            clock: LogicalClock::new(),
            timestamps: TimestampTable::new(config.max_processes, config.max_pages_per_process),
            stats: PagerStats::new(),
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn timestamps(&self) -> &TimestampTable {
        &self.timestamps
    }

    fn decide_for(&mut self, host: &mut dyn MemoryHost, proc: ProcessId) -> Result<()> {
        let slot = &host.processes()[proc.index()];
        if !slot.active {
            return Ok(());
        }

        let page = needed_page(&self.config, proc, slot)?;
        let resident = slot.is_resident(page);
        PagerStats::bump(&self.stats.references);

        if !resident {
            PagerStats::bump(&self.stats.faults);
            debug!("{}: fault on {} at tick {}", proc, page, self.clock.now());
            fetch_or_evict(host, &self.timestamps, &self.stats, proc, page, page)?;
        }

        self.timestamps.touch(&self.clock, proc, page);
        Ok(())
    }
}

impl PagingPolicy for LruPager {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Lru
    }

    fn decide_for_all_processes(&mut self, host: &mut dyn MemoryHost) -> Result<()> {
        check_table(&self.config, host)?;
        trace!("lru pass starting at tick {}", self.clock.now());

        for index in 0..host.processes().len() {
            self.decide_for(host, ProcessId::new(index))?;
            self.clock.advance();
        }

        PagerStats::bump(&self.stats.passes);
        Ok(())
    }

    fn now(&self) -> Tick {
        self.clock.now()
    }

    fn last_access(&self, proc: ProcessId, page: PageId) -> Tick {
        self.timestamps.get(proc, page)
    }

    fn stats(&self) -> &PagerStats {
        &self.stats
    }
}
