//! Predictive paging on top of LRU.
//!
//! For every active process, the pass records the observed page transition,
//! asks the Markov predictor for the most likely next page and prefetches
//! it, then makes sure the page needed right now is resident. Both fetches
//! fall back to LRU eviction, and both protect the page needed now.
//!
//! The clock advances once per pass, after every process has been handled.

use log::{debug, trace};

use crate::common::{PageId, PagerConfig, ProcessId, Result};
use crate::host::MemoryHost;
use crate::pager::clock::{LogicalClock, Tick, TimestampTable};
use crate::pager::fault::{check_table, fetch_or_evict, needed_page};
use crate::pager::markov::{best_guess, CurrentPageTracker, Estimator, TransitionTable};
use crate::pager::policy::{PagingPolicy, PolicyKind};
use crate::pager::PagerStats;

/// Markov-predictive decision engine.
#[derive(Debug)]
pub struct PredictivePager {
    config: PagerConfig,
    clock: LogicalClock,
    timestamps: TimestampTable,
    transitions: TransitionTable,
    current: CurrentPageTracker,
    stats: PagerStats,
}

impl PredictivePager {
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
            transitions: TransitionTable::new(config.max_processes, config.max_pages_per_process),
            current: CurrentPageTracker::new(config.max_processes),
            stats: PagerStats::new(),
        })
    }

    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    pub fn timestamps(&self) -> &TimestampTable {
        &self.timestamps
    }

    pub fn transitions(&self) -> &TransitionTable {
        &self.transitions
    }

    /// Last page observed for `proc`, `None` before its first pass.
    pub fn current_page(&self, proc: ProcessId) -> Option<PageId> {
        self.current.get(proc)
    }

    /// The page the predictor would prefetch after `page`.
    ///
    /// `page_count` is capped at the configured pages per process.
    pub fn predict(&self, proc: ProcessId, page: PageId, page_count: usize) -> Option<PageId> {
        let estimator = Estimator::new(
            &self.transitions,
            proc,
            page_count.min(self.config.max_pages_per_process),
            self.config.probability_model,
        );
        best_guess(&estimator, page, self.config.lookahead_steps)
    }

    fn decide_for(&mut self, host: &mut dyn MemoryHost, proc: ProcessId) -> Result<()> {
        let slot = &host.processes()[proc.index()];
        if !slot.active {
            return Ok(());
        }

        let page = needed_page(&self.config, proc, slot)?;
        let page_count = slot.page_count();
        PagerStats::bump(&self.stats.references);

        if let Some(previous) = self.current.replace(proc, page) {
            self.transitions.record(proc, previous, page);
        }

        if let Some(predicted) = self.predict(proc, page, page_count) {
            PagerStats::bump(&self.stats.predictions);
            if !host.processes()[proc.index()].is_resident(predicted) {
                PagerStats::bump(&self.stats.prefetches);
                debug!("{}: prefetching {} after {}", proc, predicted, page);
                fetch_or_evict(host, &self.timestamps, &self.stats, proc, predicted, page)?;
            }
        }

        if !host.processes()[proc.index()].is_resident(page) {
            PagerStats::bump(&self.stats.faults);
            debug!("{}: fault on {} at tick {}", proc, page, self.clock.now());
            fetch_or_evict(host, &self.timestamps, &self.stats, proc, page, page)?;
        }

        self.timestamps.touch(&self.clock, proc, page);
        Ok(())
    }
}

impl PagingPolicy for PredictivePager {
    fn kind(&self) -> PolicyKind {
        PolicyKind::Predictive
    }

    fn decide_for_all_processes(&mut self, host: &mut dyn MemoryHost) -> Result<()> {
        check_table(&self.config, host)?;
        trace!("predictive pass starting at tick {}", self.clock.now());

        for index in 0..host.processes().len() {
            self.decide_for(host, ProcessId::new(index))?;
        }

        self.clock.advance();
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
