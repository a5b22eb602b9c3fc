//! Configuration constants for pagewise.
//!
//! The constants match the classic simulator bounds. [`PagerConfig`] carries
//! them at runtime so hosts with different table sizes can share the engine.

use crate::common::{Error, Result};

/// Default number of slots in the host's process table.
pub const MAX_PROCESSES: usize = 20;

/// Default number of pages a single process may declare.
pub const MAX_PAGES_PER_PROCESS: usize = 20;

/// Default page size, in program-counter units.
///
/// A program counter `pc` lives on page `pc / PAGE_SIZE`.
pub const PAGE_SIZE: usize = 128;

/// Default prediction horizon for the predictive policy.
///
/// Longer horizons cost `O(pages^steps)` per candidate and have not shown
/// better fault rates than a single step.
pub const DEFAULT_LOOKAHEAD_STEPS: usize = 1;

/// Largest accepted prediction horizon.
///
/// Each extra step multiplies the per-candidate cost by the page count, so
/// with 20 pages a horizon of 4 already costs 160,000 estimates per
/// candidate.
pub const MAX_LOOKAHEAD_STEPS: usize = 4;

/// Single-step estimator used inside the lookahead recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbabilityModel {
    /// `count[from][to] / (1 + Σ_j count[from][j])`.
    #[default]
    Full,
    /// `count[from][to] / (1 + count[from][from])`, skips the row scan.
    Approximate,
}

/// Capacity and tuning knobs for a decision engine.
///
/// # Example
/// ```
/// use pagewise::PagerConfig;
///
/// let config = PagerConfig::default().with_page_size(4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagerConfig {
    /// Slots in the process table.
    pub max_processes: usize,
    /// Pages per process.
    pub max_pages_per_process: usize,
    /// Divisor mapping a program counter to a page.
    pub page_size: usize,
    /// Horizon passed to the predictor.
    pub lookahead_steps: usize,
    /// Estimator used by the predictor.
    pub probability_model: ProbabilityModel,
}

impl PagerConfig {
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    pub fn with_max_pages_per_process(mut self, max_pages: usize) -> Self {
        self.max_pages_per_process = max_pages;
        self
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_lookahead_steps(mut self, steps: usize) -> Self {
        self.lookahead_steps = steps;
        self
    }

    pub fn with_probability_model(mut self, model: ProbabilityModel) -> Self {
        self.probability_model = model;
        self
    }

    /// Check that every bound is usable.
    ///
    /// The horizon must lie in `1..=MAX_LOOKAHEAD_STEPS`.
    ///
    /// # Errors
    /// `Error::InvalidConfig` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.max_processes == 0 {
            return Err(Error::InvalidConfig("max_processes must be > 0".into()));
        }
        if self.max_pages_per_process == 0 {
            return Err(Error::InvalidConfig(
                "max_pages_per_process must be > 0".into(),
            ));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidConfig("page_size must be > 0".into()));
        }
        if self.lookahead_steps == 0 {
            return Err(Error::InvalidConfig("lookahead_steps must be > 0".into()));
        }
        if self.lookahead_steps > MAX_LOOKAHEAD_STEPS {
            return Err(Error::InvalidConfig(format!(
                "lookahead_steps must be <= {}",
                MAX_LOOKAHEAD_STEPS
            )));
        }
        Ok(())
    }
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            max_processes: MAX_PROCESSES,
            max_pages_per_process: MAX_PAGES_PER_PROCESS,
            page_size: PAGE_SIZE,
            lookahead_steps: DEFAULT_LOOKAHEAD_STEPS,
            probability_model: ProbabilityModel::Full,
        }
    }
}
