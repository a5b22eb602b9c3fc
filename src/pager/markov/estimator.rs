//! Transition probability estimates.
//!
//! Both single-step estimators add 1 to the denominator. That keeps an
//! empty row at probability 0 and discounts rows with little evidence.

use crate::common::{PageId, ProbabilityModel, ProcessId};
use crate::pager::markov::TransitionTable;

/// Probability view over one process's slice of a [`TransitionTable`].
///
/// # Example
/// ```
/// use pagewise::{PageId, ProbabilityModel, ProcessId};
/// use pagewise::pager::markov::{Estimator, TransitionTable};
///
/// let proc = ProcessId::new(0);
/// let mut table = TransitionTable::new(1, 4);
/// table.record(proc, PageId::new(0), PageId::new(1));
///
/// let est = Estimator::new(&table, proc, 4, ProbabilityModel::Full);
/// assert_eq!(est.full_probability(PageId::new(0), PageId::new(1)), 0.5);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Estimator<'a> {
    table: &'a TransitionTable,
    proc: ProcessId,
    page_count: usize,
    model: ProbabilityModel,
}

impl<'a> Estimator<'a> {
    /// `page_count` is the process's declared page count; pages at or past
    /// it are never considered.
    pub fn new(
        table: &'a TransitionTable,
        proc: ProcessId,
        page_count: usize,
        model: ProbabilityModel,
    ) -> Self {
        Self {
            table,
            proc,
            page_count,
            model,
        }
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// `count[from][to] / (1 + count[from][from])`.
    ///
    /// Uses the self-loop count as a stand-in for the row total, which holds
    /// up when tight loops dominate a process's transitions. Not normalized:
    /// it can exceed 1 when a row has more outgoing than looping transitions.
    pub fn approx_probability(&self, from: PageId, to: PageId) -> f64 {
        let next = f64::from(self.table.count(self.proc, from, to));
        let looping = f64::from(self.table.count(self.proc, from, from));
        next / (1.0 + looping)
    }

    /// `count[from][to] / (1 + Σ_j count[from][j])`, always in `[0, 1)`.
    pub fn full_probability(&self, from: PageId, to: PageId) -> f64 {
        let next = f64::from(self.table.count(self.proc, from, to));
        let total = self.table.outgoing(self.proc, from, self.page_count) as f64;
        next / (1.0 + total)
    }

    /// Single-step estimate under the configured model.
    #[inline]
    pub fn step_probability(&self, from: PageId, to: PageId) -> f64 {
        match self.model {
            ProbabilityModel::Full => self.full_probability(from, to),
            ProbabilityModel::Approximate => self.approx_probability(from, to),
        }
    }

    /// Probability of reaching `target` from `from` in exactly `steps` steps.
    ///
    /// Splits off the first step and recurses on the rest, which is entry
    /// `(from, target)` of the step matrix raised to `steps`. Intermediate
    /// pages equal to `from` are skipped. Cost grows as `pages^steps`.
    pub fn lookahead_probability(&self, from: PageId, target: PageId, steps: usize) -> f64 {
        match steps {
            0 => {
                if from == target {
                    1.0
                } else {
                    0.0
                }
            }
            1 => self.step_probability(from, target),
            _ => (0..self.page_count)
                .map(PageId::new)
                .filter(|&via| via != from)
                .map(|via| {
                    let first = self.step_probability(from, via);
                    if first == 0.0 {
                        return 0.0;
                    }
                    first * self.lookahead_probability(via, target, steps - 1)
                })
                .sum(),
        }
    }
}
