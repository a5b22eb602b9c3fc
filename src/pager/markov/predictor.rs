//! Next-page prediction.

use crate::common::PageId;
use crate::pager::markov::Estimator;

/// Most likely page to follow `current`, or `None` without evidence.
///
/// Every page other than `current` is scored by summing
/// `lookahead_probability(current, candidate, max_steps)` once per step in
/// `1..=max_steps`. Each term uses the full `max_steps` horizon, so the score
/// is `max_steps` times the single horizon probability. The highest score
/// wins; ties keep the lowest page. Scores of 0 never win.
pub fn best_guess(estimator: &Estimator<'_>, current: PageId, max_steps: usize) -> Option<PageId> {
    let mut best: Option<PageId> = None;
    let mut best_score = 0.0;

    for candidate in (0..estimator.page_count()).map(PageId::new) {
        if candidate == current {
            continue;
        }

        // TODO: vary the horizon per step once longer lookaheads are tuned;
        // every term currently repeats the max_steps probability.
        let score: f64 = (1..=max_steps)
            .map(|_| estimator.lookahead_probability(current, candidate, max_steps))
            .sum();

        if score > best_score {
            best_score = score;
            best = Some(candidate);
        }
    }

    best
}
