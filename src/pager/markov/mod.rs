//! Markov model of per-process page locality.
//!
//! # Components
//! - [`TransitionTable`] - observed page-to-page transition counts
//! - [`CurrentPageTracker`] - last page seen per process, to detect transitions
//! - [`Estimator`] - single- and multi-step transition probabilities
//! - [`best_guess`] - most likely next page

mod estimator;
mod predictor;
mod transition;

pub use estimator::Estimator;
pub use predictor::best_guess;
pub use transition::{CurrentPageTracker, TransitionTable};
