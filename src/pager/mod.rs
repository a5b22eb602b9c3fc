//! Page-replacement decision engine.
//!
//! Both policies share one shape: a decision pass over every process slot,
//! mutating per-process-per-page state owned by the engine.
//!
//! # Components
//! - [`LruPager`] - reactive LRU replacement
//! - [`PredictivePager`] - Markov prediction with prefetch, LRU fallback
//! - [`PagingPolicy`] / [`PolicyKind`] - runtime-selectable engines
//! - [`SharedPager`] - lock-serialized handle with policy swapping
//! - [`PagerStats`] - decision statistics
//! - [`clock`], [`replacer`], [`markov`] - the building blocks

pub mod clock;
mod fault;
mod lru_pager;
pub mod markov;
mod policy;
mod predictive_pager;
pub mod replacer;
mod shared;
mod stats;

pub use lru_pager::LruPager;
pub use policy::{new_policy, PagingPolicy, PolicyKind};
pub use predictive_pager::PredictivePager;
pub use shared::SharedPager;
pub use stats::{PagerStats, StatsSnapshot};
