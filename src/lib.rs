//! pagewise - a page-replacement decision engine for virtual-memory simulators.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     Host simulator (not ours)                   │
//! │      process table · physical frames · scheduling · main loop   │
//! └─────────────────────────────────────────────────────────────────┘
//!            │ decide_for_all_processes()      ▲ page_in / page_out
//!            ▼                                 │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │              Decision engine (pager/)  [Runtime Swappable]      │
//! │   ┌─────────────────────────────────────────────────────────┐   │
//! │   │        Policies: LRU | Predictive (Markov + LRU)        │   │
//! │   └─────────────────────────────────────────────────────────┘   │
//! │   ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │   │ LogicalClock │  │ Timestamps   │  │ TransitionTable      │  │
//! │   │              │  │ (proc, page) │  │ (proc, page, page)   │  │
//! │   └──────────────┘  └──────────────┘  └──────────────────────┘  │
//! │   ┌──────────────┐  ┌──────────────┐  ┌──────────────────────┐  │
//! │   │ LRU replacer │  │  Estimator   │  │ Predictor            │  │
//! │   └──────────────┘  └──────────────┘  └──────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (ProcessId, PageId, Error, config)
//! - [`host`] - The host's process table and paging primitives
//! - [`pager`] - Decision engines and their building blocks
//!
//! # Quick Start
//! ```
//! use pagewise::{LruPager, MemoryHost, PageId, PagerConfig, PagingPolicy, ProcessId, ProcessSlot};
//!
//! struct Host {
//!     table: Vec<ProcessSlot>,
//! }
//!
//! impl MemoryHost for Host {
//!     fn processes(&self) -> &[ProcessSlot] {
//!         &self.table
//!     }
//!     fn page_in(&mut self, proc: ProcessId, page: PageId) -> bool {
//!         self.table[proc.index()].pages[page.index()] = true;
//!         true
//!     }
//!     fn page_out(&mut self, proc: ProcessId, page: PageId) -> bool {
//!         self.table[proc.index()].pages[page.index()] = false;
//!         true
//!     }
//! }
//!
//! let mut host = Host { table: vec![ProcessSlot::new(4)] };
//! let mut pager = LruPager::new(PagerConfig::default()).unwrap();
//!
//! pager.decide_for_all_processes(&mut host).unwrap();
//! assert!(host.table[0].pages[0]);
//! ```

pub mod common;
pub mod host;
pub mod pager;

// Re-export commonly used items at crate root for convenience
pub use common::config::PAGE_SIZE;
pub use common::{Error, PageId, PagerConfig, ProbabilityModel, ProcessId, Result};

pub use host::{MemoryHost, ProcessSlot};
pub use pager::{
    new_policy, LruPager, PagerStats, PagingPolicy, PolicyKind, PredictivePager, SharedPager,
    StatsSnapshot,
};
