//! The host simulator's side of the contract.
//!
//! The engine never owns process state. It reads [`ProcessSlot`]s through
//! [`MemoryHost::processes`] and changes residency only by asking the host
//! to [`page_in`](MemoryHost::page_in) or [`page_out`](MemoryHost::page_out).

use crate::common::{PageId, ProcessId};

/// One entry of the host's process table.
///
/// `pages[i]` is true when page `i` is resident. The length of `pages` is the
/// process's declared page count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessSlot {
    pub active: bool,
    pub pc: usize,
    pub pages: Vec<bool>,
}

impl ProcessSlot {
    /// An active process with `page_count` pages, none resident.
    pub fn new(page_count: usize) -> Self {
        Self {
            active: true,
            pc: 0,
            pages: vec![false; page_count],
        }
    }

    /// An unused table slot.
    pub fn inactive() -> Self {
        Self::default()
    }

    #[inline]
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Whether `page` is resident. Pages past the page count never are.
    #[inline]
    pub fn is_resident(&self, page: PageId) -> bool {
        self.pages.get(page.index()).copied().unwrap_or(false)
    }

    /// Resident pages in ascending order.
    pub fn resident_pages(&self) -> impl Iterator<Item = PageId> + '_ {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, resident)| **resident)
            .map(|(i, _)| PageId::new(i))
    }
}

/// Capabilities the engine needs from the simulator.
///
/// Both primitives report success as a plain `bool`. A successful
/// `page_in` must be visible in [`processes`](Self::processes) by the next
/// observation; a failed `page_out` is treated as fatal by the engine.
pub trait MemoryHost {
    /// The full, fixed-size process table.
    fn processes(&self) -> &[ProcessSlot];

    /// Ask for `page` to become resident for `proc`.
    fn page_in(&mut self, proc: ProcessId, page: PageId) -> bool;

    /// Ask for `page` to be released by `proc`.
    fn page_out(&mut self, proc: ProcessId, page: PageId) -> bool;
}
