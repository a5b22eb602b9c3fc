//! Scripted in-memory host shared by the integration tests.

#![allow(dead_code)]

use pagewise::{MemoryHost, PageId, ProcessId, ProcessSlot};

/// A host call and whether the host granted it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    PageIn(usize, usize, bool),
    PageOut(usize, usize, bool),
}

/// Process table plus a global frame budget.
///
/// `page_in` succeeds while frames are free and flips the residency flag
/// immediately. `page_out` frees a frame unless evictions are refused.
pub struct ScriptedHost {
    pub table: Vec<ProcessSlot>,
    pub frames: usize,
    pub used: usize,
    pub refuse_evictions: bool,
    pub calls: Vec<Call>,
}

impl ScriptedHost {
    pub fn new(table: Vec<ProcessSlot>, frames: usize) -> Self {
        let used = table
            .iter()
            .map(|slot| slot.pages.iter().filter(|&&r| r).count())
            .sum();
        Self {
            table,
            frames,
            used,
            refuse_evictions: false,
            calls: Vec::new(),
        }
    }

    /// Frames held by pages outside the process table.
    pub fn occupy(&mut self, frames: usize) {
        self.used += frames;
    }

    pub fn set_pc(&mut self, proc: usize, pc: usize) {
        self.table[proc].pc = pc;
    }

    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }
}

impl MemoryHost for ScriptedHost {
    fn processes(&self) -> &[ProcessSlot] {
        &self.table
    }

    fn page_in(&mut self, proc: ProcessId, page: PageId) -> bool {
        let granted = self.used < self.frames;
        if granted {
            self.used += 1;
            self.table[proc.index()].pages[page.index()] = true;
        }
        self.calls.push(Call::PageIn(proc.index(), page.index(), granted));
        granted
    }

    fn page_out(&mut self, proc: ProcessId, page: PageId) -> bool {
        let granted = !self.refuse_evictions;
        if granted {
            self.used -= 1;
            self.table[proc.index()].pages[page.index()] = false;
        }
        self.calls.push(Call::PageOut(proc.index(), page.index(), granted));
        granted
    }
}

/// Active process of `page_count` pages, with `resident` pages loaded.
pub fn process(page_count: usize, resident: &[usize]) -> ProcessSlot {
    let mut slot = ProcessSlot::new(page_count);
    for &page in resident {
        slot.pages[page] = true;
    }
    slot
}
