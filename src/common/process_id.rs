//! Process identifier type.

use std::fmt;

/// Position of a process in the host's process table.
///
/// Every per-process table in the engine is laid out by this index, so two
/// different ids never share an entry.
///
/// # Example
/// ```
/// use pagewise::ProcessId;
///
/// let slots = ["idle", "editor", "compiler"];
/// assert_eq!(slots[ProcessId::new(2).index()], "compiler");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProcessId(pub usize);

impl ProcessId {
    #[inline]
    pub fn new(slot: usize) -> Self {
        ProcessId(slot)
    }

    /// Slot index, for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Proc({})", self.0)
    }
}
