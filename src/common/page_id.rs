//! Page identifier type.

use std::fmt;

/// Index of a page within a single process's address space.
///
/// A program counter maps to a page by integer division with the page size,
/// so the index is always `< page_count` for a well-behaved host.
///
/// # Example
/// ```
/// use pagewise::PageId;
///
/// let page = PageId::from_pc(517, 128);
/// assert_eq!(page, PageId::new(4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(pub usize);

impl PageId {
    /// Create a new PageId.
    #[inline]
    pub fn new(id: usize) -> Self {
        PageId(id)
    }

    /// Page containing the given program counter.
    ///
    /// # Panics
    /// Panics if `page_size` is 0. [`crate::PagerConfig::validate`] rules that out.
    #[inline]
    pub fn from_pc(pc: usize, page_size: usize) -> Self {
        PageId(pc / page_size)
    }

    /// Raw index, for table lookups.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}
