//! Sorted interface index snapshot for implementing GETNEXT.

use crate::directory::InterfaceIndex;

/// Sorted, de-duplicated view of one interface index snapshot.
///
/// The directory returns indices in no particular order and may change
/// between requests, so a table is built per GETNEXT and then dropped.
///
/// # Example
///
/// ```rust
/// use ifalias_persist::handler::IndexTable;
///
/// let table = IndexTable::from_snapshot([4, 1, 3]);
/// assert_eq!(table.get_next(0), Some(1));
/// assert_eq!(table.get_next(2), Some(3));
/// assert_eq!(table.get_next(4), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexTable {
    /// Kept sorted and unique for binary search
    indices: Vec<InterfaceIndex>,
}

impl IndexTable {
    /// Build a table from an unordered snapshot. Duplicates collapse.
    pub fn from_snapshot(snapshot: impl IntoIterator<Item = InterfaceIndex>) -> Self {
        let mut indices: Vec<InterfaceIndex> = snapshot.into_iter().collect();
        indices.sort_unstable();
        indices.dedup();
        Self { indices }
    }

    /// Smallest index strictly greater than `index`.
    ///
    /// `index` need not be present in the table. Returns `None` if no index
    /// is greater.
    pub fn get_next(&self, index: InterfaceIndex) -> Option<InterfaceIndex> {
        match self.indices.binary_search(&index) {
            // Exact match, return the next one
            Ok(pos) => self.indices.get(pos + 1).copied(),
            // No exact match, return the entry at insertion point
            Err(pos) => self.indices.get(pos).copied(),
        }
    }

    /// Check whether `index` is present.
    pub fn contains(&self, index: InterfaceIndex) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Get the number of indices in the table.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = InterfaceIndex> + '_ {
        self.indices.iter().copied()
    }
}
