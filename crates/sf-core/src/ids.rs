//! Strongly typed identifier wrappers.
//!
//! `StoreId` is the dataset's own identifier and is never used for indexing.
//! `RecordIndex` is a record's position in the dataset as loaded; it is the
//! tie-break key that keeps ranked output deterministic.

use std::fmt;

/// Identifier of a store, as given by the dataset.  Unique per snapshot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StoreId(pub i64);

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StoreId({})", self.0)
    }
}

/// Position of a record in its dataset.  Max ~4.3 billion records.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RecordIndex(pub u32);

impl RecordIndex {
    /// Largest dataset a `RecordIndex` can address.
    pub const MAX_RECORDS: usize = u32::MAX as usize;

    /// Cast to `usize` for direct use as a slice index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for RecordIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<RecordIndex> for usize {
    #[inline(always)]
    fn from(id: RecordIndex) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for RecordIndex {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<RecordIndex, Self::Error> {
        u32::try_from(n).map(RecordIndex)
    }
}
