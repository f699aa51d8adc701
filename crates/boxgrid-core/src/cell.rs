//! Grid cell addressing.

use serde::{Deserialize, Serialize};

/// A 0-based (column, row) grid position.
///
/// Fields are signed so that negative positions are representable; the
/// layout engine validates them to an absence rather than panicking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct CellIndex {
    pub column: i32,
    pub row: i32,
}

impl CellIndex {
    #[inline]
    #[must_use]
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }
}

impl From<(i32, i32)> for CellIndex {
    #[inline]
    fn from((column, row): (i32, i32)) -> Self {
        Self { column, row }
    }
}
