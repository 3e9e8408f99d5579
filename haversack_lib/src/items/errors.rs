//! Errors related to items and inventories.

use thiserror::Error;

/// The requested slot lies outside the inventory grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("slot ({row}, {col}) is out of bounds")]
pub struct OutOfBoundsError {
    /// The requested row.
    pub row: usize,
    /// The requested column.
    pub col: usize,
}

/// Failed to store an item in an inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The requested slot lies outside the grid.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),

    /// The slot already holds an item.
    #[error("slot ({row}, {col}) is occupied")]
    Occupied {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}

/// Failed to remove an item from an inventory slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// The requested slot lies outside the grid.
    #[error(transparent)]
    OutOfBounds(#[from] OutOfBoundsError),

    /// The slot holds nothing to remove.
    #[error("slot ({row}, {col}) is empty")]
    Empty {
        /// The requested row.
        row: usize,
        /// The requested column.
        col: usize,
    },
}
