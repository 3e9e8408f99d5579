//! Storage of items in a bounds-checked grid, with running totals.

use std::fmt::Display;
use std::mem;

use itertools::Itertools;

use super::{
    errors::{OutOfBoundsError, RemoveError, StoreError},
    Item, Weight,
};

/// The number of rows in a default-constructed [`Inventory`].
const DEFAULT_ROWS: usize = 10;

/// The number of columns in a default-constructed [`Inventory`].
const DEFAULT_COLS: usize = 10;

/// A grid of item slots with an auxiliary equipped slot.
///
/// The grid's shape is fixed at construction time and may be jagged: every
/// row's length is independent. The total weight and item count of the grid
/// are scanned once at construction and maintained incrementally by every
/// mutation afterwards, so reading them is O(1).
///
/// The equipped item lives outside the grid and never contributes to the
/// totals.
#[derive(Debug, Clone)]
pub struct Inventory {
    /// The item slots, addressed by (row, column).
    ///
    /// Rows may have independent lengths.
    grid: Vec<Vec<Item>>,

    /// The item held outside the grid, if any.
    equipped: Option<Item>,

    /// The total weight of the items in the grid.
    ///
    /// `weight` always equals the sum recomputed over the non-empty slots of
    /// `grid`; the equipped item is excluded.
    weight: Weight,

    /// The number of non-empty slots in the grid.
    ///
    /// `count` always equals the count recomputed over `grid`; the equipped
    /// item is excluded.
    count: usize,
}

impl Inventory {
    /// Create an inventory holding the given grid of items.
    ///
    /// This is the only full scan of the grid: every mutation afterwards
    /// adjusts the totals by the exact delta it causes. The equipped item,
    /// if provided, is excluded from the totals.
    pub fn new(grid: Vec<Vec<Item>>, equipped: Option<Item>) -> Self {
        let (weight, count) = scan_totals(&grid);

        Self {
            grid,
            equipped,
            weight,
            count,
        }
    }

    /// Create an empty inventory with the given rectangular shape.
    pub fn with_shape(rows: usize, cols: usize) -> Self {
        Self::new(vec![vec![Item::none(); cols]; rows], None)
    }

    /// The currently equipped item, if any.
    pub fn equipped(&self) -> Option<&Item> {
        self.equipped.as_ref()
    }

    /// Equip an item, returning the previously equipped one.
    ///
    /// The caller stays responsible for the returned item: the inventory
    /// never drops an equipped item on replacement, only through
    /// [`Inventory::discard_equipped`]. The totals are unaffected, as the
    /// equipped slot is never counted.
    pub fn equip(&mut self, item: Item) -> Option<Item> {
        self.equipped.replace(item)
    }

    /// Drop the currently equipped item, leaving the slot empty.
    ///
    /// No-op when nothing is equipped. The item is released here, not when
    /// the inventory itself is dropped.
    pub fn discard_equipped(&mut self) {
        self.equipped = None;
    }

    /// A full copy of the grid.
    ///
    /// Mutating the returned rows cannot affect the inventory.
    pub fn items(&self) -> Vec<Vec<Item>> {
        self.grid.clone()
    }

    /// The number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.grid.len()
    }

    /// The length of the given row, or `None` for a row outside the grid.
    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.grid.get(row).map(Vec::len)
    }

    /// The total weight of the items stored in the grid.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The number of items stored in the grid.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns `true` if no slot holds an item.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot holds an item.
    pub fn is_full(&self) -> bool {
        self.count == self.grid.iter().map(Vec::len).sum::<usize>()
    }

    /// The item stored at the given slot.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] when `row` is at or past the number of
    /// rows, or `col` is at or past that specific row's length.
    pub fn at(&self, row: usize, col: usize) -> Result<Item, OutOfBoundsError> {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .ok_or(OutOfBoundsError { row, col })
    }

    /// Store an item in the given slot.
    ///
    /// Only a slot currently holding the empty-slot sentinel accepts a
    /// store. On success the totals move up by the stored item's weight and
    /// by one item, unless the stored item is itself the sentinel, which
    /// crosses no boundary and moves nothing.
    ///
    /// # Errors
    ///
    /// - [`StoreError::OutOfBounds`] under the same bounds rule as
    ///   [`Inventory::at`].
    /// - [`StoreError::Occupied`] when the slot already holds an item.
    ///
    /// On either failure the inventory is untouched.
    pub fn store(&mut self, row: usize, col: usize, item: Item) -> Result<(), StoreError> {
        let slot = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(OutOfBoundsError { row, col })?;

        if !slot.is_none() {
            return Err(StoreError::Occupied { row, col });
        }

        *slot = item;
        if !item.is_none() {
            self.count += 1;
            self.weight += item.weight();
        }

        // Make sure that the invariants still hold
        debug_assert!(self.totals_hold());

        Ok(())
    }

    /// Take the item out of the given slot, leaving the slot empty.
    ///
    /// The totals move down symmetrically to [`Inventory::store`]: minus the
    /// removed item's weight, minus one item.
    ///
    /// # Errors
    ///
    /// - [`RemoveError::OutOfBounds`] under the same bounds rule as
    ///   [`Inventory::at`].
    /// - [`RemoveError::Empty`] when the slot holds nothing.
    ///
    /// On either failure the inventory is untouched.
    pub fn remove(&mut self, row: usize, col: usize) -> Result<Item, RemoveError> {
        let slot = self
            .grid
            .get_mut(row)
            .and_then(|cells| cells.get_mut(col))
            .ok_or(OutOfBoundsError { row, col })?;

        if slot.is_none() {
            return Err(RemoveError::Empty { row, col });
        }

        let removed = mem::take(slot);
        self.count -= 1;
        self.weight -= removed.weight();

        // Make sure that the invariants still hold
        debug_assert!(self.totals_hold());

        Ok(removed)
    }

    /// Exchange the items stored in two slots.
    ///
    /// Both slots are validated before anything moves. The totals are
    /// unaffected, as both items stay in the grid.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBoundsError`] for whichever slot fails the bounds rule
    /// of [`Inventory::at`] first.
    pub fn swap(
        &mut self,
        first_row: usize,
        first_col: usize,
        second_row: usize,
        second_col: usize,
    ) -> Result<(), OutOfBoundsError> {
        let first = self.at(first_row, first_col)?;
        let second = self.at(second_row, second_col)?;

        self.grid[first_row][first_col] = second;
        self.grid[second_row][second_col] = first;

        Ok(())
    }

    /// Re-derive the totals from the grid and compare them to the running
    /// values.
    ///
    /// Incremental float updates can drift from a fresh scan by rounding
    /// error, so the weight comparison allows a small tolerance.
    fn totals_hold(&self) -> bool {
        let (weight, count) = scan_totals(&self.grid);

        count == self.count && (weight.0 - self.weight.0).abs() < 1e-3
    }
}

impl Default for Inventory {
    fn default() -> Self {
        Self::with_shape(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Display for Inventory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self
            .grid
            .iter()
            .map(|cells| format!("[{}]", cells.iter().join(", ")))
            .join("\n");

        write!(f, "{rows}")
    }
}

/// Total up the weight and count of the non-empty items in a grid.
fn scan_totals(grid: &[Vec<Item>]) -> (Weight, usize) {
    grid.iter()
        .flatten()
        .filter(|item| !item.is_none())
        .fold((Weight::default(), 0), |(weight, count), item| {
            (weight + item.weight(), count + 1)
        })
}
