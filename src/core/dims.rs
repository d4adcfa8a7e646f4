use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// Grid coordinate as `(row, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub usize, pub usize);

/// Grid size as `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dims(pub usize, pub usize);

/// Signed step between two cells, `(rows, columns)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Offset(pub isize, pub isize);

impl Cell {
    pub const ZERO: Cell = Cell(0, 0);

    pub fn row(&self) -> usize {
        self.0
    }

    pub fn col(&self) -> usize {
        self.1
    }

    /// Moves the cell by `off`, returns `None` when either coordinate would go negative.
    pub fn checked_add(self, off: Offset) -> Option<Cell> {
        Some(Cell(
            self.0.checked_add_signed(off.0)?,
            self.1.checked_add_signed(off.1)?,
        ))
    }

    pub fn manhattan(self, other: Cell) -> usize {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1)
    }
}

impl Dims {
    pub fn rows(&self) -> usize {
        self.0
    }

    pub fn cols(&self) -> usize {
        self.1
    }

    pub fn product(&self) -> usize {
        self.0 * self.1
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0 || self.1 == 0
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.0 && cell.1 < self.1
    }

    /// Iterates every cell in row-major order.
    pub fn iter_cells(self) -> impl Iterator<Item = Cell> {
        (0..self.0).flat_map(move |row| (0..self.1).map(move |col| Cell(row, col)))
    }
}

impl Sub for Cell {
    type Output = Offset;

    fn sub(self, other: Cell) -> Offset {
        Offset(
            self.0 as isize - other.0 as isize,
            self.1 as isize - other.1 as isize,
        )
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell(row, col)
    }
}

impl From<Cell> for (usize, usize) {
    fn from(cell: Cell) -> Self {
        (cell.0, cell.1)
    }
}

impl From<(usize, usize)> for Dims {
    fn from((rows, cols): (usize, usize)) -> Self {
        Dims(rows, cols)
    }
}

impl From<Dims> for (usize, usize) {
    fn from(dims: Dims) -> Self {
        (dims.0, dims.1)
    }
}
