use std::ops;

use crate::core::{Cell, Dims};

/// Row-major 2D table addressed directly by [`Cell`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Array2D<T> {
    pub fn size(&self) -> Dims {
        Dims(self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn cell_to_idx(&self, pos: Cell) -> Option<usize> {
        let Cell(row, col) = pos;

        if row >= self.rows || col >= self.cols {
            return None;
        }

        Some(row * self.cols + col)
    }

    pub fn idx_to_cell(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        Some(Cell(idx / self.cols, idx % self.cols))
    }

    pub fn get(&self, pos: Cell) -> Option<&T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Cell) -> Option<&mut T> {
        self.cell_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.buf.iter_mut()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_cell(i))
    }

    /// Returns the row as a slice, `None` if out of bounds.
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row >= self.rows {
            return None;
        }

        let start = row * self.cols;
        Some(&self.buf[start..start + self.cols])
    }

    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Array2D<U> {
        Array2D {
            buf: self.buf.iter().map(f).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Builds the table by calling `f` for every cell in row-major order.
    pub fn from_fn(size: Dims, f: impl FnMut(Cell) -> T) -> Self {
        Self {
            buf: size.iter_cells().map(f).collect(),
            rows: size.0,
            cols: size.1,
        }
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, size: Dims) -> Self {
        Self {
            buf: vec![item; size.product()],
            rows: size.0,
            cols: size.1,
        }
    }

    pub fn fill(&mut self, item: T) {
        self.buf.fill(item);
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?}", index))
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        let size = self.size();
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {:?} in {:?}", index, size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrip() {
        let arr = Array2D::new(0u8, Dims(3, 4));
        for pos in arr.iter_pos() {
            let idx = arr.cell_to_idx(pos).unwrap();
            assert_eq!(arr.idx_to_cell(idx), Some(pos));
        }
        assert_eq!(arr.cell_to_idx(Cell(1, 2)), Some(6));
        assert_eq!(arr.cell_to_idx(Cell(3, 0)), None);
        assert_eq!(arr.cell_to_idx(Cell(0, 4)), None);
    }

    #[test]
    fn rows_are_contiguous() {
        let arr = Array2D::from_fn(Dims(2, 3), |Cell(r, c)| r * 10 + c);
        assert_eq!(arr.row(0), Some(&[0, 1, 2][..]));
        assert_eq!(arr.row(1), Some(&[10, 11, 12][..]));
        assert_eq!(arr.row(2), None);
        assert_eq!(arr[Cell(1, 1)], 11);
    }
}
