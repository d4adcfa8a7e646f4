use crate::array::Array2D;
use crate::core::*;
use crate::maze::cell::CellState;

/// Grid of open, wall and path cells together with the start and end cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    pub(crate) cells: Array2D<CellState>,
    pub(crate) start: Cell,
    pub(crate) end: Cell,
    pub(crate) title: Option<String>,
}

impl Maze {
    /// Builds a maze from raw `0`/`1`/`2` rows.
    ///
    /// Rows must be non-empty and all of the same length, `start` and `end` must lie inside.
    pub fn from_rows(rows: Vec<Vec<u8>>, start: Cell, end: Cell) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Array2D::new(CellState::Open, Dims(height, width));
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::RaggedRow {
                    row: r,
                    expected: width,
                    found: row.len(),
                });
            }

            for (c, value) in row.into_iter().enumerate() {
                let cell = Cell(r, c);
                cells[cell] = CellState::try_from(value)
                    .map_err(|value| MazeError::InvalidCellValue { value, cell })?;
            }
        }

        let maze = Maze {
            cells,
            start,
            end,
            title: None,
        };
        maze.check_endpoints()?;

        Ok(maze)
    }

    /// Maze without any walls.
    pub fn empty(size: Dims, start: Cell, end: Cell) -> Result<Self, MazeError> {
        if size.is_empty() {
            return Err(MazeError::Empty);
        }

        let maze = Maze {
            cells: Array2D::new(CellState::Open, size),
            start,
            end,
            title: None,
        };
        maze.check_endpoints()?;

        Ok(maze)
    }

    fn check_endpoints(&self) -> Result<(), MazeError> {
        let dims = self.size();
        for (name, cell) in [("start", self.start), ("end", self.end)] {
            if !dims.contains(cell) {
                return Err(MazeError::OutOfBounds { name, cell, dims });
            }
        }
        Ok(())
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn size(&self) -> Dims {
        self.cells.size()
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        self.size().contains(pos)
    }

    pub fn get(&self, pos: Cell) -> Option<CellState> {
        self.cells.get(pos).copied()
    }

    /// Sets the cell, out of bounds positions are ignored.
    pub fn set(&mut self, pos: Cell, state: CellState) {
        if let Some(cell) = self.cells.get_mut(pos) {
            *cell = state;
        }
    }

    /// Out of bounds cells count as walls.
    pub fn is_wall(&self, pos: Cell) -> bool {
        self.get(pos).map_or(true, CellState::is_wall)
    }

    pub fn mark_path(&mut self, path: &[Cell]) {
        for &cell in path {
            self.set(cell, CellState::Path);
        }
    }

    /// Turns all path cells back into open cells.
    pub fn clear_path(&mut self) {
        for cell in self.cells.iter_mut().filter(|c| c.is_path()) {
            *cell = CellState::Open;
        }
    }

    pub fn path_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_path()).count()
    }

    pub fn get_cells(&self) -> &Array2D<CellState> {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.size().rows())
            .filter_map(|r| self.cells.row(r))
            .map(|row| row.iter().map(|&c| u8::from(c)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_roundtrip() {
        let rows = vec![vec![1, 0, 1], vec![0, 2, 0]];
        let maze = Maze::from_rows(rows.clone(), Cell(0, 1), Cell(1, 2)).unwrap();
        assert_eq!(maze.size(), Dims(2, 3));
        assert_eq!(maze.get(Cell(0, 0)), Some(CellState::Wall));
        assert_eq!(maze.get(Cell(1, 1)), Some(CellState::Path));
        assert_eq!(maze.to_rows(), rows);
    }

    #[test]
    fn from_rows_rejects_bad_input() {
        assert_eq!(
            Maze::from_rows(vec![], Cell(0, 0), Cell(0, 0)),
            Err(MazeError::Empty)
        );
        assert_eq!(
            Maze::from_rows(vec![vec![0, 0], vec![0]], Cell(0, 0), Cell(0, 0)),
            Err(MazeError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Maze::from_rows(vec![vec![0, 7]], Cell(0, 0), Cell(0, 0)),
            Err(MazeError::InvalidCellValue {
                value: 7,
                cell: Cell(0, 1)
            })
        );
        assert!(matches!(
            Maze::from_rows(vec![vec![0, 0]], Cell(0, 0), Cell(1, 0)),
            Err(MazeError::OutOfBounds { name: "end", .. })
        ));
    }

    #[test]
    fn path_marking() {
        let mut maze = Maze::empty(Dims(2, 2), Cell(0, 0), Cell(1, 1)).unwrap();
        maze.mark_path(&[Cell(1, 1), Cell(0, 1)]);
        assert_eq!(maze.path_len(), 2);
        assert_eq!(maze.to_rows(), vec![vec![0, 2], vec![0, 2]]);

        maze.clear_path();
        assert_eq!(maze.path_len(), 0);
        assert!(!maze.is_wall(Cell(0, 1)));
        assert!(maze.is_wall(Cell(2, 0)));
    }
}
