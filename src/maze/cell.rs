use crate::core::*;
use crate::maze::cell::Direction::*;

/// Contents of a single maze cell, stored in maze files as `0`, `1` and `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum CellState {
    #[default]
    Open = 0,
    Wall = 1,
    Path = 2,
}

impl CellState {
    pub fn is_wall(self) -> bool {
        self == CellState::Wall
    }

    pub fn is_path(self) -> bool {
        self == CellState::Path
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Open),
            1 => Ok(CellState::Wall),
            2 => Ok(CellState::Path),
            other => Err(other),
        }
    }
}

impl From<CellState> for u8 {
    fn from(state: CellState) -> Self {
        state as u8
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// The order used for both search expansion and path reconstruction.
    pub const fn get_in_order() -> [Direction; 4] {
        [Up, Down, Left, Right]
    }

    pub fn to_offset(&self) -> Offset {
        match self {
            Up => Offset(-1, 0),
            Down => Offset(1, 0),
            Left => Offset(0, -1),
            Right => Offset(0, 1),
        }
    }

    pub fn reverse(&self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    /// Returns the direction leading from `cell` to `cell2`, if they are adjacent.
    pub fn between(cell: Cell, cell2: Cell) -> Option<Direction> {
        match cell2 - cell {
            Offset(-1, 0) => Some(Up),
            Offset(1, 0) => Some(Down),
            Offset(0, -1) => Some(Left),
            Offset(0, 1) => Some(Right),
            _ => None,
        }
    }

    pub fn step(&self, cell: Cell) -> Option<Cell> {
        cell.checked_add(self.to_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_state_from_raw() {
        assert_eq!(CellState::try_from(0), Ok(CellState::Open));
        assert_eq!(CellState::try_from(1), Ok(CellState::Wall));
        assert_eq!(CellState::try_from(2), Ok(CellState::Path));
        assert_eq!(CellState::try_from(3), Err(3));
        assert_eq!(u8::from(CellState::Path), 2);
    }

    #[test]
    fn directions_are_reversible() {
        let origin = Cell(5, 5);
        for dir in Direction::get_in_order() {
            let next = dir.step(origin).unwrap();
            assert_eq!(Direction::between(origin, next), Some(dir));
            assert_eq!(dir.reverse().step(next), Some(origin));
        }
        assert_eq!(Direction::between(origin, Cell(6, 6)), None);
        assert_eq!(Up.step(Cell(0, 3)), None);
        assert_eq!(Left.step(Cell(3, 0)), None);
    }
}
