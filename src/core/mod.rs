pub mod dims;

pub use dims::*;

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid cell value {value} at {cell:?}")]
    InvalidCellValue { value: u8, cell: Cell },
    #[error("Maze has no cells")]
    Empty,
    #[error("Row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("{name} {cell:?} is outside of the {dims:?} maze")]
    OutOfBounds {
        name: &'static str,
        cell: Cell,
        dims: Dims,
    },
    #[error("Unknown preset {0}")]
    UnknownPreset(usize),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error; {0}")]
    Io(#[from] std::io::Error),
    #[error("Maze file parse error; {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Maze file write error; {0}")]
    Serialize(#[from] ron::Error),
    #[error("Invalid maze; {0}")]
    Maze(#[from] MazeError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
