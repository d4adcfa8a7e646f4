pub mod cell;
pub mod maze;
pub mod ser;

pub use cell::{CellState, Direction};
pub use maze::Maze;
