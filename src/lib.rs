pub mod app;
pub mod array;
pub mod constants;
pub mod core;
pub mod graph;
pub mod logging;
pub mod maze;
pub mod presets;
pub mod render;
pub mod settings;
pub mod solver;

pub use crate::core::{Cell, Dims, Error, MazeError};
pub use graph::{build_graph, Graph};
pub use maze::Maze;
pub use solver::{find_path, solve, Solver};
