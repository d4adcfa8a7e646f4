//! Built-in mazes and the empty default grid.

use rand::Rng;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::{CellState, Maze};

pub const PRESET_COUNT: usize = 4;
pub const PRESET_ROWS: usize = 10;
pub const PRESET_COLS: usize = 13;

/// Size of the empty grid shown when no maze was chosen.
pub const DEFAULT_SIZE: Dims = Dims(PRESET_ROWS, PRESET_COLS);

type PresetGrid = [[u8; PRESET_COLS]; PRESET_ROWS];

#[rustfmt::skip]
const PRESETS: [PresetGrid; PRESET_COUNT] = [
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 0, 0, 1],
        [1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1, 0, 1],
        [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
        [1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1],
        [1, 0, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 1, 1],
        [1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1, 0, 1],
        [1, 0, 1, 0, 1, 1, 1, 1, 1, 0, 1, 0, 1],
        [1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
        [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
    [
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        [1, 0, 0, 0, 1, 0, 1, 0, 0, 0, 0, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 1, 1, 1, 1, 0, 0, 0, 1, 0, 1],
        [1, 0, 1, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 0, 1],
        [1, 0, 1, 0, 1, 0, 0, 0, 1, 1, 1, 0, 1],
        [1, 0, 1, 0, 1, 0, 1, 1, 1, 0, 1, 0, 1],
        [1, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 0, 1],
        [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    ],
];

/// Returns the preset with the given index.
///
/// The start is placed one cell in from the top left corner and the end one cell in from the
/// bottom right corner.
pub fn preset(index: usize) -> Result<Maze, MazeError> {
    let grid = PRESETS.get(index).ok_or(MazeError::UnknownPreset(index))?;
    let rows = grid.iter().map(|row| row.to_vec()).collect();

    let start = Cell(1, 1);
    let end = Cell(PRESET_ROWS - 2, PRESET_COLS - 2);
    Ok(Maze::from_rows(rows, start, end)?.with_title(format!("Preset {}", index + 1)))
}

/// Picks one of the presets at random.
pub fn random_preset(rng: &mut impl Rng) -> Maze {
    let index = rng.gen_range(0..PRESET_COUNT);
    log::debug!("Chose preset {}", index);

    // every index below PRESET_COUNT is valid
    preset(index).unwrap_or_else(|_| default_maze())
}

/// Empty grid with the start in the top left corner and the end in the bottom right corner.
pub fn default_maze() -> Maze {
    let Dims(rows, cols) = DEFAULT_SIZE;
    Maze {
        cells: Array2D::new(CellState::Open, DEFAULT_SIZE),
        start: Cell::ZERO,
        end: Cell(rows - 1, cols - 1),
        title: None,
    }
}
