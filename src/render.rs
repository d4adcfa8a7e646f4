//! Terminal view of a maze, including the cell by cell reveal of a solved path.

use std::{io, thread, time::Duration};

use colored::{ColoredString, Colorize as _};
use crossterm::{cursor, queue};

use crate::core::*;
use crate::maze::{CellState, Maze};
use crate::settings::Theme;

const WALL: &str = "██";
const PATH: &str = "░░";
const START: &str = "S ";
const END: &str = "E ";
const OPEN: &str = "  ";

fn cell_glyph(maze: &Maze, pos: Cell, theme: &Theme) -> ColoredString {
    let (symbol, color) = match maze.get(pos) {
        Some(CellState::Wall) | None => (WALL, theme.wall),
        Some(CellState::Path) => (PATH, theme.path),
        Some(CellState::Open) if pos == maze.start() => (START, theme.start),
        Some(CellState::Open) if pos == maze.end() => (END, theme.end),
        Some(CellState::Open) => (OPEN, theme.text),
    };

    symbol.color(color).on_color(theme.background)
}

/// Renders the maze, one line per row and two characters per cell.
pub fn render_maze(maze: &Maze, theme: &Theme) -> String {
    let Dims(rows, cols) = maze.size();
    let mut out = String::with_capacity(rows * (cols * 2 + 1));

    for row in 0..rows {
        for col in 0..cols {
            out.push_str(&cell_glyph(maze, Cell(row, col), theme).to_string());
        }
        out.push('\n');
    }

    out
}

pub fn draw(out: &mut impl io::Write, maze: &Maze, theme: &Theme) -> io::Result<()> {
    write!(out, "{}", render_maze(maze, theme))?;
    out.flush()
}

/// Marks `path` in the maze one cell at a time, redrawing the maze in place after each step.
///
/// Expects the maze to be drawn right above the cursor already.
pub fn reveal(
    out: &mut impl io::Write,
    maze: &mut Maze,
    path: &[Cell],
    theme: &Theme,
    delay: Duration,
) -> io::Result<()> {
    let rows = u16::try_from(maze.size().rows()).unwrap_or(u16::MAX);

    for &cell in path {
        maze.set(cell, CellState::Path);

        queue!(out, cursor::MoveUp(rows), cursor::MoveToColumn(0))?;
        draw(out, maze, theme)?;

        if !delay.is_zero() {
            thread::sleep(delay);
        }
    }

    Ok(())
}

pub fn status_line(text: &str, theme: &Theme) -> String {
    text.color(theme.text).bold().to_string()
}
