use std::{io, time::Duration};

use rand::Rng;

use crate::core::*;
use crate::maze::Maze;
use crate::presets;
use crate::render;
use crate::settings::{Settings, ThemeMode};
use crate::solver::Solver;

pub const NO_PATH_MESSAGE: &str = "No path found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Found { length: usize },
    NoPath,
}

/// Holds the current maze and drives solving and drawing it.
pub struct App {
    maze: Maze,
    solver: Solver,
    theme: ThemeMode,
    animate: bool,
    delay: Duration,
}

impl App {
    pub fn new(maze: Maze, settings: &Settings) -> Self {
        let solver = Solver::new(&maze);
        App {
            maze,
            solver,
            theme: settings.get_theme(),
            animate: settings.get_animate(),
            delay: settings.get_delay(),
        }
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    /// Replaces the maze, the graph is rebuilt if the size changed.
    pub fn set_maze(&mut self, mut maze: Maze) {
        maze.clear_path();
        self.solver.update(&maze);
        log::info!(
            "Using {} maze {:?}",
            maze.title().unwrap_or("untitled"),
            maze.size()
        );
        self.maze = maze;
    }

    pub fn randomize(&mut self, rng: &mut impl Rng) {
        self.set_maze(presets::random_preset(rng));
    }

    /// Solves the current maze and shows the result.
    pub fn solve(&mut self, out: &mut impl io::Write) -> io::Result<SolveOutcome> {
        self.maze.clear_path();
        let theme = self.theme.theme();

        let Some(solution) = self.solver.find_path(&self.maze) else {
            render::draw(out, &self.maze, &theme)?;
            writeln!(out, "{}", render::status_line(NO_PATH_MESSAGE, &theme))?;
            return Ok(SolveOutcome::NoPath);
        };

        if self.animate {
            render::draw(out, &self.maze, &theme)?;
            render::reveal(out, &mut self.maze, &solution.path, &theme, self.delay)?;
        } else {
            self.maze.mark_path(&solution.path);
            render::draw(out, &self.maze, &theme)?;
        }

        let length = solution.len();
        writeln!(
            out,
            "{}",
            render::status_line(&format!("Path length: {}", length), &theme)
        )?;
        out.flush()?;

        Ok(SolveOutcome::Found { length })
    }
}

/// Chooses the maze to start with when none was given explicitly.
pub fn initial_maze(settings: &Settings) -> Result<Maze> {
    match settings.get_default_preset() {
        Some(index) => Ok(presets::preset(index)?),
        None => Ok(presets::default_maze()),
    }
}
