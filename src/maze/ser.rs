use std::{fs, path::Path};

use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::core::*;
use crate::maze::Maze;

/// On-disk form of a [`Maze`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableMaze {
    #[serde(default)]
    pub title: String,
    pub grid: Vec<Vec<u8>>,
    pub start: Cell,
    pub end: Cell,
}

impl From<&Maze> for SerializableMaze {
    fn from(maze: &Maze) -> Self {
        SerializableMaze {
            title: maze.title().unwrap_or_default().to_string(),
            grid: maze.to_rows(),
            start: maze.start(),
            end: maze.end(),
        }
    }
}

impl TryFrom<SerializableMaze> for Maze {
    type Error = MazeError;

    fn try_from(value: SerializableMaze) -> Result<Self, Self::Error> {
        let SerializableMaze {
            title,
            grid,
            start,
            end,
        } = value;

        let maze = Maze::from_rows(grid, start, end)?;
        Ok(if title.is_empty() {
            maze
        } else {
            maze.with_title(title)
        })
    }
}

pub fn from_str(source: &str) -> Result<Maze> {
    let ser: SerializableMaze = ron::from_str(source)?;
    Ok(Maze::try_from(ser)?)
}

pub fn to_string(maze: &Maze) -> Result<String> {
    let config = PrettyConfig::default().depth_limit(2);
    Ok(ron::ser::to_string_pretty(
        &SerializableMaze::from(maze),
        config,
    )?)
}

pub fn load(path: impl AsRef<Path>) -> Result<Maze> {
    let path = path.as_ref();
    let maze = from_str(&fs::read_to_string(path)?)?;
    log::info!("Loaded {:?} maze from {:?}", maze.size(), path);
    Ok(maze)
}

pub fn save(maze: &Maze, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, to_string(maze)?)?;
    log::info!("Saved maze to {:?}", path);
    Ok(())
}
