//! Breadth-first shortest path search over a [`Graph`] and path reconstruction.

use std::collections::VecDeque;

use crate::array::Array2D;
use crate::core::*;
use crate::graph::Graph;
use crate::maze::Maze;

/// Cells of a found path, from the end cell back towards the start cell.
///
/// The start cell itself is never part of the path.
pub type Path = Vec<Cell>;

/// Per cell search distance plus one, `0` marks cells that were never reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMap(Array2D<u32>);

impl DistanceMap {
    pub fn new(size: Dims) -> Self {
        Self(Array2D::new(0, size))
    }

    /// Raw stored value, `0` for unvisited or out of bounds cells.
    pub fn get(&self, cell: Cell) -> u32 {
        self.0.get(cell).copied().unwrap_or(0)
    }

    /// Number of steps from the start, `None` if the cell was not reached.
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.get(cell).checked_sub(1)
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.get(cell) != 0
    }

    pub fn visited_count(&self) -> usize {
        self.0.iter().filter(|&&d| d != 0).count()
    }

    fn set(&mut self, cell: Cell, value: u32) {
        self.0[cell] = value;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub path: Path,
    pub distances: DistanceMap,
}

impl Solution {
    /// Length of the shortest path in steps.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }
}

/// Runs BFS from `start` until `end` is dequeued.
///
/// Returns `None` when `end` can't be reached through non-wall cells.
pub fn bfs(maze: &Maze, graph: &Graph, start: Cell, end: Cell) -> Option<DistanceMap> {
    let mut distances = DistanceMap::new(maze.size());
    let mut queue = VecDeque::with_capacity(maze.size().product());

    distances.set(start, 1);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            log::debug!(
                "Reached {:?} after visiting {} cells",
                end,
                distances.visited_count()
            );
            return Some(distances);
        }

        let next = distances.get(current) + 1;
        for &neighbor in graph.neighbors(current) {
            if maze.is_in_bounds(neighbor)
                && !maze.is_wall(neighbor)
                && !distances.is_visited(neighbor)
            {
                distances.set(neighbor, next);
                queue.push_back(neighbor);
            }
        }
    }

    log::debug!(
        "No path from {:?} to {:?}, visited {} cells",
        start,
        end,
        distances.visited_count()
    );
    None
}

/// Walks back from `end` to `start`, always taking the first neighbor one step closer to the
/// start.
///
/// `distances` must come from a successful [`bfs`] with the same `start` and `end`.
pub fn reconstruct(graph: &Graph, distances: &DistanceMap, start: Cell, end: Cell) -> Path {
    let mut path = Path::with_capacity(distances.distance(end).unwrap_or(0) as usize);
    let mut current = end;

    while current != start {
        path.push(current);

        let wanted = match distances.distance(current) {
            Some(wanted) if wanted > 0 => wanted,
            _ => {
                log::warn!("Cell {:?} is not reachable from {:?}", current, start);
                break;
            }
        };
        match graph
            .neighbors(current)
            .iter()
            .find(|&&n| distances.get(n) == wanted)
        {
            Some(&previous) => current = previous,
            None => {
                log::warn!("Path reconstruction got stuck at {:?}", current);
                break;
            }
        }
    }

    path
}

/// Searches the shortest path without touching the maze.
pub fn find_path(maze: &Maze, graph: &Graph, start: Cell, end: Cell) -> Option<Solution> {
    let distances = bfs(maze, graph, start, end)?;
    let path = reconstruct(graph, &distances, start, end);
    Some(Solution { path, distances })
}

/// Finds the shortest path and marks it in the maze.
///
/// Returns `false` and leaves the maze untouched if there is no path.
pub fn solve(maze: &mut Maze, graph: &Graph, start: Cell, end: Cell) -> bool {
    match find_path(maze, graph, start, end) {
        Some(solution) => {
            maze.mark_path(&solution.path);
            true
        }
        None => false,
    }
}

/// Solves a maze between its own start and end cells.
///
/// Keeps the graph around so repeated solves of the same maze don't rebuild it.
#[derive(Debug, Clone)]
pub struct Solver {
    graph: Graph,
}

impl Solver {
    pub fn new(maze: &Maze) -> Self {
        Self {
            graph: Graph::build(maze.size()),
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Rebuilds the graph when the maze changed size.
    pub fn update(&mut self, maze: &Maze) {
        if self.graph.size() != maze.size() {
            self.graph = Graph::build(maze.size());
        }
    }

    pub fn find_path(&self, maze: &Maze) -> Option<Solution> {
        find_path(maze, &self.graph, maze.start(), maze.end())
    }

    pub fn solve(&self, maze: &mut Maze) -> bool {
        let (start, end) = (maze.start(), maze.end());
        solve(maze, &self.graph, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::CellState;

    fn maze(rows: &[&[u8]], start: Cell, end: Cell) -> Maze {
        Maze::from_rows(rows.iter().map(|r| r.to_vec()).collect(), start, end).unwrap()
    }

    #[test]
    fn open_grid() {
        let mut m = maze(&[&[0, 0, 0], &[0, 0, 0], &[0, 0, 0]], Cell(0, 0), Cell(2, 2));
        let graph = Graph::build(m.size());

        assert!(solve(&mut m, &graph, Cell(0, 0), Cell(2, 2)));
        assert_eq!(m.path_len(), 4);
        assert_eq!(m.get(Cell(2, 2)), Some(CellState::Path));
        assert_eq!(m.get(Cell(0, 0)), Some(CellState::Open));
    }

    #[test]
    fn path_length_matches_distance() {
        let m = maze(
            &[
                &[0, 1, 0, 0, 0],
                &[0, 1, 0, 1, 0],
                &[0, 0, 0, 1, 0],
                &[1, 1, 1, 1, 0],
            ],
            Cell(0, 0),
            Cell(3, 4),
        );
        let graph = Graph::build(m.size());
        let solution = find_path(&m, &graph, m.start(), m.end()).unwrap();

        assert_eq!(solution.distances.distance(m.end()), Some(11));
        assert_eq!(solution.len(), 11);
        assert_eq!(solution.path.first(), Some(&Cell(3, 4)));
        assert!(!solution.path.contains(&m.start()));
        for pair in solution.path.windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1);
        }
    }

    #[test]
    fn wall_row_blocks() {
        let mut m = maze(&[&[0, 0, 0], &[1, 1, 1], &[0, 0, 0]], Cell(0, 0), Cell(2, 2));
        let before = m.clone();
        let graph = Graph::build(m.size());

        assert!(!solve(&mut m, &graph, Cell(0, 0), Cell(2, 2)));
        assert_eq!(m, before);
    }

    #[test]
    fn disconnected_regions() {
        let mut m = maze(
            &[&[0, 0, 1, 0], &[0, 0, 1, 0], &[1, 1, 1, 0]],
            Cell(0, 0),
            Cell(2, 3),
        );
        let before = m.clone();

        assert!(!Solver::new(&m).solve(&mut m));
        assert_eq!(m, before);
    }

    #[test]
    fn start_is_end() {
        let mut m = maze(&[&[0, 0], &[0, 0]], Cell(1, 0), Cell(1, 0));
        let graph = Graph::build(m.size());

        assert!(solve(&mut m, &graph, Cell(1, 0), Cell(1, 0)));
        assert_eq!(m.path_len(), 0);
    }

    #[test]
    fn walled_end_is_unreachable() {
        let m = maze(&[&[0, 0], &[0, 1]], Cell(0, 0), Cell(1, 1));
        assert!(Solver::new(&m).find_path(&m).is_none());
    }

    #[test]
    fn marked_path_is_traversable() {
        let mut m = maze(&[&[0, 0, 0]], Cell(0, 0), Cell(0, 2));
        let solver = Solver::new(&m);

        assert!(solver.solve(&mut m));
        assert!(solver.solve(&mut m));
        assert_eq!(m.path_len(), 2);
    }

    #[test]
    fn tie_break_follows_direction_order() {
        // Both (0, 1) and (1, 0) lead back to the start, Up is checked before Left.
        let m = maze(&[&[0, 0], &[0, 0]], Cell(0, 0), Cell(1, 1));
        let solution = Solver::new(&m).find_path(&m).unwrap();

        assert_eq!(solution.path, vec![Cell(1, 1), Cell(0, 1)]);
    }

    #[test]
    fn distances() {
        let m = maze(&[&[0, 0, 0], &[0, 1, 0], &[0, 0, 0]], Cell(0, 0), Cell(2, 2));
        let d = bfs(&m, &Graph::build(m.size()), m.start(), m.end()).unwrap();

        assert_eq!(d.get(Cell(0, 0)), 1);
        assert_eq!(d.distance(Cell(0, 2)), Some(2));
        assert_eq!(d.distance(Cell(1, 1)), None);
        assert_eq!(d.distance(Cell(2, 2)), Some(4));
    }

    #[test]
    fn random_grids() {
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let size = Dims(rng.gen_range(1..8), rng.gen_range(1..8));
            let rows = (0..size.0)
                .map(|_| (0..size.1).map(|_| rng.gen_bool(0.3) as u8).collect())
                .collect();
            let start = Cell(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
            let end = Cell(rng.gen_range(0..size.0), rng.gen_range(0..size.1));
            let mut m = Maze::from_rows(rows, start, end).unwrap();
            m.set(start, CellState::Open);

            let before = m.clone();
            let graph = Graph::build(size);
            match bfs(&m, &graph, start, end) {
                Some(d) => {
                    let expected = d.distance(end).unwrap() as usize;
                    assert!(expected >= start.manhattan(end));
                    assert!(solve(&mut m, &graph, start, end));
                    assert_eq!(m.path_len(), expected);
                }
                None => {
                    assert!(!solve(&mut m, &graph, start, end));
                    assert_eq!(m, before);
                }
            }
        }
    }

    #[test]
    fn solver_follows_resize() {
        let small = maze(&[&[0, 0]], Cell(0, 0), Cell(0, 1));
        let mut solver = Solver::new(&small);
        assert_eq!(solver.graph().size(), Dims(1, 2));

        let big = Maze::empty(Dims(3, 3), Cell(0, 0), Cell(2, 2)).unwrap();
        solver.update(&big);
        assert_eq!(solver.graph().size(), Dims(3, 3));
        assert_eq!(solver.find_path(&big).map(|s| s.len()), Some(4));
    }
}
