use smallvec::SmallVec;

use crate::array::Array2D;
use crate::core::*;
use crate::maze::Direction;

pub type Neighbors = SmallVec<[Cell; 4]>;

/// 4-connected adjacency of a grid, keyed directly by cell.
///
/// Walls are not part of the graph, they are checked during traversal, so the graph only has to
/// be rebuilt when the maze dimensions change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Array2D<Neighbors>,
}

impl Graph {
    /// Builds the adjacency for a `rows` x `cols` grid.
    ///
    /// Neighbors of every cell are stored in [`Direction::get_in_order`] order.
    pub fn build(size: Dims) -> Self {
        let adjacency = Array2D::from_fn(size, |cell| {
            Direction::get_in_order()
                .into_iter()
                .filter_map(|dir| dir.step(cell))
                .filter(|&neighbor| size.contains(neighbor))
                .collect()
        });

        log::debug!("Built graph for {:?} grid", size);

        Graph { adjacency }
    }

    pub fn size(&self) -> Dims {
        self.adjacency.size()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.size().contains(cell)
    }

    /// Neighbors of `cell`, empty if it lies outside of the graph.
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        self.adjacency.get(cell).map(|n| n.as_slice()).unwrap_or(&[])
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.adjacency.iter_pos()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|n| n.len()).sum::<usize>() / 2
    }
}

/// Shorthand for [`Graph::build`] taking rows and columns separately.
pub fn build_graph(rows: usize, cols: usize) -> Graph {
    Graph::build(Dims(rows, cols))
}
