use crate::cells::{Cell, CellId, CellIdOptionSmallVec, CellIdSmallVec, CompassPrimary};
use crate::grid_iterators::{BatchIter, CellIter};
use crate::units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount};

use petgraph::graph::{DefaultIx, DiGraph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use rand::Rng;
use std::error::Error;
use std::fmt;

/// A rectangular grid of square cells.
///
/// The cells are the nodes of a directed graph. Each edge is one entry of a cell's link set,
/// so a passage between two cells is a pair of opposing edges.
pub struct Grid {
    graph: DiGraph<Cell, ()>,
    rows: RowsCount,
    columns: ColumnsCount,
}

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CellLinkError {
    InvalidCell,
}

impl fmt::Display for CellLinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CellLinkError::InvalidCell => write!(f, "cell does not belong to this grid"),
        }
    }
}

impl Error for CellLinkError {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Grid :: graph: {:?}, rows: {:?}, columns: {:?}",
               self.graph, self.rows, self.columns)
    }
}

impl Grid {
    /// Build a grid with every cell wired to its North, South, East and West neighbours and
    /// no passages carved.
    ///
    /// Panics if the grid has more cells than the link graph can index.
    pub fn new(rows: RowsCount, columns: ColumnsCount) -> Grid {

        let cells_count = Grid::cells_count(rows, columns)
            .unwrap_or_else(|| panic!("Grid dimensions invalid: [{}, {}]", rows.0, columns.0));

        // A perfect maze has one passage (two link entries) fewer than it has cells.
        let edges_count_hint = 2 * cells_count.saturating_sub(1);

        let mut grid = Grid {
            graph: DiGraph::with_capacity(cells_count, edges_count_hint),
            rows,
            columns,
        };
        for index in 0..cells_count {
            let cell = Cell::new(RowIndex(index / columns.0), ColumnIndex(index % columns.0));
            let _ = grid.graph.add_node(cell);
        }
        grid.configure_cells();

        grid
    }

    /// Can a grid with these dimensions be built?
    pub fn is_valid_size(rows: RowsCount, columns: ColumnsCount) -> bool {
        Grid::cells_count(rows, columns).is_some()
    }

    fn cells_count(rows: RowsCount, columns: ColumnsCount) -> Option<usize> {
        // Rendering walks the lattice with signed coordinates.
        let max_dimension = isize::MAX as usize;
        if rows.0 > max_dimension || columns.0 > max_dimension {
            return None;
        }
        rows.0
            .checked_mul(columns.0)
            .filter(|&count| count < <DefaultIx as IndexType>::max().index())
    }

    fn configure_cells(&mut self) {
        for cell_id in self.iter() {
            let (row, column) = self.signed_row_column(cell_id);
            for dir in CompassPrimary::ALL.iter() {
                let (row_step, column_step) = dir.offset();
                let neighbour = self.at(row + row_step, column + column_step);
                if let Some(cell) = self.graph.node_weight_mut(NodeIndex::new(cell_id.0)) {
                    cell.set_neighbour(*dir, neighbour);
                }
            }
        }
    }

    #[inline]
    fn signed_row_column(&self, cell: CellId) -> (isize, isize) {
        let ColumnsCount(width) = self.columns;
        ((cell.0 / width) as isize, (cell.0 % width) as isize)
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.rows.0 * self.columns.0
    }

    #[inline]
    pub fn rows(&self) -> RowsCount {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> ColumnsCount {
        self.columns
    }

    /// Number of passages, counting a pair of opposing link entries once.
    /// A cell linked to itself holds a single entry that counts as a whole passage.
    pub fn links_count(&self) -> usize {
        let self_links = self.graph
            .edge_references()
            .filter(|edge| edge.source() == edge.target())
            .count();
        (self.graph.edge_count() + self_links) / 2
    }

    /// The cell at a row and column, or `None` for any coordinate outside of the grid,
    /// negative ones included.
    pub fn at(&self, row: isize, column: isize) -> Option<CellId> {
        if row < 0 || column < 0 {
            return None;
        }
        let (row, column) = (row as usize, column as usize);
        if row < self.rows.0 && column < self.columns.0 {
            Some(CellId(row * self.columns.0 + column))
        } else {
            None
        }
    }

    #[inline]
    pub fn cell(&self, cell: CellId) -> Option<&Cell> {
        self.node_index(cell).and_then(|node| self.graph.node_weight(node))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<CellId> {
        let size = self.size();
        if size == 0 {
            None
        } else {
            Some(CellId(rng.gen_range(0..size)))
        }
    }

    /// Add `b` to the link set of `a` without touching the link set of `b`.
    /// Only the handles are checked, `a` may be linked to itself.
    ///
    /// Used alone this leaves the passage half made. Prefer `link`.
    pub fn link_one_way(&mut self, a: CellId, b: CellId) -> Result<(), CellLinkError> {
        let (a_index, b_index) = self.link_endpoints(a, b)?;
        let _ = self.graph.update_edge(a_index, b_index, ());
        Ok(())
    }

    /// Link two cells with a passage in both directions.
    ///
    /// The cells need not be adjacent. Linking an already linked pair changes nothing.
    pub fn link(&mut self, a: CellId, b: CellId) -> Result<(), CellLinkError> {
        self.link_one_way(a, b)?;
        self.link_one_way(b, a)
    }

    /// Remove `b` from the link set of `a`. Returns true if there was an entry to remove.
    pub fn unlink_one_way(&mut self, a: CellId, b: CellId) -> bool {
        if let (Some(a_index), Some(b_index)) = (self.node_index(a), self.node_index(b)) {
            if let Some(edge_index) = self.graph.find_edge(a_index, b_index) {
                // This will invalidate the last edge index in the graph, which is fine as we
                // are not storing them for any reason.
                let _ = self.graph.remove_edge(edge_index);
                return true;
            }
        }

        false
    }

    /// Unlink two cells in both directions. Returns true if any link entry was removed.
    pub fn unlink(&mut self, a: CellId, b: CellId) -> bool {
        let forward = self.unlink_one_way(a, b);
        let backward = self.unlink_one_way(b, a);
        forward || backward
    }

    /// Is `b` in the link set of `a`? False when `b` is absent or either cell is not in the grid.
    pub fn is_linked<B: Into<Option<CellId>>>(&self, a: CellId, b: B) -> bool {
        let b_index_opt = b.into().and_then(|b| self.node_index(b));
        match (self.node_index(a), b_index_opt) {
            (Some(a_index), Some(b_index)) => self.graph.find_edge(a_index, b_index).is_some(),
            _ => false,
        }
    }

    pub fn is_neighbour_linked(&self, cell: CellId, direction: CompassPrimary) -> bool {
        self.is_linked(cell, self.neighbour_at_direction(cell, direction))
    }

    /// Cells that are linked to a particular cell by a passage, in row-major order.
    pub fn links(&self, cell: CellId) -> Option<CellIdSmallVec> {
        self.node_index(cell).map(|node| {
            let mut linked_cells = self.graph
                .neighbors_directed(node, Direction::Outgoing)
                .map(|linked_node| CellId(linked_node.index()))
                .collect::<CellIdSmallVec>();
            linked_cells.sort();
            linked_cells
        })
    }

    /// Cells that are to the North, South, East or West (in that order) of a cell, but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self, cell: CellId) -> CellIdSmallVec {
        self.cell(cell)
            .map(Cell::neighbours)
            .unwrap_or_else(CellIdSmallVec::new)
    }

    pub fn neighbours_at_directions(&self,
                                    cell: CellId,
                                    dirs: &[CompassPrimary])
                                    -> CellIdOptionSmallVec {
        dirs.iter()
            .map(|direction| self.neighbour_at_direction(cell, *direction))
            .collect()
    }

    #[inline]
    pub fn neighbour_at_direction(&self,
                                  cell: CellId,
                                  direction: CompassPrimary)
                                  -> Option<CellId> {
        self.cell(cell).and_then(|c| c.neighbour(direction))
    }

    #[inline]
    pub fn iter(&self) -> CellIter {
        CellIter::new(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_row(&self) -> BatchIter {
        BatchIter::rows(self.rows, self.columns)
    }

    #[inline]
    pub fn iter_column(&self) -> BatchIter {
        BatchIter::columns(self.rows, self.columns)
    }

    fn link_endpoints(&self,
                      a: CellId,
                      b: CellId)
                      -> Result<(NodeIndex, NodeIndex), CellLinkError> {
        match (self.node_index(a), self.node_index(b)) {
            (Some(a_index), Some(b_index)) => Ok((a_index, b_index)),
            _ => Err(CellLinkError::InvalidCell),
        }
    }

    /// Convert a cell handle into a petgraph node index.
    /// Returns None if the handle is out of range for this grid.
    #[inline]
    fn node_index(&self, cell: CellId) -> Option<NodeIndex> {
        if cell.0 < self.graph.node_count() {
            Some(NodeIndex::new(cell.0))
        } else {
            None
        }
    }
}
