use smallvec::SmallVec;
use std::fmt;
use crate::units::{ColumnIndex, RowIndex};

/// Handle to a cell owned by a `Grid`.
///
/// The wrapped value is the cell's row-major slot in the grid, so two handles are equal
/// exactly when they name the same cell.
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug, Ord, PartialOrd)]
pub struct CellId(pub(crate) usize);

impl CellId {
    /// The row-major index of the cell in its grid.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

pub type CellIdSmallVec = SmallVec<[CellId; 4]>;
pub type CellIdOptionSmallVec = SmallVec<[Option<CellId>; 4]>;

#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub enum CompassPrimary {
    North,
    South,
    East,
    West,
}

impl CompassPrimary {
    /// All four directions in the order neighbours are reported.
    pub const ALL: [CompassPrimary; 4] = [CompassPrimary::North,
                                          CompassPrimary::South,
                                          CompassPrimary::East,
                                          CompassPrimary::West];

    pub fn opposite(self) -> CompassPrimary {
        match self {
            CompassPrimary::North => CompassPrimary::South,
            CompassPrimary::South => CompassPrimary::North,
            CompassPrimary::East => CompassPrimary::West,
            CompassPrimary::West => CompassPrimary::East,
        }
    }

    /// (row, column) step taken when moving one cell in this direction.
    pub(crate) fn offset(self) -> (isize, isize) {
        match self {
            CompassPrimary::North => (-1, 0),
            CompassPrimary::South => (1, 0),
            CompassPrimary::East => (0, 1),
            CompassPrimary::West => (0, -1),
        }
    }
}

/// A square cell in a rectangular grid.
///
/// The adjacency handles are filled in once by the grid when it is built. Passages (links)
/// are not stored here, the grid keeps them in its link graph.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct Cell {
    row: RowIndex,
    column: ColumnIndex,
    north: Option<CellId>,
    south: Option<CellId>,
    east: Option<CellId>,
    west: Option<CellId>,
}

impl Cell {
    pub(crate) fn new(row: RowIndex, column: ColumnIndex) -> Cell {
        Cell {
            row,
            column,
            north: None,
            south: None,
            east: None,
            west: None,
        }
    }

    #[inline]
    pub fn row(&self) -> RowIndex {
        self.row
    }

    #[inline]
    pub fn column(&self) -> ColumnIndex {
        self.column
    }

    /// The adjacent cell in a direction, `None` at the grid boundary.
    pub fn neighbour(&self, direction: CompassPrimary) -> Option<CellId> {
        match direction {
            CompassPrimary::North => self.north,
            CompassPrimary::South => self.south,
            CompassPrimary::East => self.east,
            CompassPrimary::West => self.west,
        }
    }

    /// Cells that are to the North, South, East or West of this cell (in that order), but not
    /// necessarily linked by a passage.
    pub fn neighbours(&self) -> CellIdSmallVec {
        CompassPrimary::ALL
            .iter()
            .filter_map(|dir| self.neighbour(*dir))
            .collect()
    }

    pub(crate) fn set_neighbour(&mut self, direction: CompassPrimary, neighbour: Option<CellId>) {
        let slot = match direction {
            CompassPrimary::North => &mut self.north,
            CompassPrimary::South => &mut self.south,
            CompassPrimary::East => &mut self.east,
            CompassPrimary::West => &mut self.west,
        };
        *slot = neighbour;
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn fresh_cell_has_no_neighbours() {
        let c = Cell::new(RowIndex(2), ColumnIndex(5));
        assert_eq!(c.row(), RowIndex(2));
        assert_eq!(c.column(), ColumnIndex(5));
        assert!(c.neighbours().is_empty());
        for dir in CompassPrimary::ALL.iter() {
            assert_eq!(c.neighbour(*dir), None);
        }
    }

    #[test]
    fn neighbours_are_reported_north_south_east_west() {
        let mut c = Cell::new(RowIndex(1), ColumnIndex(1));
        c.set_neighbour(CompassPrimary::West, Some(CellId(3)));
        c.set_neighbour(CompassPrimary::East, Some(CellId(5)));
        c.set_neighbour(CompassPrimary::North, Some(CellId(1)));
        assert_eq!(&*c.neighbours(), &[CellId(1), CellId(5), CellId(3)]);

        c.set_neighbour(CompassPrimary::South, Some(CellId(7)));
        assert_eq!(&*c.neighbours(), &[CellId(1), CellId(7), CellId(5), CellId(3)]);
    }

    #[test]
    fn opposite_directions() {
        for dir in CompassPrimary::ALL.iter() {
            assert_ne!(dir.opposite(), *dir);
            assert_eq!(dir.opposite().opposite(), *dir);
            let (dr, dc) = dir.offset();
            let (odr, odc) = dir.opposite().offset();
            assert_eq!((dr + odr, dc + odc), (0, 0));
        }
    }
}
