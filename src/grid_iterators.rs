use std::fmt;

use crate::cells::CellId;
use crate::units::{ColumnsCount, RowsCount};

/// Row-major iterator over every cell of a grid.
///
/// Holds only the grid's dimensions, so the grid can be mutated while iterating.
#[derive(Copy, Clone)]
pub struct CellIter {
    current_cell_number: usize,
    cells_count: usize,
}

impl CellIter {
    pub(crate) fn new(rows: RowsCount, columns: ColumnsCount) -> CellIter {
        CellIter {
            current_cell_number: 0,
            cells_count: rows.0 * columns.0,
        }
    }
}

impl fmt::Debug for CellIter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f,
               "CellIter :: current_cell_number: {:?}, cells_count: {:?}",
               self.current_cell_number,
               self.cells_count)
    }
}

impl ExactSizeIterator for CellIter {} // default impl using size_hint()
impl Iterator for CellIter {
    type Item = CellId;
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_cell_number < self.cells_count {
            let cell = CellId(self.current_cell_number);
            self.current_cell_number += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.cells_count - self.current_cell_number;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum BatchIterType {
    Row,
    Column,
}

/// Iterator yielding whole rows (west to east) or whole columns (north to south).
#[derive(Debug, Copy, Clone)]
pub struct BatchIter {
    iter_type: BatchIterType,
    current_index: usize,
    rows: RowsCount,
    columns: ColumnsCount,
}

impl BatchIter {
    pub(crate) fn rows(rows: RowsCount, columns: ColumnsCount) -> BatchIter {
        BatchIter::new(BatchIterType::Row, rows, columns)
    }

    pub(crate) fn columns(rows: RowsCount, columns: ColumnsCount) -> BatchIter {
        BatchIter::new(BatchIterType::Column, rows, columns)
    }

    fn new(iter_type: BatchIterType, rows: RowsCount, columns: ColumnsCount) -> BatchIter {
        BatchIter {
            iter_type,
            current_index: 0,
            rows,
            columns,
        }
    }

    fn batches_count(&self) -> usize {
        match self.iter_type {
            BatchIterType::Row => self.rows.0,
            BatchIterType::Column => self.columns.0,
        }
    }
}

impl ExactSizeIterator for BatchIter {} // default impl using size_hint()
impl Iterator for BatchIter {
    type Item = Vec<CellId>;
    fn next(&mut self) -> Option<Self::Item> {

        if self.current_index >= self.batches_count() {
            return None;
        }

        let ColumnsCount(width) = self.columns;
        let RowsCount(height) = self.rows;
        let batch = self.current_index;
        let cells = match self.iter_type {
            BatchIterType::Row => (0..width).map(|column| CellId(batch * width + column)).collect(),
            BatchIterType::Column => (0..height).map(|row| CellId(row * width + batch)).collect(),
        };
        self.current_index += 1;
        Some(cells)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower_bound = self.batches_count() - self.current_index;
        let upper_bound = lower_bound;
        (lower_bound, Some(upper_bound))
    }
}
