use itertools::repeat_n;
use log::{log_enabled, trace, Level};
use std::fmt;

use crate::cells::{CellId, CompassPrimary};
use crate::grid::Grid;

// Unicode light box drawing characters
const HORIZONTAL: char = '\u{2500}'; // ─
const VERTICAL: char = '\u{2502}'; // │
const CORNER_DOWN_RIGHT: char = '\u{250c}'; // ┌
const CORNER_DOWN_LEFT: char = '\u{2510}'; // ┐
const CORNER_UP_RIGHT: char = '\u{2514}'; // └
const CORNER_UP_LEFT: char = '\u{2518}'; // ┘
const VERTICAL_RIGHT: char = '\u{251c}'; // ├
const VERTICAL_LEFT: char = '\u{2524}'; // ┤
const HORIZONTAL_DOWN: char = '\u{252c}'; // ┬
const HORIZONTAL_UP: char = '\u{2534}'; // ┴
const INTERSECTION: char = '\u{253c}'; // ┼

const WALL_UP: usize = 1;
const WALL_DOWN: usize = 2;
const WALL_LEFT: usize = 4;
const WALL_RIGHT: usize = 8;

/// Corner glyph for every combination of the wall bits above.
const CORNER_GLYPHS: [char; 16] = [
    ' ',               // Nothing
    VERTICAL,          // Up
    VERTICAL,          // Down
    VERTICAL,          // Down | Up
    HORIZONTAL,        // Left
    CORNER_UP_LEFT,    // Left | Up
    CORNER_DOWN_LEFT,  // Left | Down
    VERTICAL_LEFT,     // Left | Down | Up
    HORIZONTAL,        // Right
    CORNER_UP_RIGHT,   // Right | Up
    CORNER_DOWN_RIGHT, // Right | Down
    VERTICAL_RIGHT,    // Right | Down | Up
    HORIZONTAL,        // Right | Left
    HORIZONTAL_UP,     // Right | Left | Up
    HORIZONTAL_DOWN,   // Right | Left | Down
    INTERSECTION,      // Right | Left | Down | Up
];

/// How many glyphs wide and how many lines tall a cell is drawn.
#[derive(Eq, PartialEq, Copy, Clone, Debug)]
pub struct TextScale {
    horizontal: usize,
    vertical: usize,
}

impl TextScale {
    /// Panics if either size is below 1, there is no sensible way to draw a cell with no room.
    pub fn new(horizontal: usize, vertical: usize) -> TextScale {
        if horizontal < 1 || vertical < 1 {
            panic!("Invalid grid size for text rendering: [{}, {}]", horizontal, vertical);
        }
        TextScale { horizontal, vertical }
    }

    #[inline]
    pub fn horizontal(&self) -> usize {
        self.horizontal
    }

    #[inline]
    pub fn vertical(&self) -> usize {
        self.vertical
    }
}

impl Default for TextScale {
    fn default() -> TextScale {
        TextScale::new(3, 1)
    }
}

/// Render a grid as lines of box drawing glyphs.
///
/// Every lattice point, one more than there are cells in each direction, gets a corner glyph
/// joining the walls that meet there. A run of wall or space glyphs follows each corner on the
/// top edge of a cell row, and `scale.vertical()` lines of cell interior follow each edge line
/// except the last.
pub fn render_text(grid: &Grid, scale: TextScale) -> String {

    // When drawing a horizontal line across cells, we use several horizontal glyphs in a row
    let horizontal_line = repeat_n(HORIZONTAL, scale.horizontal()).collect::<String>();
    let horizontal_space = repeat_n(' ', scale.horizontal()).collect::<String>();

    let rows = grid.rows().0 as isize;
    let columns = grid.columns().0 as isize;
    let mut output = String::new();

    // Loop inclusive of the row count to get the bottom edge
    for row in 0..=rows {
        let mut top_edge = String::new(); // The horizontal lines between cells
        let mut area = String::new(); // The contents of the cells

        // Loop inclusive of the column count to get the right edge
        for column in 0..=columns {
            let cell = grid.at(row, column);
            if log_enabled!(Level::Trace) {
                trace!("C[{},{}]: {{{}}}", row, column, link_summary(grid, cell));
            }

            let corner = upper_left_corner_glyph(grid, row, column);
            top_edge.push(corner);

            // Only draw the wall if the cell really is closed to the north, a right pointing
            // corner alone would also draw a wall above a cell that has a passage north.
            let open_north = cell.map_or(false, |c| grid.is_neighbour_linked(c, CompassPrimary::North));
            if points_right(corner) && !open_north {
                top_edge.push_str(&horizontal_line);
            } else {
                top_edge.push_str(&horizontal_space);
            }

            let open_west = cell.map_or(false, |c| grid.is_neighbour_linked(c, CompassPrimary::West));
            if points_down(corner) && !open_west {
                area.push(VERTICAL);
            } else {
                area.push(' ');
            }
            area.push_str(&horizontal_space);
        }

        output.push_str(&top_edge);
        output.push('\n');
        if row < rows {
            for _ in 0..scale.vertical() {
                output.push_str(&area);
                output.push('\n');
            }
        }
    }

    output
}

/// The glyph drawn at the upper left corner of the cell at (row, column), whether or not that
/// cell exists.
///
/// Four cells meet at the corner: upper-left, upper-right, lower-left and lower-right. A wall
/// runs from the corner towards any pair of those cells that is split, that is not linked or
/// with just one of the pair inside the grid.
fn upper_left_corner_glyph(grid: &Grid, row: isize, column: isize) -> char {
    let upper_left = grid.at(row - 1, column - 1);
    let upper_right = grid.at(row - 1, column);
    let lower_left = grid.at(row, column - 1);
    let lower_right = grid.at(row, column);

    let (up, left) = match upper_left {
        Some(ul) => (!grid.is_linked(ul, upper_right), !grid.is_linked(ul, lower_left)),
        None => (upper_right.is_some(), lower_left.is_some()),
    };
    let (down, right) = match lower_right {
        Some(lr) => (!grid.is_linked(lr, lower_left), !grid.is_linked(lr, upper_right)),
        None => (lower_left.is_some(), upper_right.is_some()),
    };

    corner_glyph(up, left, down, right)
}

fn corner_glyph(up: bool, left: bool, down: bool, right: bool) -> char {
    let mut index = 0;
    if up {
        index |= WALL_UP;
    }
    if down {
        index |= WALL_DOWN;
    }
    if left {
        index |= WALL_LEFT;
    }
    if right {
        index |= WALL_RIGHT;
    }
    CORNER_GLYPHS[index]
}

fn points_down(glyph: char) -> bool {
    match glyph {
        VERTICAL | CORNER_DOWN_RIGHT | CORNER_DOWN_LEFT | VERTICAL_RIGHT | VERTICAL_LEFT |
        HORIZONTAL_DOWN | INTERSECTION => true,
        _ => false,
    }
}

fn points_right(glyph: char) -> bool {
    match glyph {
        HORIZONTAL | CORNER_DOWN_RIGHT | CORNER_UP_RIGHT | VERTICAL_RIGHT | HORIZONTAL_DOWN |
        HORIZONTAL_UP | INTERSECTION => true,
        _ => false,
    }
}

/// Which compass directions a cell has passages in, e.g. "NE", or "nil" outside of the grid.
fn link_summary(grid: &Grid, cell: Option<CellId>) -> String {
    const LETTERS: [(CompassPrimary, char); 4] = [(CompassPrimary::North, 'N'),
                                                  (CompassPrimary::East, 'E'),
                                                  (CompassPrimary::West, 'W'),
                                                  (CompassPrimary::South, 'S')];
    match cell {
        Some(c) => LETTERS.iter()
                          .filter(|(dir, _)| grid.is_neighbour_linked(c, *dir))
                          .map(|(_, letter)| *letter)
                          .collect(),
        None => String::from("nil"),
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", render_text(self, TextScale::default()))
    }
}
