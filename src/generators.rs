use log::debug;
use rand::Rng;

use crate::cells::{CellIdSmallVec, CompassPrimary};
use crate::grid::{CellLinkError, Grid};

/// Apply the binary tree maze generation algorithm to a grid
/// It works simply by visiting each cell in the grid and choosing to carve a passage
/// either North or East.
/// The two directions are constant for the entire maze generation process, otherwise we'd
/// generate many areas with no way in or out and not a perfect maze.
/// The north-east corner cell has neither neighbour and carves nothing, which leaves the whole
/// top row and the whole east column as unbroken corridors.
pub fn binary_tree<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), CellLinkError> {

    const CARVE_DIRECTIONS: [CompassPrimary; 2] = [CompassPrimary::North, CompassPrimary::East];

    for cell in grid.iter() {

        // Get the neighbours in the carving directions
        let neighbours = grid.neighbours_at_directions(cell, &CARVE_DIRECTIONS)
                             .into_iter()
                             .flatten()
                             .collect::<CellIdSmallVec>();

        // Unless there are no neighbours, randomly choose a neighbour to connect.
        if !neighbours.is_empty() {
            let link_cell = neighbours[rng.gen_range(0..neighbours.len())];
            grid.link(cell, link_cell)?;
        }
    }

    debug!("binary tree: {}x{} grid, {} passages carved",
           grid.rows().0, grid.columns().0, grid.links_count());
    Ok(())
}

/// Apply the sidewinder maze generation algorithm to the grid
/// Sidewinder visits the rows from the western column eastwards. Each cell either carves
/// East, extending the current run of horizontally connected cells, or closes the run out by
/// carving North from a random member of the run.
/// A cell on the eastern boundary always closes its run. The top row has nothing to the north
/// so it never closes early and ends up as one long corridor.
/// This algorithm will display a vertical bias, with most passages leading north.
pub fn sidewinder<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Result<(), CellLinkError> {

    for row in grid.iter_row() {
        let mut run = Vec::with_capacity(row.len());

        for cell in row {
            run.push(cell);

            let east_neighbour = grid.neighbour_at_direction(cell, CompassPrimary::East);
            let at_northern_boundary =
                grid.neighbour_at_direction(cell, CompassPrimary::North).is_none();

            let should_close_out = match east_neighbour {
                None => true,
                Some(_) => !at_northern_boundary && rng.gen(), // coin flip
            };

            match east_neighbour {
                Some(east) if !should_close_out => grid.link(cell, east)?,
                _ => {
                    let run_member = run[rng.gen_range(0..run.len())];
                    if let Some(north) = grid.neighbour_at_direction(run_member,
                                                                     CompassPrimary::North) {
                        grid.link(run_member, north)?;
                    }
                    run.clear();
                }
            }
        }
    }

    debug!("sidewinder: {}x{} grid, {} passages carved",
           grid.rows().0, grid.columns().0, grid.links_count());
    Ok(())
}
