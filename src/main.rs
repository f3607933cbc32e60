use docopt::Docopt;
use glyph_mazes::{
    generators,
    grid::Grid,
    grid_displays::{render_text, TextScale},
    units::{ColumnsCount, RowsCount},
};
use log::info;
use rand::{Rng, SeedableRng};
use rand_xorshift::XorShiftRng;
use serde_derive::Deserialize;

const USAGE: &str = "Mazes

Usage:
    mazes_driver -h | --help
    mazes_driver (binary|sidewinder) [--rows=<r>] [--columns=<c>] [--cell-width=<w>] [--cell-height=<h>] [--seed=<s>]

Options:
    -h --help            Show this screen.
    --rows=<r>           Number of rows in the maze [default: 10].
    --columns=<c>        Number of columns in the maze [default: 10].
    --cell-width=<w>     Wall glyphs drawn across the top of each cell [default: 3].
    --cell-height=<h>    Text lines drawn for the inside of each cell [default: 1].
    --seed=<s>           Seed for the maze's random choices. A random seed is used and logged if not given.
";
#[derive(Debug, Deserialize)]
struct MazeArgs {
    cmd_binary: bool,
    cmd_sidewinder: bool,
    flag_rows: usize,
    flag_columns: usize,
    flag_cell_width: usize,
    flag_cell_height: usize,
    flag_seed: Option<u64>,
}

// We'll put our errors in an `errors` module, and other modules in
// this crate will `use errors::*;` to get access to everything
// `error_chain!` creates.
mod errors {
    use error_chain::*;
    error_chain! {

        foreign_links {
            CellLinkFailure(::glyph_mazes::grid::CellLinkError);
        }
    }
}
use crate::errors::*;

fn main() -> Result<()> {

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: MazeArgs = Docopt::new(USAGE)
        .and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let (rows, columns, scale) = validated_dimensions(&args)?;

    let seed = args.flag_seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!("{} maze, {} rows by {} columns, seed {}",
          algorithm_name(&args), rows.0, columns.0, seed);

    let mut maze_grid = Grid::new(rows, columns);
    let mut rng = XorShiftRng::seed_from_u64(seed);
    generate_maze_on_grid(&mut maze_grid, &args, &mut rng)
        .chain_err(|| format!("Failed to generate a {} maze", algorithm_name(&args)))?;

    print!("{}", render_text(&maze_grid, scale));

    Ok(())
}

/// Grid dimensions and render scale from the arguments, or an error if the maze cannot be drawn.
fn validated_dimensions(args: &MazeArgs) -> Result<(RowsCount, ColumnsCount, TextScale)> {
    let (rows, columns) = (RowsCount(args.flag_rows), ColumnsCount(args.flag_columns));
    if !Grid::is_valid_size(rows, columns) {
        return Err(format!("Grid dimensions too large: [{}, {}]", rows.0, columns.0).into());
    }
    if args.flag_cell_width < 1 || args.flag_cell_height < 1 {
        return Err(format!("Cell width and height must be at least 1: [{}, {}]",
                           args.flag_cell_width,
                           args.flag_cell_height)
                       .into());
    }
    Ok((rows, columns, TextScale::new(args.flag_cell_width, args.flag_cell_height)))
}

fn generate_maze_on_grid(maze_grid: &mut Grid, maze_args: &MazeArgs, rng: &mut XorShiftRng) -> Result<()> {
    if maze_args.cmd_binary {
        generators::binary_tree(maze_grid, rng)?;
    } else if maze_args.cmd_sidewinder {
        generators::sidewinder(maze_grid, rng)?;
    }
    Ok(())
}

fn algorithm_name(maze_args: &MazeArgs) -> &'static str {
    if maze_args.cmd_binary {
        "binary tree"
    } else {
        "sidewinder"
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn parse(argv: &[&str]) -> MazeArgs {
        Docopt::new(USAGE)
            .and_then(|d| d.argv(argv.iter()).deserialize())
            .expect("arguments should parse")
    }

    #[test]
    fn defaults() {
        let args = parse(&["mazes_driver", "sidewinder"]);
        assert!(args.cmd_sidewinder && !args.cmd_binary);
        assert_eq!(args.flag_seed, None);

        let (rows, columns, scale) = validated_dimensions(&args).expect("valid defaults");
        assert_eq!((rows, columns), (RowsCount(10), ColumnsCount(10)));
        assert_eq!(scale, TextScale::default());
    }

    #[test]
    fn explicit_options() {
        let args = parse(&["mazes_driver", "binary", "--rows=4", "--columns=7", "--cell-width=2",
                           "--cell-height=3", "--seed=42"]);
        assert!(args.cmd_binary);
        assert_eq!(args.flag_seed, Some(42));

        let (rows, columns, scale) = validated_dimensions(&args).expect("valid options");
        assert_eq!((rows, columns), (RowsCount(4), ColumnsCount(7)));
        assert_eq!(scale, TextScale::new(2, 3));
    }

    #[test]
    fn zero_cell_size_is_an_error() {
        let zero_width = parse(&["mazes_driver", "binary", "--cell-width=0"]);
        let zero_height = parse(&["mazes_driver", "binary", "--cell-height=0"]);
        for args in &[zero_width, zero_height] {
            let message = validated_dimensions(args).expect_err("zero cell size").to_string();
            assert!(message.starts_with("Cell width and height must be at least 1"));
        }
    }

    #[test]
    fn oversized_grid_is_an_error() {
        let huge = usize::MAX.to_string();
        let rows_flag = format!("--rows={}", huge);
        let columns_flag = format!("--columns={}", huge);
        let args = parse(&["mazes_driver", "sidewinder", &rows_flag, &columns_flag]);
        let message = validated_dimensions(&args).expect_err("oversized grid").to_string();
        assert!(message.starts_with("Grid dimensions too large"));
    }

    #[test]
    fn generation_follows_the_command() {
        let args = parse(&["mazes_driver", "binary", "--rows=3", "--columns=3"]);
        let mut g = Grid::new(RowsCount(3), ColumnsCount(3));
        let mut rng = XorShiftRng::seed_from_u64(9);
        generate_maze_on_grid(&mut g, &args, &mut rng).expect("generation failed");
        assert_eq!(g.links_count(), 8);
        assert_eq!(algorithm_name(&args), "binary tree");
    }
}
