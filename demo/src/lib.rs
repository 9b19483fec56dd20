//! Command-line driver shared by the `hopgrid` binary and its tests.
//!
//! Picks a grid (the built-in maze, a file, or a random one), runs the
//! search engine once, and prints the annotated grid followed by the path.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use hopgrid_core::{Point, TerrainGrid};
use hopgrid_map::{GenConfig, GridGen, RenderStyle, format_path, load_grid, render, write_colored};
use hopgrid_paths::{SearchConfig, SearchError, TieBreak, search_with, validate_endpoints};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// The built-in maze: `0` open, `1` wall, `2` short wall.
pub const EXAMPLE_GRID: [[u8; 7]; 7] = [
    [1, 0, 0, 0, 1, 0, 0],
    [1, 1, 0, 0, 0, 1, 1],
    [0, 1, 0, 1, 2, 0, 0],
    [1, 1, 0, 1, 1, 2, 1],
    [0, 1, 0, 2, 0, 2, 0],
    [0, 1, 1, 1, 0, 1, 1],
    [0, 0, 0, 0, 0, 0, 0],
];
pub const EXAMPLE_START: Point = Point::new(0, 2);
pub const EXAMPLE_GOAL: Point = Point::new(6, 0);

#[derive(Parser, Debug, Default)]
#[command(name = "hopgrid")]
#[command(about = "Find the cheapest path across a grid of walls and short walls", long_about = None)]
pub struct Args {
    /// Grid file: one row per line, digits 0 (open), 1 (wall), 2 (short wall)
    pub grid: Option<PathBuf>,

    /// Start cell as ROW,COL
    #[arg(long, value_parser = parse_point)]
    pub start: Option<Point>,

    /// Goal cell as ROW,COL
    #[arg(long, value_parser = parse_point)]
    pub goal: Option<Point>,

    /// Break cost ties by most recently discovered cell
    #[arg(long)]
    pub lifo: bool,

    /// Give up after expanding this many cells
    #[arg(long)]
    pub max_expansions: Option<usize>,

    /// Search a random ROWSxCOLS grid instead of a file
    #[arg(long, value_parser = parse_size, conflicts_with = "grid")]
    pub random: Option<(i32, i32)>,

    /// Seed for --random
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Color the output with terminal escapes
    #[arg(long)]
    pub color: bool,
}

impl Args {
    /// Search configuration selected by the flags.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            tie_break: if self.lifo {
                TieBreak::Lifo
            } else {
                TieBreak::Fifo
            },
            max_expansions: self.max_expansions,
        }
    }
}

fn parse_pair(s: &str, sep: char) -> Option<(i32, i32)> {
    let (a, b) = s.split_once(sep)?;
    Some((a.trim().parse().ok()?, b.trim().parse().ok()?))
}

/// Parse `ROW,COL`.
pub fn parse_point(s: &str) -> Result<Point, String> {
    parse_pair(s, ',')
        .map(Point::from)
        .ok_or_else(|| format!("expected ROW,COL, got {s:?}"))
}

/// Parse `ROWSxCOLS`.
pub fn parse_size(s: &str) -> Result<(i32, i32), String> {
    match parse_pair(s, 'x') {
        Some((r, c)) if r > 0 && c > 0 => Ok((r, c)),
        _ => Err(format!("expected ROWSxCOLS with positive sizes, got {s:?}")),
    }
}

/// Grid and endpoints a run will search.
pub struct Scenario {
    pub grid: TerrainGrid,
    pub start: Point,
    pub goal: Point,
}

/// Build the scenario described by `args`.
///
/// Endpoints missing from the command line default to the first and last
/// passable cells (or random ones with `--random`); the built-in maze uses
/// its own start and goal.
pub fn scenario(args: &Args) -> Result<Scenario, Box<dyn Error>> {
    let mut generator = GridGen::new(StdRng::seed_from_u64(args.seed));
    let (grid, start, goal) = match (&args.grid, args.random) {
        (Some(path), _) => {
            let grid = load_grid(path)?;
            let first = grid.iter().find(|(_, t)| t.is_passable()).map(|(p, _)| p);
            let last = grid.iter().filter(|(_, t)| t.is_passable()).last().map(|(p, _)| p);
            (grid, first, last)
        }
        (None, Some((rows, cols))) => {
            let grid = generator.generate(&GenConfig {
                rows,
                cols,
                ..GenConfig::default()
            })?;
            let start = generator.random_passable(&grid);
            let goal = generator.random_passable(&grid);
            (grid, start, goal)
        }
        (None, None) => (
            TerrainGrid::from_codes(&EXAMPLE_GRID)?,
            Some(EXAMPLE_START),
            Some(EXAMPLE_GOAL),
        ),
    };
    let start = args.start.or(start).ok_or("grid has no passable cell")?;
    let goal = args.goal.or(goal).ok_or("grid has no passable cell")?;
    Ok(Scenario { grid, start, goal })
}

/// Run one search and print the outcome to `out`.
///
/// A missing path is a normal outcome and is reported as text; invalid
/// endpoints and I/O problems are returned as errors.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), Box<dyn Error>> {
    let Scenario { grid, start, goal } = scenario(args)?;
    validate_endpoints(&grid, start, goal)?;
    log::info!("searching {} grid from {start} to {goal}", grid.bounds());

    match search_with(&grid, start, goal, &args.search_config()) {
        Ok(path) => {
            let style = RenderStyle::default();
            if args.color {
                write_colored(out, &grid, &path.points, &style)?;
            } else {
                write!(out, "{}", render(&grid, &path.points, &style))?;
            }
            writeln!(out, "Shortest path: {}", format_path(&path.points))?;
            writeln!(out, "Cost: {}", path.cost)?;
        }
        Err(SearchError::NoPathFound) => {
            write!(out, "{}", render(&grid, &[], &RenderStyle::default()))?;
            writeln!(out, "No path found.")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &Args) -> Result<String, String> {
        let mut buf = Vec::new();
        run(args, &mut buf).map_err(|e| e.to_string())?;
        Ok(String::from_utf8(buf).unwrap())
    }

    fn temp_grid(name: &str, text: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("hopgrid-demo-{name}-{}.txt", std::process::id()));
        std::fs::write(&path, text).unwrap();
        path
    }

    #[test]
    fn example_maze() {
        let out = run_to_string(&Args::default()).unwrap();
        let expected = "\
1 0 S 0 1 0 0
1 1 * 0 0 1 1
0 1 * 1 2 0 0
1 1 * 1 1 2 1
0 1 * * * 2 0
0 1 1 1 * 1 1
G * * * * 0 0
Shortest path: [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2), (4, 3), (4, 4), (5, 4), (6, 4), (6, 3), (6, 2), (6, 1), (6, 0)]
Cost: 22
";
        assert_eq!(out, expected);
    }

    #[test]
    fn no_path_is_reported_not_an_error() {
        // (0, 5) and (0, 6) are walled off from the rest of the maze.
        let args = Args {
            goal: Some(Point::new(0, 6)),
            ..Args::default()
        };
        let out = run_to_string(&args).unwrap();
        assert!(out.ends_with("No path found.\n"));
    }

    #[test]
    fn blocked_endpoint_is_an_error() {
        let args = Args {
            start: Some(Point::new(0, 0)),
            ..Args::default()
        };
        let err = run_to_string(&args).unwrap_err();
        assert_eq!(err, "start (0, 0) is on a blocked cell");
    }

    #[test]
    fn expansion_limit_is_an_error() {
        let args = Args {
            max_expansions: Some(2),
            ..Args::default()
        };
        assert!(run_to_string(&args).unwrap_err().contains("expanding 2"));
    }

    #[test]
    fn grid_file_with_default_endpoints() {
        let path = temp_grid("file", "100\n000\n001\n");
        let args = Args {
            grid: Some(path.clone()),
            ..Args::default()
        };
        let sc = scenario(&args).unwrap();
        assert_eq!(sc.start, Point::new(0, 1));
        assert_eq!(sc.goal, Point::new(2, 1));
        let out = run_to_string(&args).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(out.contains("Cost: 2"));
    }

    #[test]
    fn malformed_grid_file() {
        let path = temp_grid("bad", "00\n0\n");
        let args = Args {
            grid: Some(path.clone()),
            ..Args::default()
        };
        let err = run_to_string(&args).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(err, "grid: row 1 has width 1, expected 2");
    }

    #[test]
    fn random_grid_is_reproducible() {
        let args = Args {
            random: Some((8, 12)),
            seed: 5,
            ..Args::default()
        };
        let a = scenario(&args).unwrap();
        let b = scenario(&args).unwrap();
        assert_eq!(a.grid, b.grid);
        assert_eq!((a.start, a.goal), (b.start, b.goal));
        assert_eq!(a.grid.rows(), 8);
        assert!(run_to_string(&args).is_ok());
    }

    #[test]
    fn cli_parsing() {
        let args = Args::try_parse_from([
            "hopgrid", "--start", "1,2", "--goal", "3, 4", "--lifo", "--max-expansions", "9",
        ])
        .unwrap();
        assert_eq!(args.start, Some(Point::new(1, 2)));
        assert_eq!(args.goal, Some(Point::new(3, 4)));
        let cfg = args.search_config();
        assert_eq!(cfg.tie_break, TieBreak::Lifo);
        assert_eq!(cfg.max_expansions, Some(9));

        assert!(Args::try_parse_from(["hopgrid", "--start", "1"]).is_err());
        assert!(Args::try_parse_from(["hopgrid", "--random", "0x4"]).is_err());
        assert!(Args::try_parse_from(["hopgrid", "g.txt", "--random", "3x4"]).is_err());
    }

    #[test]
    fn size_and_point_parsers() {
        assert_eq!(parse_size("7x9"), Ok((7, 9)));
        assert!(parse_size("7*9").is_err());
        assert_eq!(parse_point("-1,5"), Ok(Point::new(-1, 5)));
        assert!(parse_point("a,b").is_err());
    }
}
