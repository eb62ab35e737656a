use std::{env, fs, process};

use anyhow::{bail, Context, Result};

use traffic_solver::{render_path, Puzzle, SolveError};

fn main() -> Result<()> {
    let Some(path) = env::args().nth(1) else {
        eprintln!("Usage: traffic-solver <puzzle-file>");
        process::exit(1);
    };

    let input = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let puzzle = Puzzle::parse(&input).with_context(|| format!("parsing {path}"))?;

    match puzzle.solve() {
        Ok(solution) => {
            println!("{}", render_path(&solution.path, puzzle.names()));
            println!("Solved in {} moves.", solution.moves());
            println!(
                "Expanded {} states (generated {} total).",
                solution.expanded, solution.generated
            );
            Ok(())
        }
        Err(SolveError::NoSolution) => bail!("puzzle has no solution"),
    }
}
