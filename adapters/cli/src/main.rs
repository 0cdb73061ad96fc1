#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that reads a maze, solves it and prints the results.

mod options;

use std::{
    fs::{self, OpenOptions},
    io::{self, BufWriter, Read, Write},
    path::Path,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use mopsolver_core::{Grid, SearchOutcome};
use mopsolver_rendering::{render_maze, render_solution, Glyphs, StepReport};
use mopsolver_system_search::solve;

use crate::options::Options;

/// Entry point for the maze solver command-line interface.
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = Options::parse();
    run(&options)
}

fn run(options: &Options) -> Result<()> {
    let glyphs = match &options.glyphs {
        Some(path) => Glyphs::from_path(path)?,
        None => Glyphs::default(),
    };

    let text = read_maze(options.input.as_deref())?;
    let grid = Grid::parse(&text).context("failed to parse maze")?;
    info!("read a {}x{} maze", grid.columns(), grid.rows());

    let outcome = solve(&grid).context("maze search failed")?;

    let mut out = open_output(options.output.as_deref())?;
    write_sections(&mut out, options, &grid, &outcome, glyphs)
        .and_then(|()| out.flush())
        .context("failed to write output")?;
    Ok(())
}

fn read_maze(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            info!("reading maze from {}", path.display());
            fs::read_to_string(path)
                .with_context(|| format!("failed to read maze from {}", path.display()))
        }
        None => {
            info!("reading maze from stdin");
            let mut text = String::new();
            let _ = io::stdin()
                .read_to_string(&mut text)
                .context("failed to read maze from stdin")?;
            Ok(text)
        }
    }
}

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            info!("appending output to {}", path.display());
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open {} for writing", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
    }
}

/// Writes the requested sections in a fixed order: maze, step count, path.
fn write_sections(
    out: &mut impl Write,
    options: &Options,
    grid: &Grid,
    outcome: &SearchOutcome,
    glyphs: Glyphs,
) -> io::Result<()> {
    if options.display {
        write!(out, "{}", render_maze(grid, glyphs))?;
    }
    if options.steps {
        writeln!(out, "{}", StepReport::new(outcome))?;
    }
    if options.path {
        write!(out, "{}", render_solution(grid, outcome, glyphs))?;
    }
    Ok(())
}
