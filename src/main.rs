//! Molecular integration grid command-line interface
//!
//! Reads a YAML input, builds the grid and reports its quality.

mod app;
mod config;
mod io;

use app::GridApplication;
use color_eyre::eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;
    GridApplication::from_cli()?.run()
}
