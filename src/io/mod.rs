//! Logging setup and grid files

mod output;

pub use output::{setup_output, write_grid};
