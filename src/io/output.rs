//! Output formatting and logging utilities

use color_eyre::eyre::Result;
use molgrid::GlobalGrid;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::time::SystemTime as StdSystemTime;
use tracing::info;
use tracing_subscriber::{
    fmt::format::Writer, fmt::layer, fmt::time::FormatTime, layer::SubscriberExt,
    util::SubscriberInitExt, Registry,
};

/// Wall clock time as HH:MM:SS
struct SecondPrecisionTimer;

impl FormatTime for SecondPrecisionTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        let total_seconds = StdSystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        write!(
            w,
            "{:02}:{:02}:{:02}",
            (total_seconds / 3600) % 24,
            (total_seconds / 60) % 60,
            total_seconds % 60
        )
    }
}

/// Send log records to `output_path`, or to stdout when it is `None`.
pub fn setup_output(output_path: Option<&String>) {
    match output_path.map(|path| (path, File::create(path))) {
        Some((path, Ok(log))) => {
            let file_layer = layer()
                .with_writer(log)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(false);
            Registry::default().with(file_layer).init();
            info!("Log written to: {}", path);
        }
        Some((path, Err(err))) => {
            eprintln!("Could not create output file {}: {}", path, err);
        }
        None => {
            let stdout_layer = layer()
                .with_writer(std::io::stdout)
                .with_timer(SecondPrecisionTimer)
                .with_ansi(true);
            Registry::default().with(stdout_layer).init();
        }
    }
}

/// One `x y z weight atom` row per point; padding points have atom -1.
pub fn write_grid<W: Write>(writer: &mut W, grid: &GlobalGrid) -> Result<()> {
    let mut out = BufWriter::new(writer);
    writeln!(out, "# {} points, coordinates in Bohr", grid.len())?;
    for ((r, w), atom) in grid.coords.iter().zip(&grid.weights).zip(&grid.atm_idx) {
        writeln!(
            out,
            "{:20.12e} {:20.12e} {:20.12e} {:20.12e} {:4}",
            r.x, r.y, r.z, w, atom
        )?;
    }
    out.flush()?;
    Ok(())
}
