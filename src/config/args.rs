//! Command-line argument parsing

use clap::Parser;
use molgrid::PruneScheme;

/// Build a molecular DFT integration grid from a YAML input
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yaml")]
    pub config_file: String,

    /// Log file (default stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Override the grid level (0-9)
    #[arg(long)]
    pub level: Option<usize>,

    /// Override the pruning scheme
    #[arg(long, value_enum)]
    pub prune: Option<PruneArg>,

    /// Override the padding alignment (0 or 1 disables padding)
    #[arg(long)]
    pub alignment: Option<usize>,

    /// Keep points in atom order instead of grouping them into boxes
    #[arg(long)]
    pub no_sort: bool,

    /// Override the density pruning threshold
    #[arg(long)]
    pub density_threshold: Option<f64>,

    /// Write the final grid as `x y z weight atom` rows
    #[arg(long)]
    pub dump: Option<String>,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum PruneArg {
    None,
    Sg1,
    Nwchem,
    Treutler,
}

impl From<PruneArg> for PruneScheme {
    fn from(arg: PruneArg) -> Self {
        match arg {
            PruneArg::None => PruneScheme::None,
            PruneArg::Sg1 => PruneScheme::Sg1,
            PruneArg::Nwchem => PruneScheme::Nwchem,
            PruneArg::Treutler => PruneScheme::Treutler,
        }
    }
}
