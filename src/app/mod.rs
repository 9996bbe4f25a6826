mod geometry;
mod report;
mod runner;

pub use geometry::build_molecule;
pub use runner::{build_grids, run_density_pruning};

use self::report::{report_grid_summary, report_integration_check};
use crate::config::{Args, Config};
use crate::io::{setup_output, write_grid};
use clap::Parser;
use color_eyre::eyre::{eyre, Result, WrapErr};
use std::fs::{self, File};
use tracing::info;

pub struct GridApplication {
    args: Args,
    config: Config,
}

impl GridApplication {
    pub fn from_cli() -> Result<Self> {
        let args = Args::parse();
        let config = load_config(&args)?;
        Ok(Self { args, config })
    }

    pub fn run(self) -> Result<()> {
        setup_output(self.args.output.as_ref());
        info!("Configuration loaded from: {}", self.args.config_file);

        let mol = build_molecule(&self.config)?;
        let mut grids = build_grids(mol, &self.args, &self.config)?;
        run_density_pruning(&mut grids, &self.args, &self.config)?;

        let grid = grids.grid().ok_or_else(|| eyre!("Grid was not built"))?;
        report_grid_summary(grids.molecule(), grid);
        report_integration_check(grids.molecule(), grid);

        if let Some(path) = &self.args.dump {
            let mut file =
                File::create(path).wrap_err_with(|| format!("Unable to create {}", path))?;
            write_grid(&mut file, grid)?;
            info!("\nGrid written to: {}", path);
        }
        Ok(())
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let config_content = fs::read_to_string(&args.config_file)
        .wrap_err_with(|| format!("Unable to read configuration file: {}", args.config_file))?;

    let config = serde_yml::from_str::<Config>(&config_content)
        .wrap_err("Failed to parse configuration file")?
        .with_defaults();

    Ok(config)
}
