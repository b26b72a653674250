// app/lightning_loop.rs
// Runs the dielectric breakdown experiment and exports the resulting
// potential field and channel-age heatmaps.

use std::error::Error;
use std::path::Path;

use crate::config::LightningConfig;
use crate::lightning;
use crate::plotting::{analysis, export, ExportFormat};

pub fn run_lightning(config: &LightningConfig) -> Result<(), Box<dyn Error>> {
    println!(
        "[lightning] grid {}x{} eta={} tol={} seed={}",
        config.nx, config.ny, config.eta, config.tolerance, config.seed
    );
    let result = lightning::run(config);

    let out_dir = Path::new("plots");
    export::export_plot_data(&analysis::potential_map(&result), ExportFormat::CSV, out_dir)?;
    export::export_plot_data(&analysis::channel_age_map(&result), ExportFormat::CSV, out_dir)?;
    export::export_plot_data(&analysis::potential_map(&result), ExportFormat::JSON, out_dir)?;

    println!(
        "[lightning] exported heatmaps ({} growth steps, {} relaxation sweeps)",
        result.steps, result.total_sweeps
    );
    Ok(())
}
