// app/md_loop.rs
// Fixed-length molecular dynamics run with periodic diagnostics sampling,
// progress printing, and plot/snapshot export at the end.

use std::error::Error;
use std::path::Path;

use crate::diagnostics::EnergyDiagnostics;
use crate::init_config::MdInitConfig;
use crate::io;
use crate::plotting::{analysis, export, ExportFormat};
use crate::scenario;
use crate::simulation::thermal;

/// Number of temperature samples averaged in the diagnostics window.
const DIAG_WINDOW: usize = 5;

pub fn run_md(md: &MdInitConfig) -> Result<(), Box<dyn Error>> {
    let mut sim = scenario::setup_md(md);
    let mut diag = EnergyDiagnostics::new(DIAG_WINDOW);
    let frames = sim.config.frames;
    let sample_interval = sim.config.sample_interval.max(1);
    let progress_interval = sim.config.progress_interval;

    diag.sample(&sim);
    for frame in 1..=frames {
        sim.step();
        if frame % sample_interval == 0 {
            diag.sample(&sim);
        }
        if progress_interval > 0 && frame % progress_interval == 0 {
            let temp = thermal::measure_temperature(&sim.bodies);
            println!(
                "[md] frame={}/{} t={:.1}fs T={:.1}K E={:.4}",
                frame,
                frames,
                sim.time(),
                temp,
                sim.total_energy()
            );
        }
    }

    let out_dir = Path::new("plots");
    diag.write_csv(&out_dir.join("md_energy.csv"))?;
    export::export_plot_data(
        &analysis::temperature_series(&diag),
        ExportFormat::CSV,
        out_dir,
    )?;
    export::export_plot_data(
        &analysis::charge_profile(&sim.bodies, true, sim.domain_width, 40),
        ExportFormat::CSV,
        out_dir,
    )?;
    export::export_plot_data(
        &analysis::speed_profile(&sim.bodies, true, sim.domain_width, 40),
        ExportFormat::CSV,
        out_dir,
    )?;
    export::export_plot_data(
        &analysis::concentration_map(&sim, 50),
        ExportFormat::CSV,
        out_dir,
    )?;

    let snapshot = io::SimulationState::capture(&sim);
    io::save_state(&snapshot, &out_dir.join("md_final.json.gz"))?;

    if let Some(last) = diag.last() {
        println!(
            "[md] done: {} frames, final T={:.1}K E={:.4} |p|={:.3}",
            frames,
            last.temperature,
            last.total,
            last.dipole_mag
        );
    }
    Ok(())
}
