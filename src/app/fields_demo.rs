// app/fields_demo.rs
// Static field exports: the HCl-scale dipole field on a meshgrid and the
// two-charge potential profile along the axis between the charges.

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ultraviolet::Vec2;

use crate::config;
use crate::fields::{self, FieldGrid, PointCharge};
use crate::plotting::{analysis, export, ExportFormat};

pub fn run_fields() -> Result<(), Box<dyn Error>> {
    let out_dir = Path::new("plots");

    // Dipole with the HCl partial charge at the HCl bond separation.
    let q = config::HCL_PARTIAL_CHARGE;
    let half = config::HCL_BOND_LENGTH_A / 2.0;
    let charges = [
        PointCharge { q, pos: Vec2::new(half, 0.0) },
        PointCharge { q: -q, pos: Vec2::new(-half, 0.0) },
    ];
    let grid = FieldGrid::sample(&charges, 5.0, 21);
    export::export_plot_data(&analysis::field_component(&grid, true), ExportFormat::CSV, out_dir)?;
    export::export_plot_data(&analysis::field_component(&grid, false), ExportFormat::CSV, out_dir)?;

    // Two like charges at ±5 Å: the classic double-well potential profile.
    let profile = fields::two_charge_potential_profile(1.0, 5.0, 1000);
    std::fs::create_dir_all(out_dir)?;
    let mut w = BufWriter::new(File::create(out_dir.join("two_charge_potential.csv"))?);
    writeln!(w, "x,potential")?;
    for (x, v) in &profile {
        writeln!(w, "{},{}", x, v)?;
    }

    println!(
        "[fields] exported dipole field grid ({} samples) and potential profile ({} points)",
        grid.xs.len(),
        profile.len()
    );
    Ok(())
}
