use super::analysis;
use super::{export, ExportFormat};
use crate::body::{Body, Species};
use crate::config::{LightningConfig, SimConfig};
use crate::diagnostics::EnergyDiagnostics;
use crate::lightning;
use crate::molecule::Molecule;
use crate::simulation::Simulation;
use ultraviolet::Vec2;

fn two_molecule_sim() -> Simulation {
    let mut sim = Simulation::new(SimConfig::default());
    let bodies = vec![
        Body::new(Vec2::new(-10.0 + 1.27, 0.0), Vec2::new(0.2, 0.0), Species::Hydrogen, 0),
        Body::new(Vec2::new(-10.0, 0.0), Vec2::zero(), Species::Chlorine, 0),
        Body::new(Vec2::new(10.0 + 1.27, 0.0), Vec2::zero(), Species::Hydrogen, 1),
        Body::new(Vec2::new(10.0, 0.0), Vec2::zero(), Species::Chlorine, 1),
    ];
    let molecules = vec![
        Molecule::new(0, 1, sim.config.bond_k, sim.config.bond_length),
        Molecule::new(2, 3, sim.config.bond_k, sim.config.bond_length),
    ];
    sim.set_scene(bodies, molecules);
    sim
}

#[test]
fn charge_profile_is_neutral_overall() {
    let sim = two_molecule_sim();
    let data = analysis::charge_profile(&sim.bodies, true, sim.domain_width, 10);
    assert_eq!(data.x_data.len(), 10);
    let total: f64 = data.y_data.iter().sum();
    assert!(total.abs() < 1e-6, "HCl molecules are neutral, got {total}");
}

#[test]
fn speed_profile_only_counts_occupied_bins() {
    let sim = two_molecule_sim();
    let data = analysis::speed_profile(&sim.bodies, true, sim.domain_width, 5);
    // the moving hydrogen sits in the leftmost-but-one region
    assert!(data.y_data.iter().any(|&v| v > 0.0));
    assert!(data.y_data.iter().all(|&v| v >= 0.0));
}

#[test]
fn concentration_map_counts_all_atoms() {
    let sim = two_molecule_sim();
    let data = analysis::concentration_map(&sim, 8);
    let total: f64 = data.z_data.iter().sum();
    assert_eq!(total as usize, sim.bodies.len());
    assert_eq!(data.dims, Some((8, 8)));
}

#[test]
fn temperature_series_exports_time_value_rows() {
    let mut sim = two_molecule_sim();
    let mut diag = EnergyDiagnostics::new(1);
    diag.sample(&sim);
    sim.step();
    diag.sample(&sim);
    let data = analysis::temperature_series(&diag);
    assert_eq!(data.config.plot_type, super::PlotType::TimeSeries);
    assert_eq!(data.x_data, vec![0.0, sim.config.dt as f64]);
    let dir = std::env::temp_dir().join("polar_sim_plot_series_test");
    let path = export::export_plot_data(&data, ExportFormat::CSV, &dir).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("time,value\n"));
    let data_lines = content
        .lines()
        .filter(|l| !l.starts_with('#') && !l.starts_with("time,"))
        .count();
    assert_eq!(data_lines, 2, "one row per diagnostics sample");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn lightning_maps_have_grid_dims() {
    let config = LightningConfig {
        nx: 11,
        ny: 11,
        max_steps: 50,
        tolerance: 1e-3,
        progress_interval: 0,
        ..Default::default()
    };
    let result = lightning::run(&config);
    let phi = analysis::potential_map(&result);
    assert_eq!(phi.dims, Some((11, 11)));
    assert_eq!(phi.z_data.len(), 121);
    let age = analysis::channel_age_map(&result);
    // seed cell has age 0; untouched cells are -1
    assert!(age.z_data.contains(&0.0));
    assert!(age.z_data.contains(&-1.0));
}

#[test]
fn csv_export_writes_heatmap_rows() {
    let config = LightningConfig {
        nx: 9,
        ny: 9,
        max_steps: 10,
        tolerance: 1e-3,
        progress_interval: 0,
        ..Default::default()
    };
    let result = lightning::run(&config);
    let data = analysis::potential_map(&result);
    let dir = std::env::temp_dir().join("polar_sim_plot_test");
    let path = export::export_plot_data(&data, ExportFormat::CSV, &dir).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let data_lines = content.lines().filter(|l| !l.starts_with('#')).count();
    assert_eq!(data_lines, 9, "one CSV line per grid row");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_export_roundtrips() {
    let sim = two_molecule_sim();
    let data = analysis::charge_profile(&sim.bodies, false, sim.domain_height, 4);
    let dir = std::env::temp_dir().join("polar_sim_plot_json_test");
    let path = export::export_plot_data(&data, ExportFormat::JSON, &dir).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    let parsed: super::PlotData = serde_json::from_str(&content).unwrap();
    assert_eq!(parsed.x_data, data.x_data);
    std::fs::remove_dir_all(&dir).ok();
}
