// plotting/analysis.rs
// Turns simulation state into PlotData bundles.

use super::{PlotConfig, PlotData, PlotType, Quantity};
use crate::body::Body;
use crate::diagnostics::EnergyDiagnostics;
use crate::lightning::LightningResult;
use crate::simulation::Simulation;

/// Net charge binned along an axis of the domain.
pub fn charge_profile(bodies: &[Body], axis_is_x: bool, bounds: f32, bins: usize) -> PlotData {
    let mut bin_charges = vec![0.0f64; bins];
    for body in bodies {
        let position = if axis_is_x { body.pos.x } else { body.pos.y };
        if let Some(i) = bin_index(position, bounds, bins) {
            bin_charges[i] += body.charge as f64;
        }
    }
    let config = PlotConfig {
        plot_type: if axis_is_x {
            PlotType::SpatialProfileX
        } else {
            PlotType::SpatialProfileY
        },
        quantity: Quantity::Charge,
        title: format!("charge_profile_{}", if axis_is_x { "x" } else { "y" }),
        spatial_bins: bins,
    };
    PlotData::new_1d(config, bin_centers(bounds, bins), bin_charges)
}

/// Mean speed binned along an axis.
pub fn speed_profile(bodies: &[Body], axis_is_x: bool, bounds: f32, bins: usize) -> PlotData {
    let mut sums = vec![0.0f64; bins];
    let mut counts = vec![0usize; bins];
    for body in bodies {
        let position = if axis_is_x { body.pos.x } else { body.pos.y };
        if let Some(i) = bin_index(position, bounds, bins) {
            sums[i] += body.vel.mag() as f64;
            counts[i] += 1;
        }
    }
    let means = sums
        .iter()
        .zip(&counts)
        .map(|(s, &c)| if c > 0 { s / c as f64 } else { 0.0 })
        .collect();
    let config = PlotConfig {
        plot_type: if axis_is_x {
            PlotType::SpatialProfileX
        } else {
            PlotType::SpatialProfileY
        },
        quantity: Quantity::Speed,
        title: format!("speed_profile_{}", if axis_is_x { "x" } else { "y" }),
        spatial_bins: bins,
    };
    PlotData::new_1d(config, bin_centers(bounds, bins), means)
}

/// Windowed temperature against time, from the diagnostics records.
pub fn temperature_series(diag: &EnergyDiagnostics) -> PlotData {
    let config = PlotConfig {
        plot_type: PlotType::TimeSeries,
        quantity: Quantity::Temperature,
        title: "temperature_series".to_string(),
        spatial_bins: 0,
    };
    PlotData::new_1d(
        config,
        diag.records.iter().map(|r| r.time as f64).collect(),
        diag.records.iter().map(|r| r.temperature as f64).collect(),
    )
}

/// Atom counts on a bins×bins grid over the square domain.
pub fn concentration_map(sim: &Simulation, bins: usize) -> PlotData {
    let mut counts = vec![0.0f64; bins * bins];
    let (bw, bh) = (sim.domain_width, sim.domain_height);
    for body in &sim.bodies {
        let bx = bin_index(body.pos.x, bw, bins);
        let by = bin_index(body.pos.y, bh, bins);
        if let (Some(bx), Some(by)) = (bx, by) {
            counts[bx + by * bins] += 1.0;
        }
    }
    let config = PlotConfig {
        plot_type: PlotType::Heatmap,
        quantity: Quantity::AtomCount,
        title: "concentration_map".to_string(),
        spatial_bins: bins,
    };
    PlotData::new_heatmap(config, counts, (bins, bins))
}

/// The relaxed potential field of a finished lightning run.
pub fn potential_map(result: &LightningResult) -> PlotData {
    let g = &result.grid;
    let config = PlotConfig {
        plot_type: PlotType::Heatmap,
        quantity: Quantity::Potential,
        title: "lightning_potential".to_string(),
        spatial_bins: g.nx,
    };
    let mut data = PlotData::new_heatmap(
        config,
        g.phi.iter().map(|&v| v as f64).collect(),
        (g.nx, g.ny),
    );
    data.metadata
        .insert("steps".to_string(), result.steps.to_string());
    data.metadata
        .insert("reached_ground".to_string(), result.reached_ground.to_string());
    data
}

/// Growth-step heatmap of the channel: cells carry the step at which they
/// joined, everything else -1. Plotting this colors the bolt by age.
pub fn channel_age_map(result: &LightningResult) -> PlotData {
    let g = &result.grid;
    let ages = g
        .step_added
        .iter()
        .map(|&s| if s == usize::MAX { -1.0 } else { s as f64 })
        .collect();
    let config = PlotConfig {
        plot_type: PlotType::Heatmap,
        quantity: Quantity::ChannelAge,
        title: "lightning_channel".to_string(),
        spatial_bins: g.nx,
    };
    PlotData::new_heatmap(config, ages, (g.nx, g.ny))
}

/// Quiver-style export of a sampled field grid: x, y in the 1D arrays, Ex or
/// Ey as the value column.
pub fn field_component(grid: &crate::fields::FieldGrid, x_component: bool) -> PlotData {
    let config = PlotConfig {
        plot_type: PlotType::Heatmap,
        quantity: if x_component { Quantity::FieldX } else { Quantity::FieldY },
        title: format!("field_{}", if x_component { "ex" } else { "ey" }),
        spatial_bins: grid.n,
    };
    let values = if x_component { &grid.ex } else { &grid.ey };
    let mut data = PlotData::new_heatmap(
        config,
        values.iter().map(|&v| v as f64).collect(),
        (grid.n, grid.n),
    );
    data.metadata
        .insert("half_extent".to_string(), grid.half_extent.to_string());
    data
}

fn bin_index(position: f32, bounds: f32, bins: usize) -> Option<usize> {
    let normalized = (position + bounds) / (2.0 * bounds);
    let idx = normalized * bins as f32;
    if idx >= 0.0 && idx < bins as f32 {
        Some(idx.floor() as usize)
    } else if (idx - bins as f32).abs() < 1e-6 {
        Some(bins - 1) // body sitting exactly on the far wall
    } else {
        None
    }
}

fn bin_centers(bounds: f32, bins: usize) -> Vec<f64> {
    let bin_size = (2.0 * bounds) / bins as f32;
    (0..bins)
        .map(|i| (-bounds + (i as f32 + 0.5) * bin_size) as f64)
        .collect()
}
