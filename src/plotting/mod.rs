// plotting/mod.rs
// Data analysis and export for the simulation experiments. Headless: each
// plot is a PlotData bundle written to disk as CSV/JSON/TSV for external
// plotting tools.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub mod analysis;
pub mod export;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum PlotType {
    SpatialProfileX, // Mean quantity vs X position
    SpatialProfileY, // Mean quantity vs Y position
    TimeSeries,      // Quantity vs time
    Heatmap,         // 2D grid of values (potential, channel age, concentration)
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Quantity {
    Charge,
    Speed,
    Temperature,
    AtomCount,
    Potential,
    ChannelAge,
    FieldX,
    FieldY,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotConfig {
    pub plot_type: PlotType,
    pub quantity: Quantity,
    pub title: String,
    pub spatial_bins: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlotData {
    pub config: PlotConfig,
    pub x_data: Vec<f64>,
    pub y_data: Vec<f64>,
    /// Cell values for heatmaps, row-major; empty for 1D plots.
    #[serde(default)]
    pub z_data: Vec<f64>,
    /// (columns, rows) of z_data when it is a heatmap.
    #[serde(default)]
    pub dims: Option<(usize, usize)>,
    pub metadata: HashMap<String, String>,
}

impl PlotData {
    pub fn new_1d(config: PlotConfig, x_data: Vec<f64>, y_data: Vec<f64>) -> Self {
        Self {
            config,
            x_data,
            y_data,
            z_data: Vec::new(),
            dims: None,
            metadata: HashMap::new(),
        }
    }

    pub fn new_heatmap(config: PlotConfig, z_data: Vec<f64>, dims: (usize, usize)) -> Self {
        Self {
            config,
            x_data: Vec::new(),
            y_data: Vec::new(),
            z_data,
            dims: Some(dims),
            metadata: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    CSV,
    JSON,
    TSV,
}
