// plotting/export.rs
// Writes PlotData bundles to disk under the output directory.

use super::{ExportFormat, PlotData, PlotType};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write the plot to `out_dir`, returning the path of the created file.
pub fn export_plot_data(
    data: &PlotData,
    format: ExportFormat,
    out_dir: &Path,
) -> Result<String, String> {
    let filename = match format {
        ExportFormat::CSV => format!("{}.csv", data.config.title.replace(' ', "_")),
        ExportFormat::JSON => format!("{}.json", data.config.title.replace(' ', "_")),
        ExportFormat::TSV => format!("{}.tsv", data.config.title.replace(' ', "_")),
    };

    let content = match format {
        ExportFormat::CSV => export_csv(data)?,
        ExportFormat::JSON => export_json(data)?,
        ExportFormat::TSV => export_csv(data)?.replace(',', "\t"),
    };

    let path = out_dir.join(&filename);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| format!("Failed to create directory: {}", e))?;
    }
    let mut file = File::create(&path).map_err(|e| format!("Failed to create file: {}", e))?;
    file.write_all(content.as_bytes())
        .map_err(|e| format!("Failed to write file: {}", e))?;

    Ok(path.to_string_lossy().to_string())
}

fn export_csv(data: &PlotData) -> Result<String, String> {
    let mut content = String::new();

    content.push_str(&format!("# Title: {}\n", data.config.title));
    content.push_str(&format!("# Plot Type: {:?}\n", data.config.plot_type));
    content.push_str(&format!("# Quantity: {:?}\n", data.config.quantity));
    for (key, value) in &data.metadata {
        content.push_str(&format!("# {}: {}\n", key, value));
    }

    match data.config.plot_type {
        PlotType::Heatmap => {
            let (cols, rows) = data
                .dims
                .ok_or_else(|| "heatmap without dims".to_string())?;
            if data.z_data.len() != cols * rows {
                return Err(format!(
                    "heatmap size mismatch: {} values for {}x{}",
                    data.z_data.len(),
                    cols,
                    rows
                ));
            }
            // one CSV row per grid row
            for y in 0..rows {
                let row: Vec<String> = (0..cols)
                    .map(|x| data.z_data[x + y * cols].to_string())
                    .collect();
                content.push_str(&row.join(","));
                content.push('\n');
            }
        }
        PlotType::SpatialProfileX => {
            content.push_str("x_position,value\n");
            push_pairs(&mut content, data);
        }
        PlotType::SpatialProfileY => {
            content.push_str("y_position,value\n");
            push_pairs(&mut content, data);
        }
        PlotType::TimeSeries => {
            content.push_str("time,value\n");
            push_pairs(&mut content, data);
        }
    }

    Ok(content)
}

fn push_pairs(content: &mut String, data: &PlotData) {
    for i in 0..data.x_data.len().min(data.y_data.len()) {
        content.push_str(&format!("{},{}\n", data.x_data[i], data.y_data[i]));
    }
}

fn export_json(data: &PlotData) -> Result<String, String> {
    serde_json::to_string_pretty(data).map_err(|e| format!("JSON serialization error: {}", e))
}
