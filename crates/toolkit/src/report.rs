//! Load report generation.
//!
//! Tabulates a pack result the way the loading paperwork wants it: one row
//! per placed box with oriented dimensions, weight and volume, followed by
//! the container occupancy summary.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stowage_core::PackResult;
use stowage_engine::Container;

/// One report row for a placed box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoxRow {
    /// 1-based item number in placement order.
    pub item: usize,
    /// Oriented dimensions (x, y, z extents).
    pub dimensions: [f64; 3],
    /// Position of the bottom-left-front corner.
    pub position: [f64; 3],
    /// Weight of the box.
    pub weight: f64,
    /// Volume of the box.
    pub volume: f64,
}

/// A printable load report for one packing run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadReport {
    /// Container dimensions (x, y, z extents).
    pub container_dimensions: [f64; 3],
    /// Container volume.
    pub container_volume: f64,
    /// Total volume of all placed boxes.
    pub occupied_volume: f64,
    /// Occupied volume as a percentage of container volume.
    pub occupied_percent: f64,
    /// Container volume still free.
    pub space_remaining: f64,
    /// Number of boxes placed.
    pub boxes_placed: usize,
    /// Number of boxes that found no slot.
    pub boxes_skipped: usize,
    /// Per-box rows in placement order.
    pub rows: Vec<BoxRow>,
}

impl LoadReport {
    /// Builds a report from a pack result.
    pub fn new(container: &Container, result: &PackResult) -> Self {
        let rows: Vec<BoxRow> = result
            .placements
            .iter()
            .enumerate()
            .map(|(i, p)| BoxRow {
                item: i + 1,
                dimensions: [p.dimensions.x, p.dimensions.y, p.dimensions.z],
                position: [p.position.x, p.position.y, p.position.z],
                weight: p.weight,
                volume: p.volume(),
            })
            .collect();

        let container_volume = container.volume();
        let occupied_volume = result.occupied_volume();

        Self {
            container_dimensions: [container.length(), container.width(), container.height()],
            container_volume,
            occupied_volume,
            occupied_percent: occupied_volume / container_volume * 100.0,
            space_remaining: container_volume - occupied_volume,
            boxes_placed: result.placed_count(),
            boxes_skipped: result.unplaced_count(),
            rows,
        }
    }

    /// Prints a summary table to stdout.
    pub fn print_summary(&self) {
        println!("\n{:=<72}", "");
        println!("LOAD REPORT");
        println!("{:=<72}", "");
        println!(
            "Container {:.1} x {:.1} x {:.1}  |  capacity {:.2}",
            self.container_dimensions[0],
            self.container_dimensions[1],
            self.container_dimensions[2],
            self.container_volume
        );
        println!("{:-<72}", "");
        println!(
            "{:<6} {:<20} {:<20} {:>10} {:>10}",
            "Item", "Dimensions", "Position", "Weight", "Volume"
        );
        println!("{:-<72}", "");

        for row in &self.rows {
            println!(
                "{:<6} {:<20} {:<20} {:>10.2} {:>10.2}",
                row.item,
                format!(
                    "{:.2}x{:.2}x{:.2}",
                    row.dimensions[0], row.dimensions[1], row.dimensions[2]
                ),
                format!(
                    "({:.1}, {:.1}, {:.1})",
                    row.position[0], row.position[1], row.position[2]
                ),
                row.weight,
                row.volume
            );
        }

        println!("{:-<72}", "");
        println!(
            "Placed {}  skipped {}  |  occupied {:.2} ({:.1}%)  remaining {:.2}",
            self.boxes_placed,
            self.boxes_skipped,
            self.occupied_volume,
            self.occupied_percent,
            self.space_remaining
        );
        println!("{:=<72}\n", "");
    }

    /// Renders the report as a markdown document.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str("# Load Report\n\n");
        md.push_str("## Container\n\n");
        md.push_str("| Dimensions | Capacity |\n|---|---|\n");
        md.push_str(&format!(
            "| {:.1} x {:.1} x {:.1} | {:.2} |\n\n",
            self.container_dimensions[0],
            self.container_dimensions[1],
            self.container_dimensions[2],
            self.container_volume
        ));

        md.push_str("## Packages\n\n");
        md.push_str("| Item | Dimensions | Position | Weight | Volume |\n");
        md.push_str("|---|---|---|---|---|\n");
        for row in &self.rows {
            md.push_str(&format!(
                "| {} | {:.2}x{:.2}x{:.2} | ({:.1}, {:.1}, {:.1}) | {:.2} | {:.2} |\n",
                row.item,
                row.dimensions[0],
                row.dimensions[1],
                row.dimensions[2],
                row.position[0],
                row.position[1],
                row.position[2],
                row.weight,
                row.volume
            ));
        }

        md.push_str("\n## Space Utilization\n\n");
        md.push_str("| Space Taken | Space Remaining | Occupied |\n|---|---|---|\n");
        md.push_str(&format!(
            "| {:.2} | {:.2} | {:.1}% |\n",
            self.occupied_volume, self.space_remaining, self.occupied_percent
        ));

        if self.boxes_skipped > 0 {
            md.push_str(&format!(
                "\n{} box(es) could not be placed.\n",
                self.boxes_skipped
            ));
        }

        md
    }

    /// Saves the report to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)
    }
}
