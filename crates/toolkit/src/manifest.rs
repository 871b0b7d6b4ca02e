//! Load-list manifest readers.
//!
//! A manifest is a flat list of box types, each with dimensions, a weight
//! and a quantity. Readers expand every entry by its quantity and hand the
//! engine one box per physical item, preserving row order.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use stowage_engine::Box3D;
use thiserror::Error;

/// Errors that can occur when reading a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in line {line}, column {column}: {value}")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },

    #[error("Manifest contains no entries")]
    Empty,
}

/// One manifest row: a box type and how many of it to load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// Extent along the sheet's W column.
    pub width: f64,
    /// Extent along the sheet's H column.
    pub height: f64,
    /// Extent along the sheet's L column.
    pub length: f64,
    /// Number of identical boxes this row stands for.
    pub quantity: usize,
    /// Weight per box.
    pub weight: f64,
}

impl ManifestEntry {
    /// Expands this entry into one box per physical item.
    ///
    /// Sheets list W/H/L; the packer treats the triple as X/Y/Z extents in
    /// that column order.
    pub fn expand(&self) -> impl Iterator<Item = Box3D> + '_ {
        (0..self.quantity).map(|_| Box3D::new(self.width, self.height, self.length, self.weight))
    }
}

/// A parsed load-list manifest.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    /// Rows in file order.
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Expands all entries into the box sequence handed to the engine,
    /// preserving row order.
    pub fn boxes(&self) -> Vec<Box3D> {
        self.entries.iter().flat_map(ManifestEntry::expand).collect()
    }

    /// Total number of physical boxes across all rows.
    pub fn box_count(&self) -> usize {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Reads a manifest from a JSON file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::parse_json(&content)
    }

    /// Parses a manifest from a JSON string.
    pub fn parse_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Manifest = serde_json::from_str(json)?;
        if manifest.entries.is_empty() {
            return Err(ManifestError::Empty);
        }
        Ok(manifest)
    }

    /// Saves the manifest to a JSON file.
    pub fn save_json(&self, path: impl AsRef<Path>) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads a manifest from a CSV file.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)?;
        Self::parse_csv(&content)
    }

    /// Parses a manifest from CSV text.
    ///
    /// The header row names the columns; matching is on the leading word,
    /// case-insensitively, so decorated spreadsheet exports like
    /// `Width ( W )` or `Weight ( kg )` resolve to the same columns as plain
    /// `width`/`weight` headers. Column order is free, blank lines are
    /// ignored.
    pub fn parse_csv(content: &str) -> Result<Self, ManifestError> {
        let mut lines = content.lines().enumerate();

        let header = loop {
            match lines.next() {
                Some((_, line)) if line.trim().is_empty() => continue,
                Some((_, line)) => break line,
                None => return Err(ManifestError::Empty),
            }
        };

        let columns: Vec<String> = header
            .split(',')
            .map(|h| {
                h.trim()
                    .split_whitespace()
                    .next()
                    .unwrap_or("")
                    .to_lowercase()
            })
            .collect();

        let col = |name: &str| -> Result<usize, ManifestError> {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| ManifestError::MissingColumn(name.to_string()))
        };

        let width_col = col("width")?;
        let height_col = col("height")?;
        let length_col = col("length")?;
        let quantity_col = col("quantity")?;
        let weight_col = col("weight")?;

        let mut entries = Vec::new();
        for (line_no, line) in lines {
            if line.trim().is_empty() {
                continue;
            }

            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            let field = |idx: usize, name: &str| -> Result<f64, ManifestError> {
                let raw = fields.get(idx).copied().unwrap_or("");
                raw.parse::<f64>().map_err(|_| ManifestError::InvalidValue {
                    line: line_no + 1,
                    column: name.to_string(),
                    value: raw.to_string(),
                })
            };

            let quantity_raw = fields.get(quantity_col).copied().unwrap_or("");
            let quantity = quantity_raw
                .parse::<usize>()
                .map_err(|_| ManifestError::InvalidValue {
                    line: line_no + 1,
                    column: "quantity".to_string(),
                    value: quantity_raw.to_string(),
                })?;

            entries.push(ManifestEntry {
                width: field(width_col, "width")?,
                height: field(height_col, "height")?,
                length: field(length_col, "length")?,
                quantity,
                weight: field(weight_col, "weight")?,
            });
        }

        if entries.is_empty() {
            return Err(ManifestError::Empty);
        }

        Ok(Manifest { entries })
    }

    /// Reads a manifest, picking the format from the file extension
    /// (`.csv` is CSV, anything else is JSON).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Self::load_csv(path),
            _ => Self::load_json(path),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = "\
Width ( W ),Height ( H ),Length ( L ),Quantity ( Q ),Weight ( kg )
2.0,1.0,3.0,2,40.5
1.5,1.5,1.5,1,12.0
";

    #[test]
    fn test_parse_decorated_headers() {
        let manifest = Manifest::parse_csv(SHEET).unwrap();
        assert_eq!(manifest.entries.len(), 2);
        assert_eq!(
            manifest.entries[0],
            ManifestEntry {
                width: 2.0,
                height: 1.0,
                length: 3.0,
                quantity: 2,
                weight: 40.5,
            }
        );
    }

    #[test]
    fn test_quantity_expansion_preserves_order() {
        let manifest = Manifest::parse_csv(SHEET).unwrap();
        let boxes = manifest.boxes();

        assert_eq!(manifest.box_count(), 3);
        assert_eq!(boxes.len(), 3);
        // Two copies of row one, then row two.
        assert_eq!(boxes[0], Box3D::new(2.0, 1.0, 3.0, 40.5));
        assert_eq!(boxes[1], Box3D::new(2.0, 1.0, 3.0, 40.5));
        assert_eq!(boxes[2], Box3D::new(1.5, 1.5, 1.5, 12.0));
    }

    #[test]
    fn test_plain_headers_any_order() {
        let csv = "weight,quantity,length,height,width\n9.0,1,3.0,2.0,1.0\n";
        let manifest = Manifest::parse_csv(csv).unwrap();
        let entry = &manifest.entries[0];
        assert_eq!(entry.width, 1.0);
        assert_eq!(entry.height, 2.0);
        assert_eq!(entry.length, 3.0);
        assert_eq!(entry.weight, 9.0);
    }

    #[test]
    fn test_missing_column_is_typed_error() {
        let csv = "width,height,length,weight\n1.0,1.0,1.0,5.0\n";
        match Manifest::parse_csv(csv) {
            Err(ManifestError::MissingColumn(col)) => assert_eq!(col, "quantity"),
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_value_reports_line_and_column() {
        let csv = "width,height,length,quantity,weight\n1.0,oops,1.0,1,5.0\n";
        match Manifest::parse_csv(csv) {
            Err(ManifestError::InvalidValue { line, column, value }) => {
                assert_eq!(line, 2);
                assert_eq!(column, "height");
                assert_eq!(value, "oops");
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_manifest_rejected() {
        assert!(matches!(
            Manifest::parse_csv("width,height,length,quantity,weight\n"),
            Err(ManifestError::Empty)
        ));
        assert!(matches!(Manifest::parse_csv(""), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_json_round_trip() {
        let manifest = Manifest {
            entries: vec![ManifestEntry {
                width: 1.0,
                height: 2.0,
                length: 3.0,
                quantity: 4,
                weight: 5.0,
            }],
        };

        let json = serde_json::to_string(&manifest).unwrap();
        let parsed = Manifest::parse_json(&json).unwrap();
        assert_eq!(parsed.entries, manifest.entries);
    }
}
