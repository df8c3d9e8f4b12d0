//! Static grid descriptions loaded from JSON.
//!
//! A [`GridModel`] answers every [`LayoutDataProvider`] question from plain
//! data, which is what the CLI, the WASM viewer and most tests need.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PanegridError, Result};
use crate::layout::GridLayout;
use crate::provider::LayoutDataProvider;

fn default_row_height() -> f32 {
    20.0
}

fn default_sticky() -> bool {
    true
}

/// One section of a [`GridModel`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionModel {
    /// Number of rows
    pub rows: usize,
    /// Height used for rows without an explicit height
    #[serde(default = "default_row_height")]
    pub row_height: f32,
    /// Per-row heights; must hold exactly `rows` entries when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_heights: Option<Vec<f32>>,
    #[serde(default)]
    pub header_height: f32,
    #[serde(default)]
    pub footer_height: f32,
    #[serde(default)]
    pub frozen_rows: usize,
}

impl SectionModel {
    /// A section of `rows` rows, all `row_height` tall
    pub fn uniform(rows: usize, row_height: f32) -> Self {
        Self {
            rows,
            row_height,
            row_heights: None,
            header_height: 0.0,
            footer_height: 0.0,
            frozen_rows: 0,
        }
    }

    /// A section with an explicit height per row
    pub fn with_row_heights(heights: Vec<f32>) -> Self {
        Self {
            rows: heights.len(),
            row_heights: Some(heights),
            ..Self::uniform(0, default_row_height())
        }
    }

    fn row_height_at(&self, row: usize) -> f32 {
        self.row_heights
            .as_ref()
            .and_then(|heights| heights.get(row))
            .copied()
            .unwrap_or(self.row_height)
    }
}

/// Serializable description of a static grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridModel {
    /// Unzoomed column widths
    pub columns: Vec<f32>,
    pub sections: Vec<SectionModel>,
    #[serde(default)]
    pub header_height: f32,
    #[serde(default)]
    pub footer_height: f32,
    #[serde(default)]
    pub frozen_columns: usize,
    /// Raw `[start, end]` pairs, validated by the layout engine
    #[serde(default)]
    pub groupings: Vec<Vec<usize>>,
    #[serde(default = "default_sticky")]
    pub sticky_section_headers: bool,
}

fn check_dimension(what: impl FnOnce() -> String, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PanegridError::InvalidDimension {
            what: what(),
            value,
        })
    }
}

impl GridModel {
    /// `columns` columns of `column_width` and one section per entry of
    /// `rows_per_section`, every row `row_height` tall.
    pub fn uniform(
        columns: usize,
        column_width: f32,
        rows_per_section: &[usize],
        row_height: f32,
    ) -> Self {
        Self {
            columns: vec![column_width; columns],
            sections: rows_per_section
                .iter()
                .map(|rows| SectionModel::uniform(*rows, row_height))
                .collect(),
            header_height: 0.0,
            footer_height: 0.0,
            frozen_columns: 0,
            groupings: Vec::new(),
            sticky_section_headers: true,
        }
    }

    /// Parse and validate a model
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    /// Read, parse and validate a model file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject sizes the layout engine cannot place.
    pub fn validate(&self) -> Result<()> {
        for (column, width) in self.columns.iter().enumerate() {
            check_dimension(|| format!("column {column} width"), *width)?;
        }
        check_dimension(|| "grid header height".to_string(), self.header_height)?;
        check_dimension(|| "grid footer height".to_string(), self.footer_height)?;

        for (index, section) in self.sections.iter().enumerate() {
            check_dimension(|| format!("section {index} row height"), section.row_height)?;
            check_dimension(
                || format!("section {index} header height"),
                section.header_height,
            )?;
            check_dimension(
                || format!("section {index} footer height"),
                section.footer_height,
            )?;
            if let Some(heights) = &section.row_heights {
                if heights.len() != section.rows {
                    return Err(PanegridError::RowHeightMismatch {
                        section: index,
                        rows: section.rows,
                        heights: heights.len(),
                    });
                }
                for (row, height) in heights.iter().enumerate() {
                    check_dimension(|| format!("section {index} row {row} height"), *height)?;
                }
            }
        }
        Ok(())
    }

    /// Build a layout engine over this model, carrying its sticky setting.
    pub fn into_layout(self) -> GridLayout<Self> {
        let sticky = self.sticky_section_headers;
        let mut layout = GridLayout::new(self);
        layout.set_sticky_section_headers(sticky);
        layout
    }

    fn section(&self, section: usize) -> Option<&SectionModel> {
        self.sections.get(section)
    }
}

impl LayoutDataProvider for GridModel {
    fn section_count(&self) -> usize {
        self.sections.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn row_count(&self, section: usize) -> usize {
        self.section(section).map_or(0, |s| s.rows)
    }

    fn column_width(&self, column: usize) -> f32 {
        self.columns.get(column).copied().unwrap_or(0.0)
    }

    fn row_height(&self, section: usize, row: usize) -> f32 {
        self.section(section).map_or(0.0, |s| s.row_height_at(row))
    }

    fn frozen_column_count(&self) -> usize {
        self.frozen_columns
    }

    fn frozen_row_count(&self, section: usize) -> usize {
        self.section(section).map_or(0, |s| s.frozen_rows)
    }

    fn grid_header_height(&self) -> f32 {
        self.header_height
    }

    fn grid_footer_height(&self) -> f32 {
        self.footer_height
    }

    fn section_header_height(&self, section: usize) -> f32 {
        self.section(section).map_or(0.0, |s| s.header_height)
    }

    fn section_footer_height(&self, section: usize) -> f32 {
        self.section(section).map_or(0.0, |s| s.footer_height)
    }

    fn column_groupings(&self) -> Vec<Vec<usize>> {
        self.groupings.clone()
    }

    fn total_column_width(&self) -> f32 {
        self.columns.iter().sum()
    }
}
