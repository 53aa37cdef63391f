//! Import configuration

use distomesh_core::{LabelAlignment, LabelOrientation, LabelStyle};
use serde::{Deserialize, Serialize};

/// Configuration for one CSV import
///
/// Column names must match the CSV header exactly, case-sensitively,
/// including any unit suffix such as `"[m]"`. The defaults match the column
/// names a Leica Disto writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportConfig {
    /// Header name of the X coordinate column
    pub x_column: String,
    /// Header name of the Y coordinate column
    pub y_column: String,
    /// Header name of the Z coordinate column
    pub z_column: String,
    /// Name given to the mesh object created in the scene
    pub mesh_name: String,
    /// Whether to create a text label for each imported point
    pub show_labels: bool,
    /// Uniform scale of the label objects
    pub label_size: f64,
    /// Vertical offset of each label above its point
    pub label_offset_z: f64,
    pub label_orientation: LabelOrientation,
    pub label_alignment: LabelAlignment,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            x_column: "X [m]".to_string(),
            y_column: "Y [m]".to_string(),
            z_column: "Z [m]".to_string(),
            mesh_name: "CSV_Mesh".to_string(),
            show_labels: false,
            label_size: 0.1,
            label_offset_z: 0.05,
            label_orientation: LabelOrientation::default(),
            label_alignment: LabelAlignment::default(),
        }
    }
}

impl ImportConfig {
    /// Create a configuration with the default Disto column names
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom coordinate column names
    pub fn with_columns(
        mut self,
        x: impl Into<String>,
        y: impl Into<String>,
        z: impl Into<String>,
    ) -> Self {
        self.x_column = x.into();
        self.y_column = y.into();
        self.z_column = z.into();
        self
    }

    /// Name the mesh object created in the scene
    pub fn with_mesh_name(mut self, name: impl Into<String>) -> Self {
        self.mesh_name = name.into();
        self
    }

    /// Enable or disable per-point labels
    pub fn with_labels(mut self, show: bool) -> Self {
        self.show_labels = show;
        self
    }

    /// Set label geometry and layout
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_size = style.size;
        self.label_offset_z = style.offset_z;
        self.label_orientation = style.orientation;
        self.label_alignment = style.alignment;
        self
    }

    /// The label style described by this configuration
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            size: self.label_size,
            offset_z: self.label_offset_z,
            orientation: self.label_orientation,
            alignment: self.label_alignment,
        }
    }
}
