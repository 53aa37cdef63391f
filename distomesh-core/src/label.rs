//! Per-point text label annotations

use crate::point::Point3d;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Orientation of a label in the scene
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelOrientation {
    /// Text lies flat in the XY plane
    Horizontal,
    /// Text stands upright, rotated 90 degrees about the X axis
    #[default]
    Vertical,
}

impl LabelOrientation {
    /// Euler rotation about the X axis the host applies to the label object
    pub fn rotation_x(&self) -> f64 {
        match self {
            LabelOrientation::Horizontal => 0.0,
            LabelOrientation::Vertical => FRAC_PI_2,
        }
    }
}

/// Horizontal text alignment of a label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelAlignment {
    #[default]
    Center,
    Left,
    Right,
}

/// Geometry and layout shared by all labels of one import
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelStyle {
    /// Uniform scale applied to the label object
    pub size: f64,
    /// Vertical offset of the label anchor above its point
    pub offset_z: f64,
    pub orientation: LabelOrientation,
    pub alignment: LabelAlignment,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            size: 0.1,
            offset_z: 0.05,
            orientation: LabelOrientation::default(),
            alignment: LabelAlignment::default(),
        }
    }
}

/// A single text label to be placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelSpec {
    pub text: String,
    /// Anchor position, already offset above the labeled point
    pub position: Point3d,
    pub size: f64,
    pub orientation: LabelOrientation,
    pub alignment: LabelAlignment,
}

impl LabelSpec {
    /// Build the label for the point at 1-based `index` in file order
    pub fn for_point(index: usize, point: &Point3d, style: &LabelStyle) -> Self {
        Self {
            text: index.to_string(),
            position: Point3d::new(point.x, point.y, point.z + style.offset_z),
            size: style.size,
            orientation: style.orientation,
            alignment: style.alignment,
        }
    }
}
