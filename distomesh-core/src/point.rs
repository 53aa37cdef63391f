//! Point types and related functionality

use nalgebra::{Point3, Vector3};

/// A 3D point with double precision coordinates
///
/// Survey coordinates are carried as `f64` so that every value a laser
/// distance-measurement device writes to its CSV export round-trips through
/// parsing without loss.
pub type Point3d = Point3<f64>;

/// A 3D vector with double precision components
pub type Vector3d = Vector3<f64>;
