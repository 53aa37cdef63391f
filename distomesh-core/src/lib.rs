//! Core data structures for distomesh
//!
//! This crate provides the host-independent types shared by the CSV point
//! importer: points and point clouds, label annotations, the `SceneSink`
//! boundary to the host 3D application, and error types.

pub mod point;
pub mod point_cloud;
pub mod label;
pub mod scene;
pub mod error;

pub use point::*;
pub use point_cloud::*;
pub use label::*;
pub use scene::*;
pub use error::*;

/// Re-export commonly used types from nalgebra
pub use nalgebra::{Point3, Vector3};
