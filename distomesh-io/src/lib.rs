//! CSV survey-point import
//!
//! This crate reads CSV files exported by laser distance-measurement devices
//! (one row per measured point, coordinates in named columns) and materializes
//! them into a host scene as a vertex-only point-cloud mesh, optionally with
//! one text label per point.
//!
//! Malformed rows never abort an import: a row whose coordinates are missing,
//! empty, or unparseable is skipped and its line number recorded. Only a file
//! that cannot be read at all, or that yields no valid point whatsoever, fails
//! the operation.

pub mod config;
pub mod csv_points;
pub mod importer;
pub mod error;

pub use config::ImportConfig;
pub use csv_points::{CsvPointReader, ImportReport, ImportResult};
pub use importer::CsvMeshImporter;
pub use error::*;
