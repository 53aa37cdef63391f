//! One-shot import of a CSV file into a scene

use crate::config::ImportConfig;
use crate::csv_points::{CsvPointReader, ImportReport};
use crate::error::Result;
use distomesh_core::{LabelSpec, SceneSink};
use log::info;
use std::path::Path;

/// Runs the whole import: scan the CSV, then materialize the point-cloud
/// mesh and the optional labels into the scene
///
/// The importer holds no state between invocations; on failure nothing is
/// added to the scene and the user is expected to fix the file or the
/// configuration and re-invoke.
pub struct CsvMeshImporter {
    config: ImportConfig,
}

impl CsvMeshImporter {
    /// Create an importer with the given configuration
    pub fn new(config: ImportConfig) -> Self {
        Self { config }
    }

    /// The configuration this importer runs with
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Import `path` into `scene`
    ///
    /// On success one vertex-only mesh is added and, when labels are enabled,
    /// one text object per point, labeled with its 1-based index in file
    /// order. The returned report displays as the user-facing summary line.
    pub fn run<P, S>(&self, path: P, scene: &mut S) -> Result<ImportReport>
    where
        P: AsRef<Path>,
        S: SceneSink,
    {
        let result = CsvPointReader::read(path, &self.config)?;

        scene.add_point_cloud(&self.config.mesh_name, &result.points)?;

        if self.config.show_labels {
            let style = self.config.label_style();
            for (idx, point) in result.points.iter().enumerate() {
                scene.add_label(&LabelSpec::for_point(idx + 1, point, &style))?;
            }
        }

        let report = result.report();
        info!("{report}");
        Ok(report)
    }
}
