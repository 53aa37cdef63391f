//! The boundary between the importer and the host 3D application

use crate::error::Result;
use crate::label::LabelSpec;
use crate::point_cloud::PointCloud;

/// Narrow interface to the host scene
///
/// The importer only ever asks the host for two things: a vertex-only mesh
/// for the imported points and, optionally, one text object per point.
/// Implementations wrap whatever scene-graph API the host exposes; the
/// parsing core has no dependency on any specific runtime.
pub trait SceneSink {
    /// Add a mesh consisting of one vertex per point, no edges, no faces
    fn add_point_cloud(&mut self, name: &str, cloud: &PointCloud) -> Result<()>;

    /// Add a text label object
    fn add_label(&mut self, label: &LabelSpec) -> Result<()>;
}

/// In-memory scene that records every object it receives
///
/// Useful for tests and for dry runs where no host application is attached.
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    pub meshes: Vec<(String, PointCloud)>,
    pub labels: Vec<LabelSpec>,
}

impl MemoryScene {
    /// Create a new empty scene
    pub fn new() -> Self {
        Self::default()
    }
}

impl SceneSink for MemoryScene {
    fn add_point_cloud(&mut self, name: &str, cloud: &PointCloud) -> Result<()> {
        self.meshes.push((name.to_string(), cloud.clone()));
        Ok(())
    }

    fn add_label(&mut self, label: &LabelSpec) -> Result<()> {
        self.labels.push(label.clone());
        Ok(())
    }
}
