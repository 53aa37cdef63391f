//! Point cloud data structures and functionality

use crate::point::Point3d;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// An ordered collection of 3D points
///
/// Points are kept in insertion order; for an imported CSV file that is the
/// file order of the rows they came from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PointCloud {
    pub points: Vec<Point3d>,
}

impl PointCloud {
    /// Create a new empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create a new point cloud with specified capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Create a point cloud from a vector of points
    pub fn from_points(points: Vec<Point3d>) -> Self {
        Self { points }
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the point cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Add a point to the cloud
    pub fn push(&mut self, point: Point3d) {
        self.points.push(point);
    }

    /// Get an iterator over the points
    pub fn iter(&self) -> std::slice::Iter<'_, Point3d> {
        self.points.iter()
    }

    /// Get the axis-aligned bounding box, or `None` for an empty cloud
    pub fn bounding_box(&self) -> Option<(Point3d, Point3d)> {
        let first = *self.points.first()?;
        let mut min = first;
        let mut max = first;

        for point in &self.points {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            min.z = min.z.min(point.z);

            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
            max.z = max.z.max(point.z);
        }

        Some((min, max))
    }

    /// Get the center of the bounding box, or `None` for an empty cloud
    pub fn center(&self) -> Option<Point3d> {
        let (min, max) = self.bounding_box()?;
        Some(Point3d::new(
            (min.x + max.x) / 2.0,
            (min.y + max.y) / 2.0,
            (min.z + max.z) / 2.0,
        ))
    }
}

impl Index<usize> for PointCloud {
    type Output = Point3d;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl IntoIterator for PointCloud {
    type Item = Point3d;
    type IntoIter = std::vec::IntoIter<Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.into_iter()
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3d;
    type IntoIter = std::slice::Iter<'a, Point3d>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

impl Extend<Point3d> for PointCloud {
    fn extend<I: IntoIterator<Item = Point3d>>(&mut self, iter: I) {
        self.points.extend(iter);
    }
}

impl FromIterator<Point3d> for PointCloud {
    fn from_iter<I: IntoIterator<Item = Point3d>>(iter: I) -> Self {
        Self {
            points: Vec::from_iter(iter),
        }
    }
}
