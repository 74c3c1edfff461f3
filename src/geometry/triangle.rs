use crate::error::{GeometryError, Result};
use crate::math::{Point2, Point3, Vector3, TOLERANCE};

use super::ProjectionPlane;

/// A triangle in 3D space.
///
/// Vertex order is the winding: swapping any two vertices flips the normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle3 {
    pub p1: Point3,
    pub p2: Point3,
    pub p3: Point3,
}

impl Default for Triangle3 {
    fn default() -> Self {
        Self::new(Point3::origin(), Point3::origin(), Point3::origin())
    }
}

impl Triangle3 {
    /// Creates a triangle from three ordered vertices.
    #[must_use]
    pub fn new(p1: Point3, p2: Point3, p3: Point3) -> Self {
        Self { p1, p2, p3 }
    }

    /// Returns the vertices in winding order.
    #[must_use]
    pub fn vertices(&self) -> [Point3; 3] {
        [self.p1, self.p2, self.p3]
    }

    /// Unit normal `normalize((p1 - p2) x (p1 - p3))`, dependent on winding.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Degenerate`] if the vertices are collinear or
    /// coincident.
    pub fn normal(&self) -> Result<Vector3> {
        let n = (self.p1 - self.p2).cross(&(self.p1 - self.p3));
        let len = n.norm();
        if len < TOLERANCE {
            return Err(GeometryError::Degenerate("triangle has zero area".into()).into());
        }
        Ok(n / len)
    }

    /// Surface area.
    #[must_use]
    pub fn area(&self) -> f64 {
        (self.p2 - self.p1).cross(&(self.p3 - self.p1)).norm() * 0.5
    }

    /// The same triangle with opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self::new(self.p1, self.p3, self.p2)
    }

    /// Projects all three vertices onto a coordinate plane.
    #[must_use]
    pub fn project(&self, plane: ProjectionPlane) -> [Point2; 3] {
        [
            plane.project(&self.p1),
            plane.project(&self.p2),
            plane.project(&self.p3),
        ]
    }
}
