use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3};

use super::{ProjectionPlane, Rect};

/// A closed axis-aligned box in 3D, stored as center and half-extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb3 {
    center: Point3,
    half_extents: Vector3,
}

impl Aabb3 {
    /// Creates a box from its center and half-extents.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NegativeExtents`] if any half-extent is
    /// negative, or [`GeometryError::NonFinite`] for NaN/infinite input.
    pub fn new(center: Point3, half_extents: Vector3) -> Result<Self> {
        validate_box(&center, &half_extents, "aabb")?;
        Ok(Self {
            center,
            half_extents,
        })
    }

    /// Builds a box from already validated parts.
    pub(crate) fn from_validated(center: Point3, half_extents: Vector3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Smallest box containing every point in `points`, or `None` if empty.
    #[must_use]
    pub fn from_points(points: &[Point3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Some(Self {
            center: nalgebra::center(&min, &max),
            half_extents: (max - min) * 0.5,
        })
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the half-extents.
    #[must_use]
    pub fn half_extents(&self) -> Vector3 {
        self.half_extents
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point3 {
        self.center - self.half_extents
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point3 {
        self.center + self.half_extents
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point3) -> bool {
        let (min, max) = (self.min(), self.max());
        (0..3).all(|i| p[i] >= min[i] && p[i] <= max[i])
    }

    /// Returns `true` if the boxes intersect, counting touching faces.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        (0..3).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
    }

    /// Projects the box onto a coordinate plane.
    #[must_use]
    pub fn project(&self, plane: ProjectionPlane) -> Rect {
        Rect::from_ordered(plane.project(&self.min()), plane.project(&self.max()))
    }
}

/// Shared constructor check for box-shaped values.
pub(crate) fn validate_box(
    center: &Point3,
    half_extents: &Vector3,
    what: &'static str,
) -> Result<()> {
    if !(center.coords.iter().all(|c| c.is_finite()) && half_extents.iter().all(|c| c.is_finite()))
    {
        return Err(GeometryError::NonFinite(what).into());
    }
    if half_extents.iter().any(|&e| e < 0.0) {
        return Err(GeometryError::NegativeExtents {
            x: half_extents.x,
            y: half_extents.y,
            z: half_extents.z,
        }
        .into());
    }
    Ok(())
}
