use crate::error::Result;
use crate::math::{Point3, Rotation, Vector3};

use super::aabb::validate_box;
use super::Aabb3;

/// Corner sign pattern, indexed the same way as [`OrientedBox::corners`].
const CORNER_SIGNS: [[f64; 3]; 8] = [
    [1.0, 1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, -1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, 1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, -1.0],
];

/// A rectangular prism with an arbitrary orientation.
///
/// The box's local axes are `rotation` applied to the world axes; it spans
/// `half_extents` along each of them from `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedBox {
    center: Point3,
    half_extents: Vector3,
    rotation: Rotation,
}

impl OrientedBox {
    /// Creates an oriented box.
    ///
    /// # Errors
    ///
    /// Returns an error if any half-extent is negative or any coordinate is
    /// not finite.
    pub fn new(center: Point3, half_extents: Vector3, rotation: Rotation) -> Result<Self> {
        validate_box(&center, &half_extents, "oriented box")?;
        Ok(Self {
            center,
            half_extents,
            rotation,
        })
    }

    /// Creates a box with identity rotation.
    ///
    /// # Errors
    ///
    /// Same conditions as [`OrientedBox::new`].
    pub fn axis_aligned(center: Point3, half_extents: Vector3) -> Result<Self> {
        Self::new(center, half_extents, Rotation::identity())
    }

    /// Returns the center.
    #[must_use]
    pub fn center(&self) -> Point3 {
        self.center
    }

    /// Returns the half-extents along the local axes.
    #[must_use]
    pub fn half_extents(&self) -> Vector3 {
        self.half_extents
    }

    /// Returns the orientation.
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Returns the eight corners, `center + rotation * (±x, ±y, ±z)`.
    ///
    /// Index order by extent sign: `+++`, `+-+`, `++-`, `+--`, `-++`, `--+`,
    /// `-+-`, `---`.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        CORNER_SIGNS.map(|[sx, sy, sz]| {
            let local = Vector3::new(
                sx * self.half_extents.x,
                sy * self.half_extents.y,
                sz * self.half_extents.z,
            );
            self.center + self.rotation * local
        })
    }

    /// The same box moved by `offset`.
    #[must_use]
    pub fn translated(&self, offset: &Vector3) -> Self {
        Self {
            center: self.center + offset,
            ..*self
        }
    }

    /// The same box rotated by `rotation` about the world origin.
    #[must_use]
    pub fn rotated_about_origin(&self, rotation: &Rotation) -> Self {
        Self {
            center: rotation * self.center,
            half_extents: self.half_extents,
            rotation: rotation * self.rotation,
        }
    }

    /// Smallest world-axis-aligned box containing this box.
    #[must_use]
    pub fn enclosing_aabb(&self) -> Aabb3 {
        let m = self.rotation.to_rotation_matrix();
        let half = m.matrix().abs() * self.half_extents;
        Aabb3::from_validated(self.center, half)
    }

    /// This box as seen from its own unrotated frame.
    ///
    /// The frame is the world rotated by the inverse of `self.rotation`, so
    /// the result is centered at `inverse(rotation) * center`.
    #[must_use]
    pub fn local_bounds(&self) -> Aabb3 {
        Aabb3::from_validated(self.rotation.inverse() * self.center, self.half_extents)
    }

    /// `other` expressed in the frame used by [`OrientedBox::local_bounds`].
    #[must_use]
    pub fn express_in_frame(&self, other: &Self) -> Self {
        let inv = self.rotation.inverse();
        Self {
            center: inv * self.center + inv * (other.center - self.center),
            half_extents: other.half_extents,
            rotation: inv * other.rotation,
        }
    }
}
