use crate::math::{Point2, Point3};

/// One of the three coordinate planes a 3D point can be dropped onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectionPlane {
    /// Drops `x`; maps to `(y, z)`.
    Yz,
    /// Drops `y`; maps to `(x, z)`.
    Xz,
    /// Drops `z`; maps to `(x, y)`.
    Xy,
}

impl ProjectionPlane {
    /// All three planes, in the order the overlap test visits them.
    pub const ALL: [Self; 3] = [Self::Yz, Self::Xz, Self::Xy];

    /// Projects a 3D point onto this plane.
    #[must_use]
    pub fn project(self, p: &Point3) -> Point2 {
        match self {
            Self::Yz => Point2::new(p.y, p.z),
            Self::Xz => Point2::new(p.x, p.z),
            Self::Xy => Point2::new(p.x, p.y),
        }
    }
}
