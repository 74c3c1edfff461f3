use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};

/// A closed axis-aligned rectangle in 2D.
///
/// Invariant: `min <= max` componentwise. Zero width or height is allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    min: Point2,
    max: Point2,
}

impl Rect {
    /// Creates a rectangle from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NonFinite`] if a coordinate is NaN or infinite,
    /// or [`GeometryError::InvalidBounds`] if `min` exceeds `max` on any axis.
    pub fn new(min: Point2, max: Point2) -> Result<Self> {
        if !(min.coords.iter().all(|c| c.is_finite()) && max.coords.iter().all(|c| c.is_finite()))
        {
            return Err(GeometryError::NonFinite("rect").into());
        }
        if min.x > max.x || min.y > max.y {
            return Err(GeometryError::InvalidBounds {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            }
            .into());
        }
        Ok(Self { min, max })
    }

    /// Creates a rectangle from its center and full size.
    ///
    /// # Errors
    ///
    /// Returns an error if `size` has a negative component or any input is
    /// not finite.
    pub fn from_center_size(center: Point2, size: Vector2) -> Result<Self> {
        let half = size * 0.5;
        Self::new(center - half, center + half)
    }

    /// Builds a rectangle from bounds already known to be ordered.
    pub(crate) fn from_ordered(min: Point2, max: Point2) -> Self {
        debug_assert!(min.x <= max.x && min.y <= max.y);
        Self { min, max }
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point2 {
        self.max
    }

    /// Returns the full width and height.
    #[must_use]
    pub fn size(&self) -> Vector2 {
        self.max - self.min
    }

    /// Returns the four corners: `(min.x, min.y)`, `(min.x, max.y)`,
    /// `(max.x, min.y)`, `(max.x, max.y)`.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            Point2::new(self.min.x, self.min.y),
            Point2::new(self.min.x, self.max.y),
            Point2::new(self.max.x, self.min.y),
            Point2::new(self.max.x, self.max.y),
        ]
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::ObbError;

    #[test]
    fn contains_is_closed() {
        let r = Rect::new(Point2::new(0.0, 0.0), Point2::new(2.0, 1.0)).unwrap();
        assert!(r.contains(&Point2::new(1.0, 0.5)));
        assert!(r.contains(&Point2::new(0.0, 0.0)));
        assert!(r.contains(&Point2::new(2.0, 1.0)));
        assert!(r.contains(&Point2::new(2.0, 0.3)));
        assert!(!r.contains(&Point2::new(2.000_001, 0.3)));
    }

    #[test]
    fn center_size_roundtrip() {
        let r = Rect::from_center_size(Point2::new(1.0, 1.0), Vector2::new(4.0, 2.0)).unwrap();
        assert_eq!(r.min(), Point2::new(-1.0, 0.0));
        assert_eq!(r.max(), Point2::new(3.0, 2.0));
        assert_eq!(r.size(), Vector2::new(4.0, 2.0));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let err = Rect::new(Point2::new(1.0, 0.0), Point2::new(0.0, 1.0)).unwrap_err();
        assert!(matches!(
            err,
            ObbError::Geometry(GeometryError::InvalidBounds { .. })
        ));
    }

    #[test]
    fn nan_rejected() {
        let err = Rect::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 1.0)).unwrap_err();
        assert!(matches!(err, ObbError::Geometry(GeometryError::NonFinite(_))));
    }

    #[test]
    fn zero_area_is_legal() {
        let r = Rect::new(Point2::new(1.0, 1.0), Point2::new(1.0, 1.0)).unwrap();
        assert!(r.contains(&Point2::new(1.0, 1.0)));
        assert_eq!(r.corners(), [Point2::new(1.0, 1.0); 4]);
    }
}
