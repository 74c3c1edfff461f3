use tracing::trace;

use crate::error::Result;
use crate::geometry::{Aabb3, OrientedBox, ProjectionPlane, Triangle3};
use crate::math::intersect_2d::triangle_overlaps_rect;
use crate::tessellation::{scratch_slots, TriangulateBox, BOX_TRIANGLE_COUNT};

/// Parameters controlling the box overlap test.
#[derive(Debug, Clone, Copy)]
pub struct OverlapParams {
    /// Also run the projection test in the second box's frame.
    ///
    /// Without it only separating axes lying in the first box's coordinate
    /// planes are found, and boxes separated solely along one of the second
    /// box's face normals are reported as overlapping.
    pub symmetric: bool,
    /// Reject early when the world-aligned bounds of the boxes are disjoint.
    pub broad_phase: bool,
}

impl Default for OverlapParams {
    fn default() -> Self {
        Self {
            symmetric: true,
            broad_phase: true,
        }
    }
}

/// Which input box a local frame belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxSide {
    First,
    Second,
}

/// How an overlap query was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapOutcome {
    /// The world-aligned bounds do not touch.
    BoundsDisjoint,
    /// A corner of one box lies inside the other, seen from `frame`.
    CornerContained { frame: BoxSide },
    /// No triangle of the other box overlaps `frame`'s rectangle on `plane`.
    Separated {
        frame: BoxSide,
        plane: ProjectionPlane,
    },
    /// Every projection overlaps.
    Intersecting,
}

impl OverlapOutcome {
    /// Returns `true` if the outcome means the boxes overlap.
    #[must_use]
    pub fn is_overlap(self) -> bool {
        matches!(self, Self::CornerContained { .. } | Self::Intersecting)
    }
}

/// Tests whether two oriented boxes overlap. Touching counts as overlap.
pub struct BoxOverlap {
    first: OrientedBox,
    second: OrientedBox,
    params: OverlapParams,
}

impl BoxOverlap {
    /// Creates a new `BoxOverlap` query with default parameters.
    #[must_use]
    pub fn new(first: OrientedBox, second: OrientedBox) -> Self {
        Self::with_params(first, second, OverlapParams::default())
    }

    /// Creates a new `BoxOverlap` query.
    #[must_use]
    pub fn with_params(first: OrientedBox, second: OrientedBox, params: OverlapParams) -> Self {
        Self {
            first,
            second,
            params,
        }
    }

    /// Executes the query using a stack scratch buffer.
    #[must_use]
    pub fn execute(&self) -> bool {
        self.classify().is_overlap()
    }

    /// Executes the query, triangulating into a caller-supplied buffer.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidArgument`](crate::error::OperationError::InvalidArgument)
    /// if `scratch` holds fewer than twelve triangles.
    pub fn execute_with(&self, scratch: &mut [Triangle3]) -> Result<bool> {
        let slots = scratch_slots(scratch)?;
        Ok(self.decide(slots).is_overlap())
    }

    /// Executes the query and reports which test decided it.
    #[must_use]
    pub fn classify(&self) -> OverlapOutcome {
        let mut scratch = [Triangle3::default(); BOX_TRIANGLE_COUNT];
        self.decide(&mut scratch)
    }

    fn decide(&self, scratch: &mut [Triangle3; BOX_TRIANGLE_COUNT]) -> OverlapOutcome {
        if self.params.broad_phase
            && !self
                .first
                .enclosing_aabb()
                .overlaps(&self.second.enclosing_aabb())
        {
            trace!("world bounds disjoint");
            return OverlapOutcome::BoundsDisjoint;
        }

        let first = LocalFrame::new(&self.first, &self.second);
        if first.corner_contained() {
            trace!(frame = ?BoxSide::First, "corner contained");
            return OverlapOutcome::CornerContained {
                frame: BoxSide::First,
            };
        }

        let second = self
            .params
            .symmetric
            .then(|| LocalFrame::new(&self.second, &self.first));
        if second.as_ref().is_some_and(LocalFrame::corner_contained) {
            trace!(frame = ?BoxSide::Second, "corner contained");
            return OverlapOutcome::CornerContained {
                frame: BoxSide::Second,
            };
        }

        let frames = std::iter::once((BoxSide::First, first))
            .chain(second.map(|frame| (BoxSide::Second, frame)));
        for (side, frame) in frames {
            if let Some(plane) = frame.separating_plane(scratch) {
                trace!(frame = ?side, plane = ?plane, "separating projection");
                return OverlapOutcome::Separated { frame: side, plane };
            }
        }

        trace!("all projections overlap");
        OverlapOutcome::Intersecting
    }
}

/// Convenience wrapper for [`BoxOverlap`] with default parameters.
#[must_use]
pub fn boxes_overlap(first: &OrientedBox, second: &OrientedBox) -> bool {
    BoxOverlap::new(*first, *second).execute()
}

/// One box as an axis-aligned box in its own frame, with the other box
/// carried into that frame.
struct LocalFrame {
    bounds: Aabb3,
    other: OrientedBox,
}

impl LocalFrame {
    fn new(frame: &OrientedBox, other: &OrientedBox) -> Self {
        Self {
            bounds: frame.local_bounds(),
            other: frame.express_in_frame(other),
        }
    }

    fn corner_contained(&self) -> bool {
        self.other
            .corners()
            .iter()
            .any(|corner| self.bounds.contains(corner))
    }

    /// First coordinate plane on which the other box's surface misses the
    /// bounds entirely.
    fn separating_plane(
        &self,
        scratch: &mut [Triangle3; BOX_TRIANGLE_COUNT],
    ) -> Option<ProjectionPlane> {
        *scratch = TriangulateBox::new(self.other).execute();
        ProjectionPlane::ALL.into_iter().find(|&plane| {
            let rect = self.bounds.project(plane);
            !scratch.iter().any(|tri| {
                let [p1, p2, p3] = tri.project(plane);
                triangle_overlaps_rect(&p1, &p2, &p3, &rect)
            })
        })
    }
}
