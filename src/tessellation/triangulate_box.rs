use crate::error::{OperationError, Result};
use crate::geometry::{OrientedBox, Triangle3};

/// Number of triangles covering the surface of a box.
pub const BOX_TRIANGLE_COUNT: usize = 12;

/// Corner indices (see [`OrientedBox::corners`]) for each triangle, two per
/// face sharing the face diagonal. `(p1 - p2) x (p1 - p3)` points outward for
/// every entry.
const FACE_TRIANGLES: [[usize; 3]; BOX_TRIANGLE_COUNT] = [
    // +x
    [2, 0, 1],
    [1, 3, 2],
    // -z
    [6, 2, 3],
    [3, 7, 6],
    // -x
    [4, 6, 7],
    [7, 5, 4],
    // +z
    [0, 4, 5],
    [5, 1, 0],
    // +y
    [0, 2, 6],
    [6, 4, 0],
    // -y
    [1, 5, 7],
    [7, 3, 1],
];

/// Splits the surface of an oriented box into twelve triangles.
pub struct TriangulateBox {
    obb: OrientedBox,
}

impl TriangulateBox {
    /// Creates a new `TriangulateBox` operation.
    #[must_use]
    pub fn new(obb: OrientedBox) -> Self {
        Self { obb }
    }

    /// Executes the triangulation, returning the triangles in face order
    /// `+x, -z, -x, +z, +y, -y`.
    #[must_use]
    pub fn execute(&self) -> [Triangle3; BOX_TRIANGLE_COUNT] {
        let corners = self.obb.corners();
        FACE_TRIANGLES.map(|[a, b, c]| Triangle3::new(corners[a], corners[b], corners[c]))
    }

    /// Writes the triangles into the first twelve slots of `out`.
    ///
    /// Slots past the twelfth are left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OperationError::InvalidArgument`] if `out` has fewer than
    /// twelve slots. Nothing is written in that case.
    pub fn execute_into(&self, out: &mut [Triangle3]) -> Result<()> {
        let slots = scratch_slots(out)?;
        *slots = self.execute();
        Ok(())
    }
}

/// Borrows the leading twelve slots of a caller buffer.
pub(crate) fn scratch_slots(
    out: &mut [Triangle3],
) -> Result<&mut [Triangle3; BOX_TRIANGLE_COUNT]> {
    let len = out.len();
    out.get_mut(..BOX_TRIANGLE_COUNT)
        .and_then(|head| <&mut [Triangle3; BOX_TRIANGLE_COUNT]>::try_from(head).ok())
        .ok_or_else(|| {
            OperationError::InvalidArgument(format!(
                "triangle buffer holds {len} slots, need {BOX_TRIANGLE_COUNT}"
            ))
            .into()
        })
}
