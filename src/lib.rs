pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{GeometryError, ObbError, OperationError, Result};
pub use geometry::{Aabb3, OrientedBox, ProjectionPlane, Rect, Triangle3};
pub use operations::query::{boxes_overlap, BoxOverlap, BoxSide, OverlapOutcome, OverlapParams};
pub use tessellation::{TriangulateBox, BOX_TRIANGLE_COUNT};
