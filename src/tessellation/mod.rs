mod triangulate_box;

pub(crate) use triangulate_box::scratch_slots;
pub use triangulate_box::{TriangulateBox, BOX_TRIANGLE_COUNT};
