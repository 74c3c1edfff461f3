pub mod aabb;
pub mod oriented_box;
pub mod projection;
pub mod rect;
pub mod triangle;

pub use aabb::Aabb3;
pub use oriented_box::OrientedBox;
pub use projection::ProjectionPlane;
pub use rect::Rect;
pub use triangle::Triangle3;
