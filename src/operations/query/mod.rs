mod box_overlap;

pub use box_overlap::{boxes_overlap, BoxOverlap, BoxSide, OverlapOutcome, OverlapParams};
