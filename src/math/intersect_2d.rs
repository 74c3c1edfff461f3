use super::Point2;
use crate::geometry::Rect;

/// Strict point-in-triangle test.
///
/// Returns `true` only if `test` lies in the open interior of the triangle
/// `(p0, p1, p2)`. Points on an edge or vertex are outside, and a zero-area
/// triangle contains nothing. Either winding is accepted.
#[must_use]
pub fn point_in_triangle(p0: &Point2, p1: &Point2, p2: &Point2, test: &Point2) -> bool {
    // Twice the signed area.
    let area = -p1.y * p2.x + p0.y * (p2.x - p1.x) + p0.x * (p1.y - p2.y) + p1.x * p2.y;
    let sign = if area < 0.0 { -1.0 } else { 1.0 };

    let s = (p0.y * p2.x - p0.x * p2.y + (p2.y - p0.y) * test.x + (p0.x - p2.x) * test.y) * sign;
    let t = (p0.x * p1.y - p0.y * p1.x + (p0.y - p1.y) * test.x + (p1.x - p0.x) * test.y) * sign;

    // A zero area fails the last bound since s and t must both be positive.
    s > 0.0 && t > 0.0 && s + t < area * sign
}

/// Does the closed segment `(p1, p2)` touch the closed rectangle
/// `[rect_min, rect_max]`?
///
/// The segment is walked along its dominant axis: its extent on that axis is
/// clipped to the rectangle's slab, the line is evaluated at both clipped
/// ends, and the resulting interval is compared with the rectangle's range on
/// the other axis. The divisor is always the dominant delta, so vertical and
/// horizontal segments need no special handling.
#[must_use]
pub fn line_intersects_rect(
    p1: &Point2,
    p2: &Point2,
    rect_min: &Point2,
    rect_max: &Point2,
) -> bool {
    if p1 == p2 {
        return p1.x >= rect_min.x
            && p1.x <= rect_max.x
            && p1.y >= rect_min.y
            && p1.y <= rect_max.y;
    }

    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    if dx.abs() >= dy.abs() {
        clip_to_slab(
            (p1.x, p1.y),
            (p2.x, p2.y),
            (rect_min.x, rect_max.x),
            (rect_min.y, rect_max.y),
        )
    } else {
        clip_to_slab(
            (p1.y, p1.x),
            (p2.y, p2.x),
            (rect_min.y, rect_max.y),
            (rect_min.x, rect_max.x),
        )
    }
}

/// Clips the segment `a -> b`, given as `(u, v)` pairs with `a.0 != b.0`,
/// against the slab `u_range`, then tests the swept `v` interval against
/// `v_range`.
fn clip_to_slab(a: (f64, f64), b: (f64, f64), u_range: (f64, f64), v_range: (f64, f64)) -> bool {
    let (lo, hi) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    let start = lo.max(u_range.0);
    let end = hi.min(u_range.1);
    if start > end {
        return false;
    }

    let slope = (b.1 - a.1) / (b.0 - a.0);
    let v_start = a.1 + slope * (start - a.0);
    let v_end = a.1 + slope * (end - a.0);
    let (v_lo, v_hi) = if v_start <= v_end {
        (v_start, v_end)
    } else {
        (v_end, v_start)
    };

    v_lo <= v_range.1 && v_hi >= v_range.0
}

/// Does the 2D triangle `(p1, p2, p3)` overlap `rect`?
///
/// True when a vertex lies in the rect, when the triangle strictly envelops
/// all four rect corners, or when any edge touches the rect. Both shapes are
/// treated as closed, so touching counts as overlap.
#[must_use]
pub fn triangle_overlaps_rect(p1: &Point2, p2: &Point2, p3: &Point2, rect: &Rect) -> bool {
    if rect.contains(p1) || rect.contains(p2) || rect.contains(p3) {
        return true;
    }

    if rect
        .corners()
        .iter()
        .all(|corner| point_in_triangle(p1, p2, p3, corner))
    {
        return true;
    }

    let (min, max) = (rect.min(), rect.max());
    line_intersects_rect(p1, p2, &min, &max)
        || line_intersects_rect(p2, p3, &min, &max)
        || line_intersects_rect(p3, p1, &min, &max)
}
