#![allow(clippy::unwrap_used)]
//! Randomised checks of the box overlap test against a full separating-axis
//! reference.

use std::f64::consts::PI;

use obb_overlap::math::{Point3, Rotation, Vector3};
use obb_overlap::{boxes_overlap, BoxOverlap, OrientedBox, OverlapParams};
use proptest::prelude::*;

/// Results closer to the separation boundary than this are skipped.
const MARGIN: f64 = 1e-7;

fn local_axes(b: &OrientedBox) -> [Vector3; 3] {
    let m = b.rotation().to_rotation_matrix();
    [m * Vector3::x(), m * Vector3::y(), m * Vector3::z()]
}

/// Largest gap between the boxes over the 15 candidate separating axes.
/// Positive means separated.
fn separating_gap(a: &OrientedBox, b: &OrientedBox) -> f64 {
    let axes_a = local_axes(a);
    let axes_b = local_axes(b);
    let mut candidates: Vec<Vector3> = axes_a.iter().chain(&axes_b).copied().collect();
    for ea in &axes_a {
        for eb in &axes_b {
            let c = ea.cross(eb);
            if c.norm() > 1e-6 {
                candidates.push(c.normalize());
            }
        }
    }

    let offset = b.center() - a.center();
    let radius = |axes: &[Vector3; 3], half: Vector3, l: &Vector3| -> f64 {
        (0..3).map(|i| axes[i].dot(l).abs() * half[i]).sum()
    };
    candidates
        .iter()
        .map(|l| {
            offset.dot(l).abs()
                - radius(&axes_a, a.half_extents(), l)
                - radius(&axes_b, b.half_extents(), l)
        })
        .fold(f64::NEG_INFINITY, f64::max)
}

fn arb_rotation() -> impl Strategy<Value = Rotation> {
    prop::array::uniform3(-PI..PI).prop_map(|[r, p, y]| Rotation::from_euler_angles(r, p, y))
}

fn arb_box(spread: f64) -> impl Strategy<Value = OrientedBox> {
    (
        prop::array::uniform3(-spread..spread),
        prop::array::uniform3(0.05_f64..1.5),
        arb_rotation(),
    )
        .prop_map(|(c, h, r)| OrientedBox::new(Point3::from(c), Vector3::from(h), r).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn agrees_with_separating_axis_reference(a in arb_box(2.0), b in arb_box(2.0)) {
        let gap = separating_gap(&a, &b);
        prop_assume!(gap.abs() > MARGIN);
        prop_assert_eq!(boxes_overlap(&a, &b), gap < 0.0);
    }

    #[test]
    fn symmetric_in_arguments(a in arb_box(2.0), b in arb_box(2.0)) {
        prop_assert_eq!(boxes_overlap(&a, &b), boxes_overlap(&b, &a));
    }

    #[test]
    fn box_overlaps_itself(a in arb_box(5.0)) {
        prop_assert!(boxes_overlap(&a, &a));
    }

    #[test]
    fn translation_invariant(
        a in arb_box(2.0),
        b in arb_box(2.0),
        shift in prop::array::uniform3(-50.0_f64..50.0),
    ) {
        prop_assume!(separating_gap(&a, &b).abs() > 1e-6);
        let v = Vector3::from(shift);
        prop_assert_eq!(
            boxes_overlap(&a, &b),
            boxes_overlap(&a.translated(&v), &b.translated(&v))
        );
    }

    #[test]
    fn rotation_invariant(a in arb_box(2.0), b in arb_box(2.0), q in arb_rotation()) {
        prop_assume!(separating_gap(&a, &b).abs() > 1e-6);
        prop_assert_eq!(
            boxes_overlap(&a, &b),
            boxes_overlap(&a.rotated_about_origin(&q), &b.rotated_about_origin(&q))
        );
    }

    #[test]
    fn one_sided_test_never_misses_overlap(a in arb_box(2.0), b in arb_box(2.0)) {
        let one_sided = OverlapParams { symmetric: false, ..OverlapParams::default() };
        if !BoxOverlap::with_params(a, b, one_sided).execute() {
            prop_assert!(separating_gap(&a, &b) > -MARGIN);
        }
    }

    #[test]
    fn broad_phase_does_not_change_result(a in arb_box(3.0), b in arb_box(3.0)) {
        let exhaustive = OverlapParams { broad_phase: false, ..OverlapParams::default() };
        prop_assert_eq!(
            boxes_overlap(&a, &b),
            BoxOverlap::with_params(a, b, exhaustive).execute()
        );
    }
}
