use super::*;
use crate::geom::{Obstacle, Tether, ANCHOR};
use nalgebra::vector;
use proptest::prelude::*;

fn barn(w: f64, h: f64) -> Obstacle {
    Obstacle::new(w, h).unwrap()
}

fn rope(l: f64) -> Tether {
    Tether::new(l).unwrap()
}

#[test]
fn anchor_with_zero_rope_is_unreachable() {
    assert!(!reachable(ANCHOR, &barn(2.0, 3.0), &rope(0.0)));
    assert!(!reachable(ANCHOR, &barn(2.0, 3.0), &rope(5.0)));
}

#[test]
fn direct_point_outside_barn_is_reachable() {
    let b = barn(2.0, 3.0);
    assert!(reachable(vector![5.0, 0.0], &b, &rope(5.0)));
    assert_eq!(
        attribution(vector![5.0, 0.0], &b, &rope(5.0)),
        Some(Attribution::Direct)
    );
    assert!(reachable(vector![-3.0, -4.0], &b, &rope(5.0)));
    assert!(!reachable(vector![-3.0, -4.1], &b, &rope(5.0)));
}

#[test]
fn interior_point_is_never_reachable() {
    let b = barn(2.0, 3.0);
    assert!(!reachable(vector![1.0, 1.0], &b, &rope(100.0)));
    assert_eq!(attribution(vector![1.0, 1.0], &b, &rope(100.0)), None);
}

#[test]
fn wrap_example_beyond_width_corner() {
    let b = barn(4.0, 3.0);
    let t = rope(10.0);
    let p = vector![9.0, -1.0];
    assert!(reachable(p, &b, &t));
    assert_eq!(
        first_wrap_match(p, &b, &t, &QuadrantPolicy),
        Some((Traversal::Clockwise, Corner::BottomRight))
    );
}

#[test]
fn wrap_losses_follow_perimeter() {
    let b = barn(4.0, 3.0);
    let cw: Vec<f64> = corner_wraps(&b, Traversal::Clockwise)
        .iter()
        .map(|w| w.cumulative_loss)
        .collect();
    let ccw: Vec<f64> = corner_wraps(&b, Traversal::CounterClockwise)
        .iter()
        .map(|w| w.cumulative_loss)
        .collect();
    for (got, want) in cw.iter().zip([4.0, 7.0, 11.0]) {
        assert!((got - want).abs() < 1e-12, "cw {got} vs {want}");
    }
    for (got, want) in ccw.iter().zip([3.0, 7.0, 10.0]) {
        assert!((got - want).abs() < 1e-12, "ccw {got} vs {want}");
    }
    let last = corner_wraps(&b, Traversal::CounterClockwise)[2];
    assert_eq!(last.corner, Corner::BottomRight);
    assert!((last.point - vector![4.0, 0.0]).norm() < 1e-12);
    assert!((last.remaining(&rope(10.0))).abs() < 1e-12);
}

#[test]
fn first_match_prefers_clockwise_order() {
    let b = barn(4.0, 3.0);
    // Within range of both (4,0) and (4,3); the width corner comes first.
    let p = vector![5.0, 4.0];
    assert_eq!(
        first_wrap_match(p, &b, &rope(10.0), &QuadrantPolicy),
        Some((Traversal::Clockwise, Corner::BottomRight))
    );
    // Above the barn: the clockwise walk to (0,3) costs 11, so only ccw has rope.
    let q = vector![1.0, 5.0];
    assert_eq!(
        first_wrap_match(q, &b, &rope(10.0), &QuadrantPolicy),
        Some((Traversal::CounterClockwise, Corner::TopLeft))
    );
    // With more rope the clockwise walk reaches (0,3) and wins.
    assert_eq!(
        first_wrap_match(q, &b, &rope(20.0), &QuadrantPolicy),
        Some((Traversal::Clockwise, Corner::TopLeft))
    );
}

#[test]
fn exhausted_wraps_are_skipped() {
    let b = barn(4.0, 3.0);
    // Rope shorter than both edges: no wrap has rope left.
    let p = vector![4.5, 0.5];
    assert_eq!(first_wrap_match(p, &b, &rope(2.5), &QuadrantPolicy), None);
    assert!(!reachable(p, &b, &rope(2.5)));
}

#[test]
fn quadrant_tests_are_keyed_by_corner() {
    let b = barn(4.0, 3.0);
    let policy = QuadrantPolicy;
    let right = vector![5.0, 1.0];
    let above = vector![1.0, 4.0];
    let diag = vector![5.0, 4.0];
    assert!(policy.test_for(Corner::BottomRight).accepts(right, &b));
    assert!(!policy.test_for(Corner::BottomRight).accepts(above, &b));
    assert!(policy.test_for(Corner::TopLeft).accepts(above, &b));
    assert!(!policy.test_for(Corner::TopLeft).accepts(right, &b));
    assert!(policy.test_for(Corner::TopRight).accepts(diag, &b));
    assert!(!policy.test_for(Corner::TopRight).accepts(right, &b));
}

struct RejectAll;

impl SectorTest for RejectAll {
    fn accepts(&self, _p: crate::Point, _obstacle: &Obstacle) -> bool {
        false
    }
}

impl SectorPolicy for RejectAll {
    fn test_for(&self, _corner: Corner) -> &dyn SectorTest {
        self
    }
}

#[test]
fn custom_policy_replaces_sector_tests_only() {
    let b = barn(4.0, 3.0);
    let t = rope(10.0);
    let p = vector![9.0, -1.0];
    assert_eq!(first_wrap_match(p, &b, &t, &RejectAll), None);
    // The direct rule is unaffected by the sector policy.
    assert!(reachable_with(p, &b, &t, &RejectAll));
    assert!(!reachable_with(vector![1.0, 1.0], &b, &t, &RejectAll));
}

#[test]
fn longer_rope_keeps_fixed_point_set() {
    let b = barn(4.0, 3.0);
    let short = rope(6.0);
    let long = rope(9.0);
    let mut checked = 0;
    for i in -12..=12 {
        for j in -12..=12 {
            let p = vector![i as f64 + 0.37, j as f64 - 0.41];
            if reachable(p, &b, &short) {
                checked += 1;
                assert!(reachable(p, &b, &long), "lost {p:?}");
            }
        }
    }
    assert!(checked > 50);
}

proptest! {
    #[test]
    fn longer_rope_never_shrinks_region(
        w in 0.5f64..10.0,
        h in 0.5f64..10.0,
        l in 0.0f64..20.0,
        extra in 0.0f64..10.0,
        x in -30.0f64..30.0,
        y in -30.0f64..30.0,
    ) {
        let b = barn(w, h);
        let p = vector![x, y];
        if reachable(p, &b, &rope(l)) {
            prop_assert!(reachable(p, &b, &rope(l + extra)));
        }
    }

    #[test]
    fn interior_unreachable_for_any_rope(
        w in 0.5f64..10.0,
        h in 0.5f64..10.0,
        fx in 0.001f64..0.999,
        fy in 0.001f64..0.999,
        l in 0.0f64..100.0,
    ) {
        let b = barn(w, h);
        prop_assert!(!reachable(vector![fx * w, fy * h], &b, &rope(l)));
    }
}
