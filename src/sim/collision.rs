//! Collision predicates for circle entities
//!
//! Every entity collides as a bounding circle (center + radius), so the
//! whole collision story is an edge-to-edge gap computation plus the
//! out-of-bounds test that culls projectiles.

use glam::Vec2;

use crate::consts::HIT_GAP;

/// Edge-to-edge gap between two circles (negative when overlapping)
#[inline]
pub fn circle_gap(a: Vec2, ra: f32, b: Vec2, rb: f32) -> f32 {
    a.distance(b) - ra - rb
}

/// Hit rule: circles count as touching while the gap is under the slack
#[inline]
pub fn circles_touch(a: Vec2, ra: f32, b: Vec2, rb: f32) -> bool {
    circle_gap(a, ra, b, rb) < HIT_GAP
}

/// True once a bounding circle has fully left `[0, width] × [0, height]`
/// past any single side
#[inline]
pub fn fully_outside(pos: Vec2, radius: f32, width: f32, height: f32) -> bool {
    pos.x + radius < 0.0
        || pos.x - radius > width
        || pos.y + radius < 0.0
        || pos.y - radius > height
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_gap_of_touching_circles_is_zero() {
        // Radii 10 and 5, centers 15 apart
        let gap = circle_gap(Vec2::new(0.0, 0.0), 10.0, Vec2::new(15.0, 0.0), 5.0);
        assert!(gap.abs() < 1e-4);
    }

    #[test]
    fn test_touch_includes_the_slack_band() {
        let a = Vec2::new(0.0, 0.0);
        // Edges 0.5 apart: inside the slack, counts as a hit
        assert!(circles_touch(a, 10.0, Vec2::new(15.5, 0.0), 5.0));
        // Edges 2 apart: clear miss
        assert!(!circles_touch(a, 10.0, Vec2::new(17.0, 0.0), 5.0));
    }

    #[test]
    fn test_straddling_an_edge_is_not_outside() {
        // Center past the left edge but rim still visible
        assert!(!fully_outside(Vec2::new(-2.0, 50.0), 5.0, 100.0, 100.0));
        // Rim fully past the left edge
        assert!(fully_outside(Vec2::new(-6.0, 50.0), 5.0, 100.0, 100.0));
        // Fully below the bottom
        assert!(fully_outside(Vec2::new(50.0, 106.0), 5.0, 100.0, 100.0));
    }

    proptest! {
        #[test]
        fn gap_is_symmetric(
            ax in -500f32..500.0, ay in -500f32..500.0,
            bx in -500f32..500.0, by in -500f32..500.0,
            ra in 0.1f32..50.0, rb in 0.1f32..50.0,
        ) {
            let a = Vec2::new(ax, ay);
            let b = Vec2::new(bx, by);
            let fwd = circle_gap(a, ra, b, rb);
            let rev = circle_gap(b, rb, a, ra);
            prop_assert!((fwd - rev).abs() < 1e-3);
        }

        #[test]
        fn circle_inside_field_is_never_outside(
            r in 0.1f32..30.0,
            fx in 0f32..1.0, fy in 0f32..1.0,
        ) {
            let (w, h) = (640.0, 480.0);
            // Any center at least a radius away from every side
            let pos = Vec2::new(r + fx * (w - 2.0 * r), r + fy * (h - 2.0 * r));
            prop_assert!(!fully_outside(pos, r, w, h));
        }

        #[test]
        fn overlapping_circles_always_touch(
            ra in 1f32..50.0, rb in 1f32..50.0,
            f in 0f32..1.0, angle in 0f32..std::f32::consts::TAU,
        ) {
            // Center distance strictly under the radius sum
            let d = f * (ra + rb) * 0.99;
            let b = Vec2::new(angle.cos(), angle.sin()) * d;
            prop_assert!(circles_touch(Vec2::ZERO, ra, b, rb));
        }
    }
}
