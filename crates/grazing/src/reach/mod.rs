//! Reachability predicate for the tethered point.
//!
//! Purpose
//! - Classify a query point as reachable or not, given the barn and the rope.
//! - Keep the corner bookkeeping (`Corner`, `Traversal`, `CornerWrap`) and the
//!   per-corner sector heuristic (`SectorTest`) separate from the control flow,
//!   so the heuristic can be swapped without touching `attribution_with`.
//!
//! Rule (first match wins)
//! 1. Within rope length of the anchor: reachable iff outside the closed barn.
//! 2. Otherwise each clockwise wrap in order, then each counter-clockwise wrap:
//!    reachable if the wrap has rope left, the point lies within the remaining
//!    length of that corner, and the corner's sector test accepts it.
//!
//! Note
//! - A corner is never farther from the anchor than its perimeter loss, so
//!   every wrap disk lies inside the direct disk. In exact arithmetic step 2
//!   never accepts a point step 1 rejected for distance; `first_wrap_match`
//!   exposes it on its own for attribution.

mod corner;
mod sector;

pub use corner::{corner_wraps, Corner, CornerWrap, Traversal};
pub use sector::{
    AboveHeight, BeyondFarCorner, BeyondWidth, QuadrantPolicy, SectorPolicy, SectorTest,
};

use crate::geom::{distance, inside_rectangle, Obstacle, Point, Tether, ANCHOR};

/// Which rule accepted a reachable point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Attribution {
    /// Straight rope from the anchor.
    Direct,
    /// Rope wrapped to `corner`, walking the perimeter in `traversal` order.
    Wrap { traversal: Traversal, corner: Corner },
}

/// True iff `point` lies in the rope-reachable region.
#[inline]
pub fn reachable(point: Point, obstacle: &Obstacle, tether: &Tether) -> bool {
    attribution(point, obstacle, tether).is_some()
}

/// Same as [`reachable`] but with a caller-chosen sector policy.
#[inline]
pub fn reachable_with<P: SectorPolicy + ?Sized>(
    point: Point,
    obstacle: &Obstacle,
    tether: &Tether,
    policy: &P,
) -> bool {
    attribution_with(point, obstacle, tether, policy).is_some()
}

/// The rule that makes `point` reachable, or `None` if it is not.
#[inline]
pub fn attribution(point: Point, obstacle: &Obstacle, tether: &Tether) -> Option<Attribution> {
    attribution_with(point, obstacle, tether, &QuadrantPolicy)
}

pub fn attribution_with<P: SectorPolicy + ?Sized>(
    point: Point,
    obstacle: &Obstacle,
    tether: &Tether,
    policy: &P,
) -> Option<Attribution> {
    if distance(point, ANCHOR) <= tether.length() {
        // The barn occupies the point itself.
        return (!inside_rectangle(point, obstacle)).then_some(Attribution::Direct);
    }
    first_wrap_match(point, obstacle, tether, policy)
        .map(|(traversal, corner)| Attribution::Wrap { traversal, corner })
}

/// Step 2 of the rule in isolation: the first wrap (clockwise corners first,
/// each direction in perimeter order) that accepts `point`.
pub fn first_wrap_match<P: SectorPolicy + ?Sized>(
    point: Point,
    obstacle: &Obstacle,
    tether: &Tether,
    policy: &P,
) -> Option<(Traversal, Corner)> {
    for traversal in Traversal::ALL {
        for wrap in corner_wraps(obstacle, traversal) {
            let remaining = wrap.remaining(tether);
            if remaining <= 0.0 {
                continue;
            }
            if distance(point, wrap.point) <= remaining
                && policy.test_for(wrap.corner).accepts(point, obstacle)
            {
                return Some((traversal, wrap.corner));
            }
        }
    }
    None
}

#[cfg(test)]
mod tests;
