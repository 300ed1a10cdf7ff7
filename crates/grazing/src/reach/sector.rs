//! Per-corner "valid sector" tests.
//!
//! The shipped policy is a quadrant heuristic: each corner accepts points
//! beyond it relative to the barn, using only comparisons against the barn
//! edges. It does not compute the angular sector swept by a rope pivoting at
//! the corner and can misattribute points near the diagonal between two
//! corners' wrap regions. The same test applies to a corner in both traversal
//! directions.

use super::corner::Corner;
use crate::geom::{Obstacle, Point};

/// Acceptance test owned by one corner.
pub trait SectorTest {
    fn accepts(&self, p: Point, obstacle: &Obstacle) -> bool;
}

/// Maps each corner to its sector test.
pub trait SectorPolicy {
    fn test_for(&self, corner: Corner) -> &dyn SectorTest;
}

/// `(w, 0)`: right of the width edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeyondWidth;

impl SectorTest for BeyondWidth {
    #[inline]
    fn accepts(&self, p: Point, obstacle: &Obstacle) -> bool {
        p.x >= obstacle.width()
    }
}

/// `(w, h)`: the quadrant diagonally beyond the far corner.
#[derive(Clone, Copy, Debug, Default)]
pub struct BeyondFarCorner;

impl SectorTest for BeyondFarCorner {
    #[inline]
    fn accepts(&self, p: Point, obstacle: &Obstacle) -> bool {
        p.x >= obstacle.width() && p.y >= obstacle.height()
    }
}

/// `(0, h)`: above the height edge.
#[derive(Clone, Copy, Debug, Default)]
pub struct AboveHeight;

impl SectorTest for AboveHeight {
    #[inline]
    fn accepts(&self, p: Point, obstacle: &Obstacle) -> bool {
        p.y >= obstacle.height()
    }
}

/// The quadrant heuristic used by [`super::reachable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct QuadrantPolicy;

impl SectorPolicy for QuadrantPolicy {
    fn test_for(&self, corner: Corner) -> &dyn SectorTest {
        match corner {
            Corner::BottomRight => &BeyondWidth,
            Corner::TopRight => &BeyondFarCorner,
            Corner::TopLeft => &AboveHeight,
        }
    }
}
