//! Rope bend points for drawing the tether.
//!
//! A display aid: when the target is out of straight-line range, pick one
//! corner by which side of the barn the target is on. This is not a taut-rope
//! solve and does not consult `reach::attribution`.

use crate::geom::{distance, Obstacle, Point, Tether, ANCHOR};
use crate::reach::Corner;

/// Bend points from the anchor toward `point`, in rope order (possibly empty).
///
/// - Within rope length of the anchor: empty (straight rope).
/// - Right of the width edge (`x >= w`): bend at `(w, 0)`.
/// - Otherwise, above the barn or below/left of it: bend at `(0, h)`.
pub fn rope_bend_points(point: Point, obstacle: &Obstacle, tether: &Tether) -> Vec<Point> {
    if distance(point, ANCHOR) <= tether.length() {
        return Vec::new();
    }
    let corner = if point.x >= obstacle.width() {
        Corner::BottomRight
    } else {
        Corner::TopLeft
    };
    vec![corner.point(obstacle)]
}
