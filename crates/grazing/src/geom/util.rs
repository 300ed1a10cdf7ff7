use super::types::{Obstacle, Point};

/// Euclidean distance between `p` and `q`.
#[inline]
pub fn distance(p: Point, q: Point) -> f64 {
    (p - q).norm()
}

/// Closed containment: `0 <= x <= w` and `0 <= y <= h`.
#[inline]
pub fn inside_rectangle(p: Point, rect: &Obstacle) -> bool {
    (0.0..=rect.width()).contains(&p.x) && (0.0..=rect.height()).contains(&p.y)
}

/// Point at radius `r` along direction `angle` (radians, CCW from +x).
#[inline]
pub fn polar(angle: f64, r: f64) -> Point {
    Point::new(angle.cos() * r, angle.sin() * r)
}
