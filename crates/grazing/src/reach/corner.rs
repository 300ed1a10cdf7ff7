//! Corner enumeration and perimeter walks from the anchor.

use crate::geom::{distance, Obstacle, Point, Tether, ANCHOR};

/// The three barn corners other than the anchor (y axis up).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Corner {
    /// `(w, 0)`, the end of the width edge.
    BottomRight,
    /// `(w, h)`, diagonally opposite the anchor.
    TopRight,
    /// `(0, h)`, the end of the height edge.
    TopLeft,
}

impl Corner {
    #[inline]
    pub fn point(self, obstacle: &Obstacle) -> Point {
        match self {
            Corner::BottomRight => Point::new(obstacle.width(), 0.0),
            Corner::TopRight => Point::new(obstacle.width(), obstacle.height()),
            Corner::TopLeft => Point::new(0.0, obstacle.height()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Corner::BottomRight => "bottom_right",
            Corner::TopRight => "top_right",
            Corner::TopLeft => "top_left",
        }
    }
}

/// Direction in which the rope walks the perimeter away from the anchor.
///
/// `Clockwise` follows the width edge first, `CounterClockwise` the height edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Traversal {
    Clockwise,
    CounterClockwise,
}

impl Traversal {
    /// Evaluation order for the predicate.
    pub const ALL: [Traversal; 2] = [Traversal::Clockwise, Traversal::CounterClockwise];

    /// Corners in the order the walk reaches them.
    pub fn corners(self) -> [Corner; 3] {
        match self {
            Traversal::Clockwise => [Corner::BottomRight, Corner::TopRight, Corner::TopLeft],
            Traversal::CounterClockwise => [Corner::TopLeft, Corner::TopRight, Corner::BottomRight],
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Traversal::Clockwise => "cw",
            Traversal::CounterClockwise => "ccw",
        }
    }
}

/// A corner reached by walking the perimeter, plus the rope spent getting there.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerWrap {
    pub traversal: Traversal,
    pub corner: Corner,
    pub point: Point,
    pub cumulative_loss: f64,
}

impl CornerWrap {
    /// Rope left once the corner is reached; may be zero or negative.
    #[inline]
    pub fn remaining(&self, tether: &Tether) -> f64 {
        tether.length() - self.cumulative_loss
    }
}

/// Wraps for one traversal, built on demand by summing the edges walked.
///
/// Clockwise losses are `w, w+h, 2w+h`; counter-clockwise `h, h+w, w+2h`.
pub fn corner_wraps(obstacle: &Obstacle, traversal: Traversal) -> [CornerWrap; 3] {
    let mut at = ANCHOR;
    let mut loss = 0.0;
    traversal.corners().map(|corner| {
        let point = corner.point(obstacle);
        loss += distance(at, point);
        at = point;
        CornerWrap {
            traversal,
            corner,
            point,
            cumulative_loss: loss,
        }
    })
}
