//! Closed-form sector overlay.
//!
//! A three-quarter disk of the full rope around the anchor, plus a quarter
//! disk of the leftover rope around each of the two nearest corners in each
//! traversal direction. The areas are rough and deliberately independent of
//! `estimate`; nothing sums them.

use std::f64::consts::PI;

use crate::geom::{Obstacle, Point, Tether, ANCHOR};
use crate::reach::{corner_wraps, Corner, Traversal};

/// Wrap corners considered per traversal (nearest first).
const WRAPS_PER_TRAVERSAL: usize = 2;

/// Rendering hint for a sector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SectorStyle {
    Main,
    WrapClockwise,
    WrapCounterClockwise,
}

impl SectorStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            SectorStyle::Main => "main",
            SectorStyle::WrapClockwise => "wrap_cw",
            SectorStyle::WrapCounterClockwise => "wrap_ccw",
        }
    }
}

/// One overlay sector.
#[derive(Clone, Debug, PartialEq)]
pub struct Sector {
    pub label: String,
    pub center: Point,
    pub radius: f64,
    pub approximate_area: f64,
    pub style: SectorStyle,
}

/// Main sector first, then clockwise wraps, then counter-clockwise wraps; a
/// wrap appears only while rope remains past its corner.
pub fn sectors(obstacle: &Obstacle, tether: &Tether) -> Vec<Sector> {
    let rope = tether.length();
    let mut out = vec![Sector {
        label: "main".to_string(),
        center: ANCHOR,
        radius: rope,
        approximate_area: 0.75 * PI * rope * rope,
        style: SectorStyle::Main,
    }];
    for traversal in Traversal::ALL {
        let style = match traversal {
            Traversal::Clockwise => SectorStyle::WrapClockwise,
            Traversal::CounterClockwise => SectorStyle::WrapCounterClockwise,
        };
        for wrap in corner_wraps(obstacle, traversal)
            .iter()
            .take(WRAPS_PER_TRAVERSAL)
        {
            let remaining = wrap.remaining(tether);
            if remaining <= 0.0 {
                continue;
            }
            out.push(Sector {
                label: wrap_label(traversal, wrap.corner),
                center: wrap.point,
                radius: remaining,
                approximate_area: 0.25 * PI * remaining * remaining,
                style,
            });
        }
    }
    out
}

fn wrap_label(traversal: Traversal, corner: Corner) -> String {
    format!("{}:{}", traversal.as_str(), corner.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn barn(w: f64, h: f64) -> Obstacle {
        Obstacle::new(w, h).unwrap()
    }

    #[test]
    fn main_sector_always_present() {
        let s = sectors(&barn(4.0, 3.0), &Tether::new(0.0).unwrap());
        assert_eq!(s.len(), 1);
        assert_eq!(s[0].style, SectorStyle::Main);
        assert_eq!(s[0].approximate_area, 0.0);

        let s = sectors(&barn(4.0, 3.0), &Tether::new(2.0).unwrap());
        assert_eq!(s.len(), 1);
        assert!((s[0].approximate_area - 3.0 * PI).abs() < 1e-12);
    }

    #[test]
    fn four_wraps_with_long_rope() {
        let s = sectors(&barn(4.0, 3.0), &Tether::new(10.0).unwrap());
        let labels: Vec<&str> = s.iter().map(|x| x.label.as_str()).collect();
        assert_eq!(
            labels,
            ["main", "cw:bottom_right", "cw:top_right", "ccw:top_left", "ccw:top_right"]
        );
        let radii: Vec<f64> = s.iter().map(|x| x.radius).collect();
        for (got, want) in radii.iter().zip([10.0, 6.0, 3.0, 7.0, 3.0]) {
            assert!((got - want).abs() < 1e-12, "{got} vs {want}");
        }
        assert!((s[1].approximate_area - 9.0 * PI).abs() < 1e-9);
        assert_eq!(s[3].style, SectorStyle::WrapCounterClockwise);
        assert_eq!(s[3].center, Point::new(0.0, 3.0));
    }

    #[test]
    fn exhausted_wraps_are_dropped() {
        // Rope 5: cw losses 4, 7; ccw losses 3, 7.
        let s = sectors(&barn(4.0, 3.0), &Tether::new(5.0).unwrap());
        let labels: Vec<&str> = s.iter().map(|x| x.label.as_str()).collect();
        assert_eq!(labels, ["main", "cw:bottom_right", "ccw:top_left"]);
    }
}
