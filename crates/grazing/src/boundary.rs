//! Farthest reachable point along a ray from the anchor.
//!
//! A linear march over fixed radii, not a closed-form boundary solve. The
//! march assumes reachability along a ray is one contiguous interval: it stops
//! at the first miss after a hit, so a second, separated reachable stretch
//! farther out is never seen.
//!
//! At most `MAX_MARCH_STEPS + 1` radii are sampled per ray.
//! `farthest_reachable_with` rejects a step that would need more for the given
//! scene; the infallible entry points truncate the march at that many radii.

use crate::geom::{polar, InputError, Obstacle, Point, Tether, ANCHOR};
use crate::reach::reachable;

/// Upper bound on the radius index of one march.
pub const MAX_MARCH_STEPS: u64 = 1 << 20;

/// March parameters.
#[derive(Clone, Copy, Debug)]
pub struct BoundaryCfg {
    /// First radius as a fraction of the rope length.
    pub start_frac: f64,
    /// Radius increment (distance units). Must be positive.
    pub step: f64,
}

impl Default for BoundaryCfg {
    fn default() -> Self {
        Self {
            start_frac: 0.5,
            step: 2.0,
        }
    }
}

impl BoundaryCfg {
    pub fn validate(&self) -> Result<(), InputError> {
        if !(self.step.is_finite() && self.step > 0.0) {
            return Err(InputError::config("step must be finite and > 0"));
        }
        if !(self.start_frac.is_finite() && self.start_frac >= 0.0) {
            return Err(InputError::config("start_frac must be finite and >= 0"));
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a bound on the number of radii the
    /// march needs for this scene.
    pub fn validate_for(&self, obstacle: &Obstacle, tether: &Tether) -> Result<(), InputError> {
        self.validate()?;
        match last_index(obstacle, tether, *self) {
            Some(n) if n > MAX_MARCH_STEPS => Err(InputError::config(format!(
                "step {} needs {} radii for this scene, at most {} allowed",
                self.step,
                n.saturating_add(1),
                MAX_MARCH_STEPS + 1
            ))),
            _ => Ok(()),
        }
    }
}

/// Farthest reachable point along `angle` with the default march, or the
/// anchor when no sampled radius is reachable.
pub fn farthest_reachable(angle: f64, obstacle: &Obstacle, tether: &Tether) -> Point {
    march(angle, obstacle, tether, BoundaryCfg::default())
}

/// Same as [`farthest_reachable`] with caller-chosen march parameters.
pub fn farthest_reachable_with(
    angle: f64,
    obstacle: &Obstacle,
    tether: &Tether,
    cfg: BoundaryCfg,
) -> Result<Point, InputError> {
    cfg.validate_for(obstacle, tether)?;
    Ok(march(angle, obstacle, tether, cfg))
}

/// Index of the last radius `r_start + k * step` not beyond `r_end`, or `None`
/// when the march starts past the end. Saturates at `u64::MAX`.
fn last_index(obstacle: &Obstacle, tether: &Tether, cfg: BoundaryCfg) -> Option<u64> {
    let r_start = cfg.start_frac * tether.length();
    let r_end = tether.length() + obstacle.max_side();
    if r_start > r_end {
        return None;
    }
    Some(((r_end - r_start) / cfg.step).floor() as u64)
}

pub(crate) fn march(angle: f64, obstacle: &Obstacle, tether: &Tether, cfg: BoundaryCfg) -> Point {
    let Some(last) = last_index(obstacle, tether, cfg) else {
        return ANCHOR;
    };
    let r_start = cfg.start_frac * tether.length();
    let mut best: Option<f64> = None;
    for k in 0..=last.min(MAX_MARCH_STEPS) {
        let r = r_start + k as f64 * cfg.step;
        if reachable(polar(angle, r), obstacle, tether) {
            best = Some(r);
        } else if best.is_some() {
            break;
        }
    }
    best.map_or(ANCHOR, |r| polar(angle, r))
}
