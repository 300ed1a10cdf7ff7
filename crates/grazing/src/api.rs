//! Curated surface for drivers (CLI, renderers).
//!
//! One import path for the five core operations plus the sweep state; the
//! modules stay the source of truth.

pub use crate::boundary::{
    farthest_reachable, farthest_reachable_with, BoundaryCfg, MAX_MARCH_STEPS,
};
pub use crate::estimate::{
    estimate_area, estimate_area_cfg, estimate_area_seeded, AreaEstimate, EstimateCfg,
};
pub use crate::geom::{InputError, Obstacle, Point, Tether, ANCHOR};
pub use crate::reach::{attribution, reachable, Attribution, Corner, Traversal};
pub use crate::route::rope_bend_points;
pub use crate::sectors::{sectors, Sector, SectorStyle};
pub use crate::sweep::{Frame, Sweep, SweepCfg};

/// Validate raw driver input in one call.
///
/// Pre: `width > 0`, `height > 0`, `rope >= 0`, all finite.
pub fn inputs(width: f64, height: f64, rope: f64) -> Result<(Obstacle, Tether), InputError> {
    Ok((Obstacle::new(width, height)?, Tether::new(rope)?))
}
