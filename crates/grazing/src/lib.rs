//! Reachability geometry for a rope tethered to the corner of a rectangular barn.
//!
//! The anchor sits at the origin, which is also the bottom-left corner of the
//! barn `[0, w] × [0, h]`. The rope may wrap around the three remaining corners
//! but never passes through the barn.
//!
//! Layout
//! - `geom`: points, obstacle/tether values, distance and containment helpers.
//! - `reach`: the reachability predicate plus corner/sector bookkeeping.
//! - `estimate`: Monte Carlo area estimate with a retained sample cloud.
//! - `boundary`: ray-march to the farthest reachable point along a direction.
//! - `route`: heuristic rope bend points for display.
//! - `sectors`: closed-form quarter/three-quarter disk overlay.
//! - `sweep`: caller-owned animation state stepping along the boundary.
//!
//! API Policy
//! - The estimate and the sector overlay are independent area models and are
//!   never reconciled.
//! - Everything is a pure function of immutable inputs except `Sweep`, which the
//!   caller owns.

pub mod api;
pub mod boundary;
pub mod estimate;
pub mod geom;
pub mod reach;
pub mod route;
pub mod sectors;
pub mod sweep;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{InputError, Obstacle, Point, Tether, ANCHOR};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::boundary::{farthest_reachable, farthest_reachable_with, BoundaryCfg};
    pub use crate::estimate::{
        estimate_area, estimate_area_cfg, estimate_area_seeded, estimate_area_with, AreaEstimate,
        EstimateCfg,
    };
    pub use crate::geom::{distance, inside_rectangle, polar, InputError, Obstacle, Point, Tether};
    pub use crate::reach::{attribution, reachable, Attribution, Corner, Traversal};
    pub use crate::route::rope_bend_points;
    pub use crate::sectors::{sectors, Sector, SectorStyle};
    pub use crate::sweep::{Frame, Sweep, SweepCfg};
    pub use nalgebra::Vector2 as Vec2;
}
