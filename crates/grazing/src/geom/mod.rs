//! Plane geometry for the barn-and-rope model.
//!
//! Purpose
//! - Hold the two immutable inputs (`Obstacle`, `Tether`) and the handful of
//!   primitives every other module builds on.
//! - Points are plain `nalgebra::Vector2<f64>` values; the anchor is the origin.
//!
//! Conventions
//! - The barn is the closed rectangle `[0, w] × [0, h]`; its boundary counts as
//!   inside, so the anchor itself is inside.

mod types;
mod util;

pub use types::{InputError, Obstacle, Point, Tether, ANCHOR};
pub use util::{distance, inside_rectangle, polar};
