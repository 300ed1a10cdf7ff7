//! Input values and their validation.
//!
//! - `Obstacle`: barn dimensions, strictly positive.
//! - `Tether`: rope length, non-negative.
//! - `InputError`: precondition failures surfaced to the caller unchanged.

use nalgebra::Vector2;
use std::fmt;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// The tether anchor: the barn corner at the origin.
pub const ANCHOR: Point = Vector2::new(0.0, 0.0);

/// Errors surfaced when constructing inputs or configs.
#[derive(Clone, Debug, PartialEq)]
pub enum InputError {
    /// A dimension is non-positive (or negative for the rope) or not finite.
    InvalidDimension { field: &'static str, value: f64 },
    /// A tuning parameter is out of range.
    InvalidConfig { reason: String },
}

impl InputError {
    pub(crate) fn config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { field, value } => {
                write!(f, "invalid dimension: {field} = {value}")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for InputError {}

/// Axis-aligned barn occupying `[0, width] × [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Obstacle {
    width: f64,
    height: f64,
}

impl Obstacle {
    /// Pre: `width > 0`, `height > 0`, both finite. No clamping is applied.
    pub fn new(width: f64, height: f64) -> Result<Self, InputError> {
        if !(width.is_finite() && width > 0.0) {
            return Err(InputError::InvalidDimension {
                field: "width",
                value: width,
            });
        }
        if !(height.is_finite() && height > 0.0) {
            return Err(InputError::InvalidDimension {
                field: "height",
                value: height,
            });
        }
        Ok(Self { width, height })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Longer of the two sides; pads the sampling square and the ray-march range.
    #[inline]
    pub fn max_side(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Rope length, measured along the stretched (possibly wrapped) path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tether {
    length: f64,
}

impl Tether {
    /// Pre: `length >= 0` and finite. A zero-length rope is valid.
    pub fn new(length: f64) -> Result<Self, InputError> {
        if !(length.is_finite() && length >= 0.0) {
            return Err(InputError::InvalidDimension {
                field: "length",
                value: length,
            });
        }
        Ok(Self { length })
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length
    }
}
