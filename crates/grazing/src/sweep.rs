//! Caller-owned animation state for sweeping the region boundary.
//!
//! Each `tick` advances the angle, locates the farthest reachable point along
//! it, and routes the rope there. The optional trace keeps the most recent
//! positions in a bounded FIFO. Nothing here is global; a driver holds one
//! `Sweep` per running simulation and calls `reset` on restart.
//!
//! `Sweep::new` does not see the scene, so a step too fine for it is not
//! rejected here; check with `BoundaryCfg::validate_for` first, or each tick
//! marches a truncated ray.

use std::collections::VecDeque;

use crate::boundary::{march, BoundaryCfg};
use crate::geom::{InputError, Obstacle, Point, Tether};
use crate::route::rope_bend_points;

/// Sweep parameters.
#[derive(Clone, Copy, Debug)]
pub struct SweepCfg {
    /// Angle advance per tick (radians).
    pub speed: f64,
    /// Trace length; `0` disables tracing.
    pub trace_cap: usize,
    pub boundary: BoundaryCfg,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            speed: 0.01,
            trace_cap: 0,
            boundary: BoundaryCfg::default(),
        }
    }
}

/// One animation step.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tick: u64,
    pub angle: f64,
    pub position: Point,
    pub bends: Vec<Point>,
}

#[derive(Clone, Debug)]
pub struct Sweep {
    cfg: SweepCfg,
    angle: f64,
    tick: u64,
    trace: VecDeque<Point>,
}

impl Sweep {
    pub fn new(cfg: SweepCfg) -> Result<Self, InputError> {
        if !cfg.speed.is_finite() {
            return Err(InputError::config("speed must be finite"));
        }
        cfg.boundary.validate()?;
        Ok(Self {
            cfg,
            angle: 0.0,
            tick: 0,
            trace: VecDeque::with_capacity(cfg.trace_cap.min(1024)),
        })
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Traced positions, oldest first.
    pub fn trace(&self) -> impl Iterator<Item = &Point> {
        self.trace.iter()
    }

    pub fn reset(&mut self) {
        self.angle = 0.0;
        self.tick = 0;
        self.trace.clear();
    }

    pub fn tick(&mut self, obstacle: &Obstacle, tether: &Tether) -> Frame {
        self.angle += self.cfg.speed;
        self.tick += 1;
        let position = march(self.angle, obstacle, tether, self.cfg.boundary);
        let bends = rope_bend_points(position, obstacle, tether);
        if self.cfg.trace_cap > 0 {
            if self.trace.len() == self.cfg.trace_cap {
                self.trace.pop_front();
            }
            self.trace.push_back(position);
        }
        Frame {
            tick: self.tick,
            angle: self.angle,
            position,
            bends,
        }
    }
}
