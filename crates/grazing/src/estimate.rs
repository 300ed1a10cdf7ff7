//! Monte Carlo estimate of the reachable area.
//!
//! Model
//! - Sample uniformly in the square `[-R, R]²` with `R = L + max(w, h)`, count
//!   points accepted by `reach::reachable`, scale the hit rate by `(2R)²`.
//! - A bounded random subset of hits is kept for display. Retention draws come
//!   from their own RNG stream, so they never perturb the samples and cannot
//!   change `hits`, `hit_rate`, or `area`.
//! - `estimate_area` seeds from OS entropy: repeated calls differ by sampling
//!   noise. `estimate_area_seeded` replays exactly.

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Obstacle, Point, Tether};
use crate::reach::reachable;

/// Retention settings for the display subsample.
#[derive(Clone, Copy, Debug)]
pub struct EstimateCfg {
    /// Maximum number of retained hit points.
    pub retain_cap: usize,
    /// Probability of keeping each hit while below the cap. Clamped to [0, 1].
    pub retain_prob: f64,
}

impl Default for EstimateCfg {
    fn default() -> Self {
        Self {
            retain_cap: 2000,
            retain_prob: 0.1,
        }
    }
}

/// Result of one estimator run.
#[derive(Clone, Debug)]
pub struct AreaEstimate {
    pub area: f64,
    pub hits: usize,
    pub sample_count: usize,
    pub hit_rate: f64,
    /// Half side `R` of the sampling square.
    pub half_extent: f64,
    /// Retained hits, display only.
    pub samples: Vec<Point>,
    pub elapsed: Duration,
}

impl AreaEstimate {
    fn zero(half_extent: f64) -> Self {
        Self {
            area: 0.0,
            hits: 0,
            sample_count: 0,
            hit_rate: 0.0,
            half_extent,
            samples: Vec::new(),
            elapsed: Duration::ZERO,
        }
    }
}

/// Half side of the sampling square: rope length plus the longer barn side.
#[inline]
pub fn half_extent(obstacle: &Obstacle, tether: &Tether) -> f64 {
    tether.length() + obstacle.max_side()
}

/// Entropy-seeded estimate with default retention.
pub fn estimate_area(obstacle: &Obstacle, tether: &Tether, sample_count: usize) -> AreaEstimate {
    estimate_area_cfg(obstacle, tether, sample_count, EstimateCfg::default())
}

/// Entropy-seeded estimate with caller-chosen retention.
pub fn estimate_area_cfg(
    obstacle: &Obstacle,
    tether: &Tether,
    sample_count: usize,
    cfg: EstimateCfg,
) -> AreaEstimate {
    let mut sample_rng = StdRng::from_entropy();
    let mut retain_rng = StdRng::from_entropy();
    estimate_area_with(
        obstacle,
        tether,
        sample_count,
        cfg,
        &mut sample_rng,
        &mut retain_rng,
    )
}

/// Reproducible estimate: `seed` determines both RNG streams.
pub fn estimate_area_seeded(
    obstacle: &Obstacle,
    tether: &Tether,
    sample_count: usize,
    cfg: EstimateCfg,
    seed: u64,
) -> AreaEstimate {
    let mut sample_rng = stream_rng(seed, 0);
    let mut retain_rng = stream_rng(seed, 1);
    estimate_area_with(
        obstacle,
        tether,
        sample_count,
        cfg,
        &mut sample_rng,
        &mut retain_rng,
    )
}

/// Core loop. `sample_count == 0` returns the zero result without sampling.
pub fn estimate_area_with<R: Rng, S: Rng>(
    obstacle: &Obstacle,
    tether: &Tether,
    sample_count: usize,
    cfg: EstimateCfg,
    sample_rng: &mut R,
    retain_rng: &mut S,
) -> AreaEstimate {
    let max_r = half_extent(obstacle, tether);
    if sample_count == 0 {
        return AreaEstimate::zero(max_r);
    }
    let retain_prob = cfg.retain_prob.clamp(0.0, 1.0);
    let start = Instant::now();
    let mut hits = 0usize;
    let mut samples = Vec::with_capacity(cfg.retain_cap.min(1024));
    for _ in 0..sample_count {
        let x = (sample_rng.gen::<f64>() * 2.0 - 1.0) * max_r;
        let y = (sample_rng.gen::<f64>() * 2.0 - 1.0) * max_r;
        let p = Point::new(x, y);
        if !reachable(p, obstacle, tether) {
            continue;
        }
        hits += 1;
        if samples.len() < cfg.retain_cap && retain_rng.gen::<f64>() < retain_prob {
            samples.push(p);
        }
    }
    let hit_rate = hits as f64 / sample_count as f64;
    let side = 2.0 * max_r;
    let area = hit_rate * side * side;
    let elapsed = start.elapsed();
    tracing::debug!(
        sample_count,
        hits,
        area,
        retained = samples.len(),
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "area_estimate"
    );
    AreaEstimate {
        area,
        hits,
        sample_count,
        hit_rate,
        half_extent: max_r,
        samples,
        elapsed,
    }
}

/// Independent, stable RNG per `(seed, stream)` pair.
fn stream_rng(seed: u64, stream: u64) -> StdRng {
    // SplitMix64 finalizer.
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }
    StdRng::seed_from_u64(mix(seed ^ mix(stream.wrapping_add(0x9e3779b97f4a7c15))))
}
