//! Convergence probe for the Monte Carlo area estimate.
//!
//! Runs several seeded estimates per sample count on the 4×4 barn with a rope
//! of 6 and prints mean, spread, and timing, next to the disk-minus-barn area
//! (the barn fits inside the rope circle for this scene).

use std::time::Instant;

use grazing::estimate::{estimate_area_seeded, EstimateCfg};
use grazing::{Obstacle, Tether};

fn main() {
    let barn = Obstacle::new(4.0, 4.0).expect("valid barn");
    let rope = Tether::new(6.0).expect("valid rope");
    let reference = std::f64::consts::PI * 36.0 - 16.0;
    println!("reference_area={reference:.4}");

    for &n in &[1_000usize, 10_000, 100_000, 1_000_000] {
        let start = Instant::now();
        let areas: Vec<f64> = (0..10u64)
            .map(|seed| estimate_area_seeded(&barn, &rope, n, EstimateCfg::default(), seed).area)
            .collect();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1e3;
        let mean = areas.iter().sum::<f64>() / areas.len() as f64;
        let var = areas.iter().map(|a| (a - mean).powi(2)).sum::<f64>() / (areas.len() - 1) as f64;
        println!(
            "samples={n} mean={mean:.4} stddev={:.4} total_ms={elapsed_ms:.1}",
            var.sqrt()
        );
    }
}
