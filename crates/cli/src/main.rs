use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use grazing::api::{
    attribution, estimate_area_cfg, estimate_area_seeded, inputs, rope_bend_points, sectors,
    Attribution, BoundaryCfg, EstimateCfg, Obstacle, Point, Sweep, SweepCfg, Tether,
};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod table;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Tethered grazing: reachable area, overlay sectors, boundary sweep")]
struct Cmd {
    /// Log debug events, including the library estimator
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Barn and rope, validated before any computation.
#[derive(Args, Clone, Copy, Debug, Serialize)]
struct Scene {
    /// Barn width (along +x from the anchor)
    #[arg(long)]
    width: f64,
    /// Barn height (along +y from the anchor)
    #[arg(long)]
    height: f64,
    /// Rope length
    #[arg(long)]
    rope: f64,
}

impl Scene {
    fn inputs(&self) -> Result<(Obstacle, Tether)> {
        Ok(inputs(self.width, self.height, self.rope)?)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Monte Carlo estimate of the reachable area
    Area {
        #[command(flatten)]
        scene: Scene,
        #[arg(long, default_value_t = 50_000)]
        samples: usize,
        /// Replayable run; omitted means entropy-seeded
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = EstimateCfg::default().retain_cap)]
        retain_cap: usize,
        #[arg(long, default_value_t = EstimateCfg::default().retain_prob)]
        retain_prob: f64,
        /// Write the retained sample cloud (.csv or .parquet)
        #[arg(long)]
        out: Option<String>,
    },
    /// Closed-form overlay sectors
    Sectors {
        #[command(flatten)]
        scene: Scene,
    },
    /// Classify one point and route the rope to it
    Probe {
        #[command(flatten)]
        scene: Scene,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Step the boundary sweep and emit one frame per tick
    Sweep {
        #[command(flatten)]
        scene: Scene,
        #[arg(long, default_value_t = 628)]
        ticks: u64,
        /// Radians per tick
        #[arg(long, default_value_t = SweepCfg::default().speed)]
        speed: f64,
        /// Keep the last N positions as a trace
        #[arg(long, default_value_t = 0)]
        trace: usize,
        #[arg(long, default_value_t = BoundaryCfg::default().step)]
        step: f64,
        /// Write frames (.csv or .parquet) instead of printing them
        #[arg(long)]
        out: Option<String>,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Area {
            scene,
            samples,
            seed,
            retain_cap,
            retain_prob,
            out,
        } => {
            let cfg = EstimateCfg {
                retain_cap,
                retain_prob,
            };
            area(scene, samples, seed, cfg, out)
        }
        Action::Sectors { scene } => overlay(scene),
        Action::Probe { scene, x, y } => probe(scene, Point::new(x, y)),
        Action::Sweep {
            scene,
            ticks,
            speed,
            trace,
            step,
            out,
        } => {
            let cfg = SweepCfg {
                speed,
                trace_cap: trace,
                boundary: BoundaryCfg {
                    step,
                    ..BoundaryCfg::default()
                },
            };
            sweep(scene, ticks, cfg, out)
        }
        Action::Report => report(),
    }
}

#[derive(Serialize)]
struct AreaReport {
    scene: Scene,
    seed: Option<u64>,
    sample_count: usize,
    hits: usize,
    hit_rate: f64,
    area: f64,
    half_extent: f64,
    retained: usize,
    elapsed_ms: f64,
    samples_out: Option<String>,
}

fn area(
    scene: Scene,
    samples: usize,
    seed: Option<u64>,
    cfg: EstimateCfg,
    out: Option<String>,
) -> Result<()> {
    let (barn, rope) = scene.inputs()?;
    tracing::info!(?scene, samples, seed = ?seed, "area");
    let est = match seed {
        Some(seed) => estimate_area_seeded(&barn, &rope, samples, cfg, seed),
        None => estimate_area_cfg(&barn, &rope, samples, cfg),
    };
    tracing::info!(area = est.area, hit_rate = est.hit_rate, "area_done");

    if let Some(out) = &out {
        let mut df = table::points_frame(&est.samples)?;
        table::write_table(Path::new(out), &mut df)?;
        let params = json!({
            "scene": scene,
            "samples": samples,
            "seed": seed,
            "retain_cap": cfg.retain_cap,
            "retain_prob": cfg.retain_prob,
            "area": est.area,
        });
        write_sidecar(out, Payload::new("area", params))?;
    }

    let report = AreaReport {
        scene,
        seed,
        sample_count: est.sample_count,
        hits: est.hits,
        hit_rate: est.hit_rate,
        area: est.area,
        half_extent: est.half_extent,
        retained: est.samples.len(),
        elapsed_ms: est.elapsed.as_secs_f64() * 1e3,
        samples_out: out,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[derive(Serialize)]
struct SectorRow {
    label: String,
    center: [f64; 2],
    radius: f64,
    approximate_area: f64,
    style: &'static str,
}

fn overlay(scene: Scene) -> Result<()> {
    let (barn, rope) = scene.inputs()?;
    let rows: Vec<SectorRow> = sectors(&barn, &rope)
        .into_iter()
        .map(|s| SectorRow {
            label: s.label,
            center: [s.center.x, s.center.y],
            radius: s.radius,
            approximate_area: s.approximate_area,
            style: s.style.as_str(),
        })
        .collect();
    tracing::info!(?scene, sectors = rows.len(), "sectors");
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}

#[derive(Serialize)]
struct ProbeReport {
    point: [f64; 2],
    reachable: bool,
    /// `direct`, `cw:<corner>`, `ccw:<corner>`, or null.
    attribution: Option<String>,
    bends: Vec<[f64; 2]>,
}

fn probe(scene: Scene, point: Point) -> Result<()> {
    let (barn, rope) = scene.inputs()?;
    let attr = attribution(point, &barn, &rope);
    let report = ProbeReport {
        point: [point.x, point.y],
        reachable: attr.is_some(),
        attribution: attr.map(attribution_label),
        bends: rope_bend_points(point, &barn, &rope)
            .iter()
            .map(|b| [b.x, b.y])
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn attribution_label(attr: Attribution) -> String {
    match attr {
        Attribution::Direct => "direct".to_string(),
        Attribution::Wrap { traversal, corner } => {
            format!("{}:{}", traversal.as_str(), corner.as_str())
        }
    }
}

#[derive(Serialize)]
struct FrameRow {
    tick: u64,
    angle: f64,
    position: [f64; 2],
    bends: Vec<[f64; 2]>,
}

fn sweep(scene: Scene, ticks: u64, cfg: SweepCfg, out: Option<String>) -> Result<()> {
    let (barn, rope) = scene.inputs()?;
    if ticks == 0 {
        bail!("--ticks must be at least 1");
    }
    cfg.boundary.validate_for(&barn, &rope)?;
    let mut state = Sweep::new(cfg)?;
    let frames: Vec<_> = (0..ticks).map(|_| state.tick(&barn, &rope)).collect();
    tracing::info!(?scene, ticks, final_angle = state.angle(), "sweep");

    match &out {
        Some(out) => {
            let mut df = table::frames_frame(&frames)?;
            table::write_table(Path::new(out), &mut df)?;
            let params = json!({
                "scene": scene,
                "ticks": ticks,
                "speed": cfg.speed,
                "step": cfg.boundary.step,
            });
            write_sidecar(out, Payload::new("sweep", params))?;
            let trace: Vec<[f64; 2]> = state.trace().map(|p| [p.x, p.y]).collect();
            let summary = json!({
                "ticks": ticks,
                "final_angle": state.angle(),
                "frames_out": out,
                "trace": trace,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        None => {
            let rows: Vec<FrameRow> = frames
                .iter()
                .map(|f| FrameRow {
                    tick: f.tick,
                    angle: f.angle,
                    position: [f.position.x, f.position.y],
                    bends: f.bends.iter().map(|b| [b.x, b.y]).collect(),
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
        }
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "grazing_version": grazing::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use grazing::api::{Corner, Traversal};

    #[test]
    fn sweep_defaults_follow_library_config() {
        let cmd = Cmd::try_parse_from([
            "cli", "sweep", "--width", "4", "--height", "3", "--rope", "10",
        ])
        .unwrap();
        match cmd.action {
            Action::Sweep {
                ticks,
                speed,
                trace,
                step,
                out,
                ..
            } => {
                assert_eq!(ticks, 628);
                assert_eq!(speed, 0.01);
                assert_eq!(trace, 0);
                assert_eq!(step, 2.0);
                assert!(out.is_none());
            }
            _ => panic!("expected sweep"),
        }
    }

    #[test]
    fn probe_accepts_negative_coordinates() {
        let cmd = Cmd::try_parse_from([
            "cli", "probe", "--width", "4", "--height", "3", "--rope", "10", "--x", "-3", "--y",
            "-4.5",
        ])
        .unwrap();
        assert!(matches!(cmd.action, Action::Probe { x, y, .. } if x == -3.0 && y == -4.5));
    }

    #[test]
    fn scene_validation_reaches_the_caller() {
        let bad = Scene {
            width: 0.0,
            height: 3.0,
            rope: 10.0,
        };
        let err = bad.inputs().unwrap_err().to_string();
        assert!(err.contains("width"), "{err}");
    }

    #[test]
    fn sweep_rejects_step_too_fine_for_the_scene() {
        let scene = Scene {
            width: 4.0,
            height: 3.0,
            rope: 10.0,
        };
        let cfg = SweepCfg {
            boundary: BoundaryCfg {
                step: 1e-9,
                ..BoundaryCfg::default()
            },
            ..SweepCfg::default()
        };
        let err = sweep(scene, 1, cfg, None).unwrap_err().to_string();
        assert!(err.contains("radii"), "{err}");
    }

    #[test]
    fn attribution_labels() {
        assert_eq!(attribution_label(Attribution::Direct), "direct");
        let wrap = Attribution::Wrap {
            traversal: Traversal::CounterClockwise,
            corner: Corner::TopLeft,
        };
        assert_eq!(attribution_label(wrap), "ccw:top_left");
    }
}
