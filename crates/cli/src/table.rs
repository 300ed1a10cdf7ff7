//! Tabular artifacts (sample clouds, sweep frames) via Polars.
//!
//! The file extension picks the format: `.parquet` writes Parquet, anything
//! else writes CSV with a header row.

use anyhow::{Context, Result};
use grazing::api::{Frame, Point};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Two-column `x, y` frame.
pub fn points_frame(points: &[Point]) -> Result<DataFrame> {
    let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
    Ok(df!("x" => xs, "y" => ys)?)
}

/// One row per tick; the bend columns are null when the rope is straight.
pub fn frames_frame(frames: &[Frame]) -> Result<DataFrame> {
    let ticks: Vec<u64> = frames.iter().map(|f| f.tick).collect();
    let angles: Vec<f64> = frames.iter().map(|f| f.angle).collect();
    let xs: Vec<f64> = frames.iter().map(|f| f.position.x).collect();
    let ys: Vec<f64> = frames.iter().map(|f| f.position.y).collect();
    let bend_xs: Vec<Option<f64>> = frames.iter().map(|f| f.bends.first().map(|b| b.x)).collect();
    let bend_ys: Vec<Option<f64>> = frames.iter().map(|f| f.bends.first().map(|b| b.y)).collect();
    Ok(df!(
        "tick" => ticks,
        "angle" => angles,
        "x" => xs,
        "y" => ys,
        "bend_x" => bend_xs,
        "bend_y" => bend_ys
    )?)
}

pub fn write_table(path: &Path, df: &mut DataFrame) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file =
        File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let is_parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if is_parquet {
        ParquetWriter::new(&mut file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "table_written"
    );
    Ok(())
}
