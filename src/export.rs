use std::fs;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDateTime;
use itertools::Itertools;
use log::info;
use thiserror::Error;

use crate::point::Point;
use crate::query::Regression;

/// Points as a literal array, one `[u,v]` per line, oldest first.
/// Empty when there are no points.
pub fn points_text(points: &[Point]) -> String {
    if points.is_empty() {
        return String::new();
    }
    let body = points
        .iter()
        .map(|p| format!("  [{},{}]", p.u(), p.v()))
        .join(",\n");
    format!("[\n{}\n]", body)
}

/// Reads back what [`points_text`] writes. Blank input means no points.
pub fn parse_points_text(text: &str) -> anyhow::Result<Vec<Point>> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_json::from_str(text).context("Points must be an array of [u, v] pairs")
}

/// Reads a file written by [`save_points`].
pub fn load_points(path: impl AsRef<Path>) -> anyhow::Result<Vec<Point>> {
    let path = path.as_ref();
    let text =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let points = parse_points_text(&text)?;
    info!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}

fn percent_text(val: Option<f64>) -> String {
    match val {
        // ties go upwards, like a browser's Math.round
        Some(val) => format!("{}", (val * 100.0 + 0.5).floor() as i64),
        None => "NAN".to_owned(),
    }
}

/// `icorr_r{r}_a{a}_b{b}_n{n}_{yymmdd_HHMMSS}.{extension}`, statistics in hundredths.
pub fn export_file_name(
    regression: &Regression,
    sample_size: usize,
    timestamp: NaiveDateTime,
    extension: &str,
) -> String {
    let Regression { r, a, b } = *regression;
    format!(
        "icorr_r{}_a{}_b{}_n{}_{}.{}",
        percent_text(r),
        percent_text(a),
        percent_text(b),
        sample_size,
        timestamp.format("%y%m%d_%H%M%S"),
        extension
    )
}

/// `dir` joined with [`export_file_name`].
pub fn export_path(
    dir: impl AsRef<Path>,
    regression: &Regression,
    sample_size: usize,
    timestamp: NaiveDateTime,
    extension: &str,
) -> PathBuf {
    dir.as_ref()
        .join(export_file_name(regression, sample_size, timestamp, extension))
}

/// Writes [`points_text`] under `dir`, named by [`export_file_name`].
pub fn save_points(
    dir: impl AsRef<Path>,
    points: &[Point],
    regression: &Regression,
    timestamp: NaiveDateTime,
) -> Result<PathBuf, ExportError> {
    let path = export_path(dir, regression, points.len(), timestamp, "json");
    fs::write(&path, points_text(points))?;
    info!("Saved {} points to {}", points.len(), path.display());
    Ok(path)
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),
    #[cfg(feature = "gui")]
    #[error("{0}")]
    RenderError(#[from] piet_common::Error),
}
