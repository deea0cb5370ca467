//! Tabular outputs (one row per lattice point or per stop), written as CSV or
//! Parquet depending on the output extension.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{bail, Context, Result};
use planeviz::affine::AffineFrame;
use planeviz::sheet::SheetFrame;
use polars::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableFormat {
    Csv,
    Parquet,
}

impl TableFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("csv") => Ok(TableFormat::Csv),
            Some("parquet") => Ok(TableFormat::Parquet),
            _ => bail!(
                "unsupported output {}: expected .csv or .parquet",
                path.display()
            ),
        }
    }
}

/// Columns `sx, sy` (lattice point), `x, y` (its image), `hue`.
pub fn lattice_table(frame: &AffineFrame) -> PolarsResult<DataFrame> {
    let n = frame.points.len();
    let (mut sx, mut sy, mut x, mut y, mut hue) = (
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
        Vec::with_capacity(n),
    );
    for p in &frame.points {
        sx.push(p.source.x);
        sy.push(p.source.y);
        x.push(p.image.x);
        y.push(p.image.y);
        hue.push(p.hue);
    }
    df!(
        "sx" => sx,
        "sy" => sy,
        "x" => x,
        "y" => y,
        "hue" => hue
    )
}

/// Columns `center, height, touch_x, x0, x1, width`; `height`/`touch_x` are
/// null where the stop does not touch the sheet.
pub fn stop_table(frame: &SheetFrame, stop_width: f64) -> PolarsResult<DataFrame> {
    let height: Vec<Option<f64>> = frame.stops.iter().map(|s| s.map(|s| s.height)).collect();
    let touch_x: Vec<Option<f64>> = frame.stops.iter().map(|s| s.map(|s| s.touch_x)).collect();
    let x0: Vec<f64> = frame
        .centers
        .iter()
        .map(|c| c - stop_width / 2.0)
        .collect();
    let x1: Vec<f64> = frame
        .centers
        .iter()
        .map(|c| c + stop_width / 2.0)
        .collect();
    df!(
        "center" => frame.centers.clone(),
        "height" => height,
        "touch_x" => touch_x,
        "x0" => x0,
        "x1" => x1,
        "width" => vec![stop_width; frame.centers.len()]
    )
}

/// Write `df` to `path`, creating parent directories.
pub fn write_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let format = TableFormat::from_path(path)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    match format {
        TableFormat::Csv => CsvWriter::new(&mut file).finish(df)?,
        TableFormat::Parquet => {
            ParquetWriter::new(file).finish(df)?;
        }
    }
    tracing::debug!(rows = df.height(), cols = df.width(), path = %path.display(), "table_written");
    Ok(())
}
