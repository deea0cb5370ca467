use anyhow::Result;
use clap::{Parser, Subcommand};
use planeviz::affine::{affine_frame, AffineParams};
use planeviz::sheet::{sheet_frame, ProbeCfg, SheetParams};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod params;
mod provenance;
mod summary;
mod table;

use params::{AffineInput, SheetInput};
use provenance::Provenance;

#[derive(Parser)]
#[command(name = "planeviz")]
#[command(about = "Run the grid and sheet engines and write their tables")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Transform the lattice; write one row per point, print matrix and eigen data
    Affine {
        #[command(flatten)]
        input: AffineInput,
        /// JSON file with the same fields; replaces the flags when given
        #[arg(long)]
        params: Option<PathBuf>,
        /// Output table (.csv or .parquet)
        #[arg(long)]
        out: PathBuf,
    },
    /// Place the sheet and rest stop rectangles on it; write one row per stop
    Sheet {
        #[command(flatten)]
        input: SheetInput,
        /// JSON file with the same fields; replaces the flags when given
        #[arg(long)]
        params: Option<PathBuf>,
        /// Output table (.csv or .parquet)
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Affine { input, params, out } => affine(input, params, out, cmd.tag),
        Action::Sheet { input, params, out } => sheet(input, params, out, cmd.tag),
        Action::Report => report(cmd.tag),
    }
}

fn affine(
    input: AffineInput,
    params_file: Option<PathBuf>,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    let input = match params_file {
        Some(path) => params::load_json::<AffineInput>(&path)?,
        None => input,
    };
    let (input, moved) = input.clamped()?;
    for field in moved {
        tracing::warn!(field, "clamped to slider range");
    }
    tracing::info!(
        skew_x = input.skew_x,
        skew_y = input.skew_y,
        rotation = input.rotation,
        extent = input.extent,
        out = %out.display(),
        tag = ?tag,
        "affine"
    );

    let frame = affine_frame(&AffineParams::from(&input));
    tracing::debug!(
        det = frame.det,
        real_eigen = frame.eigen.is_real(),
        "affine_frame"
    );

    let mut df = table::lattice_table(&frame)?;
    table::write_table(&mut df, &out)?;
    Provenance::new("affine", tag, serde_json::to_value(&input)?).write_sidecar(&out)?;

    println!("{}", serde_json::to_string_pretty(&summary::affine(&frame))?);
    Ok(())
}

fn sheet(
    input: SheetInput,
    params_file: Option<PathBuf>,
    out: PathBuf,
    tag: Option<String>,
) -> Result<()> {
    let input = match params_file {
        Some(path) => params::load_json::<SheetInput>(&path)?,
        None => input,
    };
    let (input, moved) = input.clamped()?;
    for field in moved {
        tracing::warn!(field, "clamped to slider range");
    }
    tracing::info!(
        left_len = input.left_len,
        right_len = input.right_len,
        width = input.width,
        rotation = input.rotation,
        stops = input.stops,
        out = %out.display(),
        tag = ?tag,
        "sheet"
    );

    let params = SheetParams::from(&input);
    let frame = sheet_frame(&params, &ProbeCfg::default());
    tracing::debug!(
        touching = frame.stops.iter().flatten().count(),
        "sheet_frame"
    );

    let mut df = table::stop_table(&frame, params.stop_width)?;
    table::write_table(&mut df, &out)?;
    Provenance::new("sheet", tag, serde_json::to_value(&input)?).write_sidecar(&out)?;

    println!("{}", serde_json::to_string_pretty(&summary::sheet(&frame))?);
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let prov = Provenance::new("report", tag, serde_json::json!({}));
    println!("{}", serde_json::to_string_pretty(&prov)?);
    Ok(())
}
