//! Command inputs: flags or a JSON params file, clamped to the slider domains.
//!
//! The engines accept anything; this is the layer that keeps values finite and
//! inside the ranges the visualizer controls offer.

use std::fs;
use std::path::Path;

use anyhow::{ensure, Context, Result};
use clap::Args;
use planeviz::affine::AffineParams;
use planeviz::sheet::SheetParams;
use planeviz::Vec2;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub const SKEW_LIMIT: f64 = 2.0;
pub const ROTATION_LIMIT: f64 = 180.0;
pub const MAX_EXTENT: i32 = 40;
pub const MIN_LENGTH: f64 = 1.0;
pub const MAX_LENGTH: f64 = 10_000.0;
pub const MAX_STOPS: usize = 64;

/// Grid visualizer controls.
#[derive(Args, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AffineInput {
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub skew_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub skew_y: f64,
    /// Degrees, counterclockwise.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rotation: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub tx: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub ty: f64,
    /// Lattice half-width.
    #[arg(long, default_value_t = 5, allow_hyphen_values = true)]
    pub extent: i32,
}

impl Default for AffineInput {
    fn default() -> Self {
        Self {
            skew_x: 0.0,
            skew_y: 0.0,
            rotation: 0.0,
            tx: 0.0,
            ty: 0.0,
            extent: 5,
        }
    }
}

impl AffineInput {
    /// Copy with every field inside its slider range, plus the names of the
    /// fields that had to move. Non-finite values are rejected.
    pub fn clamped(&self) -> Result<(Self, Vec<&'static str>)> {
        let mut moved = Vec::new();
        let out = Self {
            skew_x: clamp_field("skew_x", self.skew_x, -SKEW_LIMIT, SKEW_LIMIT, &mut moved)?,
            skew_y: clamp_field("skew_y", self.skew_y, -SKEW_LIMIT, SKEW_LIMIT, &mut moved)?,
            rotation: clamp_field(
                "rotation",
                self.rotation,
                -ROTATION_LIMIT,
                ROTATION_LIMIT,
                &mut moved,
            )?,
            tx: clamp_field("tx", self.tx, -MAX_LENGTH, MAX_LENGTH, &mut moved)?,
            ty: clamp_field("ty", self.ty, -MAX_LENGTH, MAX_LENGTH, &mut moved)?,
            extent: {
                let e = self.extent.clamp(0, MAX_EXTENT);
                if e != self.extent {
                    moved.push("extent");
                }
                e
            },
        };
        Ok((out, moved))
    }
}

impl From<&AffineInput> for AffineParams {
    fn from(input: &AffineInput) -> Self {
        AffineParams {
            skew_x: input.skew_x,
            skew_y: input.skew_y,
            rotation_deg: input.rotation,
            translation: Vec2::new(input.tx, input.ty),
            extent: input.extent,
        }
    }
}

/// Sheet and mounting tool controls.
#[derive(Args, Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetInput {
    #[arg(long, default_value_t = 350.0)]
    pub left_len: f64,
    #[arg(long, default_value_t = 300.0)]
    pub right_len: f64,
    #[arg(long, default_value_t = 260.0)]
    pub width: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub left_offset: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dx: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub dy: f64,
    /// Degrees, counterclockwise about the pivot.
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub rotation: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pivot_x: f64,
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub pivot_y: f64,
    #[arg(long, default_value_t = 40.0)]
    pub stop_width: f64,
    /// Number of stop rectangles laid out across the sheet.
    #[arg(long, default_value_t = 4)]
    pub stops: usize,
}

impl Default for SheetInput {
    fn default() -> Self {
        Self {
            left_len: 350.0,
            right_len: 300.0,
            width: 260.0,
            left_offset: 0.0,
            dx: 0.0,
            dy: 0.0,
            rotation: 0.0,
            pivot_x: 0.0,
            pivot_y: 0.0,
            stop_width: 40.0,
            stops: 4,
        }
    }
}

impl SheetInput {
    /// Copy with lengths positive and bounded, rotation in [-180, 180], and at
    /// most `MAX_STOPS` stops. Non-finite values are rejected.
    pub fn clamped(&self) -> Result<(Self, Vec<&'static str>)> {
        let mut moved = Vec::new();
        let len = |name, v, moved: &mut Vec<&'static str>| {
            clamp_field(name, v, MIN_LENGTH, MAX_LENGTH, moved)
        };
        let coord = |name, v, moved: &mut Vec<&'static str>| {
            clamp_field(name, v, -MAX_LENGTH, MAX_LENGTH, moved)
        };
        let out = Self {
            left_len: len("left_len", self.left_len, &mut moved)?,
            right_len: len("right_len", self.right_len, &mut moved)?,
            width: len("width", self.width, &mut moved)?,
            left_offset: coord("left_offset", self.left_offset, &mut moved)?,
            dx: coord("dx", self.dx, &mut moved)?,
            dy: coord("dy", self.dy, &mut moved)?,
            rotation: clamp_field(
                "rotation",
                self.rotation,
                -ROTATION_LIMIT,
                ROTATION_LIMIT,
                &mut moved,
            )?,
            pivot_x: coord("pivot_x", self.pivot_x, &mut moved)?,
            pivot_y: coord("pivot_y", self.pivot_y, &mut moved)?,
            stop_width: len("stop_width", self.stop_width, &mut moved)?,
            stops: {
                let n = self.stops.min(MAX_STOPS);
                if n != self.stops {
                    moved.push("stops");
                }
                n
            },
        };
        Ok((out, moved))
    }
}

impl From<&SheetInput> for SheetParams {
    fn from(input: &SheetInput) -> Self {
        SheetParams {
            left_len: input.left_len,
            right_len: input.right_len,
            sheet_width: input.width,
            left_start_offset: input.left_offset,
            translation: Vec2::new(input.dx, input.dy),
            rotation_deg: input.rotation,
            pivot: Vec2::new(input.pivot_x, input.pivot_y),
            stop_width: input.stop_width,
            stop_count: input.stops,
        }
    }
}

fn clamp_field(
    name: &'static str,
    v: f64,
    lo: f64,
    hi: f64,
    moved: &mut Vec<&'static str>,
) -> Result<f64> {
    ensure!(v.is_finite(), "{name} must be finite, got {v}");
    let c = v.clamp(lo, hi);
    if c != v {
        moved.push(name);
    }
    Ok(c)
}

/// Read a params file; missing fields keep their defaults.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
}
