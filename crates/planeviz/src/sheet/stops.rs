//! Stop rectangles resting on the sheet, and the mounting layout.
//!
//! A stop of width `w` centered at `c` spans `[c - w/2, c + w/2]`. Its height is
//! the sampled maximum contact of the placed sheet over that span.

use nalgebra::Vector2;

use super::build::{build_trapezoid, transform_polygon};
use super::probe::max_y_over_interval;
use super::types::{ProbeCfg, SheetPoly, StopRect};

/// Stop rectangle at `center`, or `None` if the sheet is not touched anywhere
/// under it.
pub fn stop_rect(poly: &SheetPoly, center: f64, width: f64, cfg: &ProbeCfg) -> Option<StopRect> {
    let x0 = center - width / 2.0;
    let x1 = center + width / 2.0;
    let hit = max_y_over_interval(poly, x0, x1, cfg);
    Some(StopRect {
        center,
        x0,
        x1,
        width,
        height: hit.y?,
        touch_x: hit.x_at?,
    })
}

/// One `stop_rect` per center, in order.
pub fn stop_rects(
    poly: &SheetPoly,
    centers: &[f64],
    width: f64,
    cfg: &ProbeCfg,
) -> Vec<Option<StopRect>> {
    centers
        .iter()
        .map(|&c| stop_rect(poly, c, width, cfg))
        .collect()
}

/// `count` centers splitting `[x_min, x_max]` into equal cells, one per cell
/// midpoint.
pub fn spaced_centers(x_min: f64, x_max: f64, count: usize) -> Vec<f64> {
    let cell = (x_max - x_min) / count as f64;
    (0..count)
        .map(|i| x_min + cell * (i as f64 + 0.5))
        .collect()
}

/// Control state of the sheet and mounting tools.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetParams {
    pub left_len: f64,
    pub right_len: f64,
    pub sheet_width: f64,
    pub left_start_offset: f64,
    pub translation: Vector2<f64>,
    pub rotation_deg: f64,
    pub pivot: Vector2<f64>,
    pub stop_width: f64,
    pub stop_count: usize,
}

impl Default for SheetParams {
    fn default() -> Self {
        Self {
            left_len: 350.0,
            right_len: 300.0,
            sheet_width: 260.0,
            left_start_offset: 0.0,
            translation: Vector2::zeros(),
            rotation_deg: 0.0,
            pivot: Vector2::zeros(),
            stop_width: 40.0,
            stop_count: 4,
        }
    }
}

/// Everything derived from one `SheetParams`.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetFrame {
    pub base: SheetPoly,
    pub placed: SheetPoly,
    pub centers: Vec<f64>,
    pub stops: Vec<Option<StopRect>>,
}

/// Build, place, and lay out stops across the placed sheet's horizontal span.
pub fn sheet_frame(params: &SheetParams, cfg: &ProbeCfg) -> SheetFrame {
    let base = build_trapezoid(
        params.left_len,
        params.right_len,
        params.sheet_width,
        params.left_start_offset,
    );
    let placed = transform_polygon(&base, params.translation, params.rotation_deg, params.pivot);
    let (lo, hi) = placed.span_x();
    let centers = spaced_centers(lo, hi, params.stop_count);
    let stops = stop_rects(&placed, &centers, params.stop_width, cfg);
    SheetFrame {
        base,
        placed,
        centers,
        stops,
    }
}
