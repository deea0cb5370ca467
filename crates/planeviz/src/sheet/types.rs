//! Value types of the sheet engine.
//!
//! - `SheetPoly`: closed 4-vertex polygon (the sheet cross-section).
//! - `ProbeCfg`: tolerances and sampling density for probes.
//! - `IntervalMax`, `StopRect`: probe results.

use nalgebra::Vector2;

use super::cfg;

/// Sheet cross-section: exactly four vertices, closed implicitly (v[3] → v[0]).
///
/// Invariants:
/// - As built by `build_trapezoid`, vertices are
///   `[left_bottom, left_top, right_top, right_bottom]` and form a simple
///   quadrilateral when `sheet_width > 0`. Rigid placement keeps that.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SheetPoly {
    pub v: [Vector2<f64>; 4],
}

impl SheetPoly {
    #[inline]
    pub fn new(v: [Vector2<f64>; 4]) -> Self {
        Self { v }
    }
    /// The four edges `(v[i], v[i+1 mod 4])`, closing edge last.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        (0..4).map(move |i| (self.v[i], self.v[(i + 1) % 4]))
    }
    /// Horizontal extent `(min x, max x)` over the vertices.
    pub fn span_x(&self) -> (f64, f64) {
        self.v.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        })
    }
}

/// Probe configuration (tolerances and sampling density).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeCfg {
    pub eps: f64,
    pub vertical_hit_eps: f64,
    pub min_samples: usize,
    pub sample_step: f64,
}

impl Default for ProbeCfg {
    fn default() -> Self {
        Self {
            eps: cfg::EDGE_EPS,
            vertical_hit_eps: cfg::VERTICAL_HIT_EPS,
            min_samples: cfg::MIN_SAMPLES,
            sample_step: cfg::SAMPLE_STEP,
        }
    }
}

/// Highest sampled contact over an interval and where it was found.
///
/// Both fields are `None` when no sample touched the polygon.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct IntervalMax {
    pub y: Option<f64>,
    pub x_at: Option<f64>,
}

/// Axis-aligned rectangle resting on the sheet, spanning `[x0, x1]` from the
/// floor up to `height`, touching the sheet at `touch_x`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StopRect {
    pub center: f64,
    pub x0: f64,
    pub x1: f64,
    pub width: f64,
    pub height: f64,
    pub touch_x: f64,
}
