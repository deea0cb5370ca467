//! Vertical probes against the sheet outline.
//!
//! - `max_intersection_y`: highest boundary crossing of the line `X = x`.
//! - `max_y_over_interval`: sampled maximum of the above over `[x0, x1]`.
//!
//! The interval version is a fixed-density sampling, not an exact maximum.
//! The sample count is `max(min_samples, ceil((x1 - x0) / sample_step))`.

use super::types::{IntervalMax, ProbeCfg, SheetPoly};

/// Highest `y >= 0` where the vertical line through `x` meets an edge.
///
/// Vertical edges only count when the probe runs along them (within
/// `cfg.vertical_hit_eps`); they then contribute their upper end if that is
/// not below the floor. Sloped edges contribute the interpolated height,
/// clamped to the floor. `None` means no contact at this `x`.
pub fn max_intersection_y(poly: &SheetPoly, x: f64, cfg: &ProbeCfg) -> Option<f64> {
    let mut best: Option<f64> = None;
    for (a, b) in poly.edges() {
        let dx = b.x - a.x;
        let candidate = if dx.abs() < cfg.eps {
            if (x - a.x).abs() > cfg.vertical_hit_eps {
                continue;
            }
            let top = a.y.max(b.y);
            if top < 0.0 {
                continue;
            }
            top
        } else {
            if x < a.x.min(b.x) - cfg.eps || x > a.x.max(b.x) + cfg.eps {
                continue;
            }
            let t = (x - a.x) / dx;
            if t < -cfg.eps || t > 1.0 + cfg.eps {
                continue;
            }
            (a.y + t * (b.y - a.y)).max(0.0)
        };
        if best.is_none_or(|y| candidate > y) {
            best = Some(candidate);
        }
    }
    best
}

/// Number of probes used for an interval of width `x1 - x0`.
///
/// Widths that are negative or NaN fall back to `cfg.min_samples`.
pub fn sample_count(x0: f64, x1: f64, cfg: &ProbeCfg) -> usize {
    let by_width = ((x1 - x0) / cfg.sample_step).ceil();
    // `as usize` saturates: NaN and negatives become 0.
    (by_width as usize).max(cfg.min_samples)
}

/// Sampled maximum contact height over `[x0, x1]`.
///
/// Probes are evenly spaced from `x0` to `x1` inclusive. On ties the first
/// (leftmost for `x0 < x1`) sample wins. Very wide intervals mean many probes;
/// the caller bounds the width.
pub fn max_y_over_interval(poly: &SheetPoly, x0: f64, x1: f64, cfg: &ProbeCfg) -> IntervalMax {
    let n = sample_count(x0, x1, cfg);
    let mut out = IntervalMax::default();
    if n == 0 {
        return out;
    }
    let denom = (n.max(2) - 1) as f64;
    for i in 0..n {
        let x = x0 + (x1 - x0) * (i as f64) / denom;
        if let Some(y) = max_intersection_y(poly, x, cfg) {
            if out.y.is_none_or(|best| y > best) {
                out = IntervalMax {
                    y: Some(y),
                    x_at: Some(x),
                };
            }
        }
    }
    out
}
