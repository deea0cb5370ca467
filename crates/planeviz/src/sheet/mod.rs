//! Sheet-bend geometry: trapezoid cross-section, placement, vertical probes.
//!
//! Purpose
//! - Model a bent sheet's cross-section as a 4-vertex trapezoid, place it
//!   rigidly (translate, then rotate about a pivot), and find where vertical
//!   probes touch its boundary so stop rectangles can rest on top of it.
//!
//! Conventions
//! - World coordinates, y up. The right edge sits on the y axis at x = 0, the
//!   left edge at x = -sheet_width.
//! - Heights are clamped at the floor y = 0; contacts below it count as 0
//!   (sloped edges) or are dropped (vertical edges).
//! - Interval maxima are sampled, not exact. Accuracy is bounded by the
//!   sample density in `ProbeCfg`.
//!
//! Code cross-refs: `types::{SheetPoly, StopRect}`, `probe::max_y_over_interval`

mod build;
mod cfg;
mod probe;
mod stops;
mod types;

pub use build::{build_trapezoid, transform_polygon};
pub use probe::{max_intersection_y, max_y_over_interval, sample_count};
pub use stops::{sheet_frame, spaced_centers, stop_rect, stop_rects, SheetFrame, SheetParams};
pub use types::{IntervalMax, ProbeCfg, SheetPoly, StopRect};
