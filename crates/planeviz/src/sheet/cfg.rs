//! Tolerance and sampling defaults for sheet probes (internal).
//!
//! Policy
//! - These seed `ProbeCfg::default()`. Callers that need other values build
//!   their own `ProbeCfg` instead of touching these.

/// Slack for vertical-edge detection, span containment and the edge parameter `t`.
pub(crate) const EDGE_EPS: f64 = 1e-9;
/// Distance within which a probe counts as running along a vertical edge.
pub(crate) const VERTICAL_HIT_EPS: f64 = 1e-6;
/// Lower bound on probes per interval, also used for zero-width intervals.
pub(crate) const MIN_SAMPLES: usize = 6;
/// World units per probe beyond the minimum.
pub(crate) const SAMPLE_STEP: f64 = 1.0;
