//! Lattice sampling and the per-change recompute of the grid visualizer.
//!
//! `affine_frame` bundles everything one redraw needs: the affine map, its
//! determinant and eigen data, the basis arrows, and every lattice point with
//! its image and hue.

use nalgebra::{Matrix2, Vector2};

use super::compose::compose_matrix;
use super::eigen::eigen;
use super::types::{Affine2, EigenResult};

/// Apply `p ↦ m p + translation` to every point, preserving order.
pub fn apply_transform(
    m: &Matrix2<f64>,
    translation: Vector2<f64>,
    points: &[Vector2<f64>],
) -> Vec<Vector2<f64>> {
    points.iter().map(|p| m * p + translation).collect()
}

/// Integer lattice over `[-extent, extent]²`, rows of increasing y, each row
/// of increasing x. Holds `(2·extent+1)²` points; empty for negative extents.
pub fn lattice(extent: i32) -> Vec<Vector2<f64>> {
    if extent < 0 {
        return Vec::new();
    }
    let side = (2 * extent as usize) + 1;
    let mut pts = Vec::with_capacity(side * side);
    for y in -extent..=extent {
        for x in -extent..=extent {
            pts.push(Vector2::new(x as f64, y as f64));
        }
    }
    pts
}

/// Direction of `(x, y)` as a hue in degrees, `[0, 360)`.
///
/// The origin has no direction and maps to 0.
pub fn hue_for_point(x: f64, y: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        return 0.0;
    }
    let hue = (y.atan2(x).to_degrees() + 360.0) % 360.0;
    // Angles a hair below zero round up to exactly 360.
    if hue >= 360.0 {
        0.0
    } else {
        hue
    }
}

/// Images of `e₁` and `e₂` under `m` (the columns of `m`).
#[inline]
pub fn basis_images(m: &Matrix2<f64>) -> (Vector2<f64>, Vector2<f64>) {
    (m * Vector2::x(), m * Vector2::y())
}

/// Slider state of the grid visualizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AffineParams {
    pub skew_x: f64,
    pub skew_y: f64,
    pub rotation_deg: f64,
    pub translation: Vector2<f64>,
    /// Lattice half-width; the grid spans `[-extent, extent]²`.
    pub extent: i32,
}

impl Default for AffineParams {
    fn default() -> Self {
        Self {
            skew_x: 0.0,
            skew_y: 0.0,
            rotation_deg: 0.0,
            translation: Vector2::zeros(),
            extent: 5,
        }
    }
}

/// One lattice sample: where it started, where it went, and its color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatticePoint {
    pub source: Vector2<f64>,
    pub image: Vector2<f64>,
    pub hue: f64,
}

/// Everything derived from one `AffineParams`.
#[derive(Clone, Debug, PartialEq)]
pub struct AffineFrame {
    pub map: Affine2,
    pub det: f64,
    pub eigen: EigenResult,
    pub basis: (Vector2<f64>, Vector2<f64>),
    pub points: Vec<LatticePoint>,
}

/// Recompute the grid visualizer for one parameter set.
pub fn affine_frame(params: &AffineParams) -> AffineFrame {
    let m = compose_matrix(params.skew_x, params.skew_y, params.rotation_deg);
    let map = Affine2 {
        m,
        t: params.translation,
    };
    let sources = lattice(params.extent);
    let images = apply_transform(&m, params.translation, &sources);
    let points = sources
        .into_iter()
        .zip(images)
        .map(|(source, image)| LatticePoint {
            source,
            image,
            hue: hue_for_point(source.x, source.y),
        })
        .collect();
    AffineFrame {
        map,
        det: crate::det2(&m),
        eigen: eigen(&m),
        basis: basis_images(&m),
        points,
    }
}
