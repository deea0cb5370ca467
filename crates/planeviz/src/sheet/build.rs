use nalgebra::Vector2;

use super::types::SheetPoly;
use crate::affine::Affine2;

/// Trapezoid with the right edge `(0,0)–(0,right_len)` and the left edge
/// `(-sheet_width, off)–(-sheet_width, off+left_len)`.
///
/// Vertices come out as `[left_bottom, left_top, right_top, right_bottom]`,
/// which stays simple for any sign of `left_start_offset`. A non-positive
/// width collapses or flips the shape; it is not rejected.
pub fn build_trapezoid(
    left_len: f64,
    right_len: f64,
    sheet_width: f64,
    left_start_offset: f64,
) -> SheetPoly {
    SheetPoly::new([
        Vector2::new(-sheet_width, left_start_offset),
        Vector2::new(-sheet_width, left_start_offset + left_len),
        Vector2::new(0.0, right_len),
        Vector2::new(0.0, 0.0),
    ])
}

/// Translate by `translation`, then rotate by `rotation_deg` about `pivot`.
///
/// The pivot is a fixed world point; it does not move with the translation.
pub fn transform_polygon(
    poly: &SheetPoly,
    translation: Vector2<f64>,
    rotation_deg: f64,
    pivot: Vector2<f64>,
) -> SheetPoly {
    let place =
        Affine2::translation(translation).then(&Affine2::rotation_about(rotation_deg, pivot));
    SheetPoly::new(poly.v.map(|p| place.apply(p)))
}
