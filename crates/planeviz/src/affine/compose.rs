use nalgebra::{matrix, Matrix2};

/// `Sy = [[1, 0], [skew_y, 1]]`.
#[inline]
pub fn skew_y_matrix(skew_y: f64) -> Matrix2<f64> {
    matrix![1.0, 0.0; skew_y, 1.0]
}

/// `Sx = [[1, skew_x], [0, 1]]`.
#[inline]
pub fn skew_x_matrix(skew_x: f64) -> Matrix2<f64> {
    matrix![1.0, skew_x; 0.0, 1.0]
}

/// Counterclockwise rotation by `rotation_deg` degrees.
#[inline]
pub fn rotation_matrix(rotation_deg: f64) -> Matrix2<f64> {
    let th = rotation_deg.to_radians();
    let (s, c) = th.sin_cos();
    matrix![c, -s; s, c]
}

/// Linear part of the grid transform, `R · (Sx · Sy)`.
///
/// The association is fixed: on a vector, skew-y acts first, then skew-x,
/// then the rotation. Reordering changes the picture.
pub fn compose_matrix(skew_x: f64, skew_y: f64, rotation_deg: f64) -> Matrix2<f64> {
    let shear = skew_x_matrix(skew_x) * skew_y_matrix(skew_y);
    rotation_matrix(rotation_deg) * shear
}
