//! Closed-form eigen decomposition of a real 2×2 matrix.
//!
//! Eigenvalues come from the characteristic polynomial
//! `λ² - tr·λ + det = 0`. Eigenvectors are read off a row of `M - λI`:
//! `(b, λ - a)` when `|b| > |c|`, else `(λ - d, c)`.
//!
//! The branch choice flips when `|b|` crosses `|c|`, so the eigenvector field
//! is not continuous in the matrix entries. The sign (and for diagonal
//! matrices the very existence) of the returned vector follows the branch.

use nalgebra::{Matrix2, Vector2};

use super::types::EigenResult;

/// Eigenvalues and unit eigenvectors of `m`.
///
/// - Negative discriminant: `Complex { real: tr/2, imag: sqrt(-disc)/2 }`.
/// - Otherwise (including a repeated root): `Real` with `lambda1 >= lambda2`.
pub fn eigen(m: &Matrix2<f64>) -> EigenResult {
    let (a, b, c, d) = (m[(0, 0)], m[(0, 1)], m[(1, 0)], m[(1, 1)]);
    let trace = a + d;
    let det = a * d - b * c;
    let disc = trace * trace - 4.0 * det;
    if disc < 0.0 {
        return EigenResult::Complex {
            real: trace / 2.0,
            imag: (-disc).sqrt() / 2.0,
        };
    }
    let root = disc.sqrt();
    let lambda1 = (trace + root) / 2.0;
    let lambda2 = (trace - root) / 2.0;
    EigenResult::Real {
        lambda1,
        lambda2,
        v1: eigenvector(a, b, c, d, lambda1),
        v2: eigenvector(a, b, c, d, lambda2),
    }
}

#[inline]
fn eigenvector(a: f64, b: f64, c: f64, d: f64, lambda: f64) -> Vector2<f64> {
    let raw = if b.abs() > c.abs() {
        Vector2::new(b, lambda - a)
    } else {
        Vector2::new(lambda - d, c)
    };
    let norm = raw.norm();
    // Zero vector: keep it, dividing by 1 instead of 0.
    let norm = if norm == 0.0 { 1.0 } else { norm };
    raw / norm
}
