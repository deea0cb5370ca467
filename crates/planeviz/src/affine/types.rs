//! Value types of the affine engine.
//!
//! - `Affine2`: 2D affine map `x ↦ M x + t`.
//! - `EigenResult`: eigen data of a 2×2 real matrix (complex pair or real pair).

use nalgebra::{Matrix2, Vector2};

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Self {
        Self {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn linear(m: Matrix2<f64>) -> Self {
        Self {
            m,
            t: Vector2::zeros(),
        }
    }
    #[inline]
    pub fn translation(t: Vector2<f64>) -> Self {
        Self {
            m: Matrix2::identity(),
            t,
        }
    }
    #[inline]
    pub fn apply(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.m * p + self.t
    }
    /// `other ∘ self`: apply `self` first, then `other`.
    #[inline]
    pub fn then(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: other.m * self.m,
            t: other.m * self.t + other.t,
        }
    }
    /// Rotation by `rotation_deg` about `pivot`.
    pub fn rotation_about(rotation_deg: f64, pivot: Vector2<f64>) -> Self {
        let m = super::compose::rotation_matrix(rotation_deg);
        Self {
            m,
            t: pivot - m * pivot,
        }
    }
}

/// Eigen data of a 2×2 real matrix.
///
/// Invariants:
/// - `Complex::imag >= 0`; the pair is `real ± i·imag`.
/// - `Real::lambda1 >= lambda2`; `v1`, `v2` are unit length unless the raw
///   eigenvector was zero, in which case they are the zero vector and the
///   direction is undefined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EigenResult {
    Complex {
        real: f64,
        imag: f64,
    },
    Real {
        lambda1: f64,
        lambda2: f64,
        v1: Vector2<f64>,
        v2: Vector2<f64>,
    },
}

impl EigenResult {
    #[inline]
    pub fn is_real(&self) -> bool {
        matches!(self, EigenResult::Real { .. })
    }
    /// Both eigenvalues as `(re, im)`; the complex branch yields the conjugate pair.
    pub fn eigenvalues(&self) -> [(f64, f64); 2] {
        match *self {
            EigenResult::Complex { real, imag } => [(real, imag), (real, -imag)],
            EigenResult::Real {
                lambda1, lambda2, ..
            } => [(lambda1, 0.0), (lambda2, 0.0)],
        }
    }
}
