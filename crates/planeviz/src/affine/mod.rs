//! Affine grid engine: skew/rotation composition, lattice transform, eigen.
//!
//! Purpose
//! - Compose the linear part `M = R · Sx · Sy` from slider parameters, push an
//!   integer lattice through `x ↦ M x + t`, and describe `M` by its eigen data.
//!
//! Conventions
//! - Row-major entries `[[a, b], [c, d]]`, i.e. `a = m[(0,0)]`, `b = m[(0,1)]`.
//! - Generators act on column vectors; `Sy` is applied first, `R` last.
//! - Nothing is validated. NaN/∞ inputs propagate to the outputs.
//!
//! Code cross-refs: `types::{Affine2, EigenResult}`, `frame::affine_frame`

mod compose;
mod eigen;
mod frame;
mod types;

pub use compose::{compose_matrix, rotation_matrix, skew_x_matrix, skew_y_matrix};
pub use eigen::eigen;
pub use frame::{
    affine_frame, apply_transform, basis_images, hue_for_point, lattice, AffineFrame,
    AffineParams, LatticePoint,
};
pub use types::{Affine2, EigenResult};

#[cfg(test)]
mod tests;
