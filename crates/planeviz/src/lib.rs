//! Numeric cores of the plane visualizers.
//!
//! Two independent, stateless engines:
//! - `affine`: skew/rotation composition, lattice transforms, closed-form 2×2 eigen.
//! - `sheet`: sheet-bend trapezoid construction, rigid placement, and vertical
//!   probes used to rest stop rectangles on the sheet.
//!
//! API Policy
//! - Everything is a pure function of its inputs. Callers own all state
//!   (sliders, zoom, pan) and pass it in explicitly on each call.
//! - Inputs are not validated; NaN/∞ propagate. Clamping belongs to the caller.

pub mod affine;
pub mod sheet;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::{Affine2, EigenResult};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use sheet::{ProbeCfg, SheetPoly, StopRect};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::{
        affine_frame, apply_transform, compose_matrix, eigen, hue_for_point, lattice, Affine2,
        AffineFrame, AffineParams, EigenResult,
    };
    pub use crate::sheet::{
        build_trapezoid, max_intersection_y, max_y_over_interval, sheet_frame, stop_rect,
        transform_polygon, IntervalMax, ProbeCfg, SheetFrame, SheetParams, SheetPoly, StopRect,
    };
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}

/// Determinant of a 2×2 matrix written out from its entries, `ad - bc`.
#[inline]
pub fn det2(m: &Mat2<f64>) -> f64 {
    m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)]
}
