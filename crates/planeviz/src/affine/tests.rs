use super::*;
use nalgebra::{matrix, vector, Matrix2, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol
}

#[test]
fn compose_zero_params_is_identity() {
    let m = compose_matrix(0.0, 0.0, 0.0);
    assert_eq!(m, Matrix2::identity());
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let mut rng = StdRng::seed_from_u64(7);
    let id = compose_matrix(0.0, 0.0, 0.0);
    for _ in 0..32 {
        let b = Matrix2::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        );
        assert!((id * b - b).abs().max() < 1e-6);
        assert!((b * id - b).abs().max() < 1e-6);
    }
}

#[test]
fn quarter_turn_maps_x_axis_to_y_axis() {
    let m = compose_matrix(0.0, 0.0, 90.0);
    let v = m * vector![1.0, 0.0];
    assert!(close(v.x, 0.0, 1e-6) && close(v.y, 1.0, 1e-6));
}

#[test]
fn skew_y_is_applied_before_skew_x() {
    // Sx·Sy = [[1 + sx·sy, sx], [sy, 1]]; the other order would give [[1, sx], [sy, 1 + sx·sy]].
    let m = compose_matrix(0.5, 2.0, 0.0);
    assert!(close(m[(0, 0)], 2.0, 1e-12));
    assert!(close(m[(0, 1)], 0.5, 1e-12));
    assert!(close(m[(1, 0)], 2.0, 1e-12));
    assert!(close(m[(1, 1)], 1.0, 1e-12));
    let expected = rotation_matrix(30.0) * skew_x_matrix(0.5) * skew_y_matrix(2.0);
    assert!((compose_matrix(0.5, 2.0, 30.0) - expected).abs().max() < 1e-12);
}

#[test]
fn hue_cardinal_directions() {
    assert!(close(hue_for_point(1.0, 0.0), 0.0, 1e-12));
    assert!(close(hue_for_point(0.0, 1.0), 90.0, 1e-12));
    assert!(close(hue_for_point(-1.0, 0.0), 180.0, 1e-12));
    assert!(close(hue_for_point(0.0, -1.0), 270.0, 1e-12));
    assert_eq!(hue_for_point(0.0, 0.0), 0.0);
    let h = hue_for_point(1.0, -1e-300);
    assert!((0.0..360.0).contains(&h));
}

#[test]
fn eigen_of_rotation_is_complex() {
    let m = compose_matrix(0.0, 0.0, 90.0);
    match eigen(&m) {
        EigenResult::Complex { real, imag } => {
            assert!(close(real, 0.0, 1e-12));
            assert!(close(imag, 1.0, 1e-12));
        }
        other => panic!("expected complex pair, got {other:?}"),
    }
}

#[test]
fn eigen_of_diagonal_matrix() {
    let res = eigen(&matrix![2.0, 0.0; 0.0, 3.0]);
    let EigenResult::Real {
        lambda1,
        lambda2,
        v1,
        v2,
    } = res
    else {
        panic!("expected real eigenvalues");
    };
    let mut got = [
        (lambda1 * 1000.0).round() / 1000.0,
        (lambda2 * 1000.0).round() / 1000.0,
    ];
    got.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(got, [2.0, 3.0]);
    // b = c = 0 takes the (λ - d, c) branch: λ = 3 gives the zero vector.
    assert_eq!(v1, Vector2::zeros());
    assert!(close(v2.norm(), 1.0, 1e-12));
    assert!(close(v2.y, 0.0, 1e-12));
}

#[test]
fn eigen_repeated_root_takes_real_branch() {
    let res = eigen(&matrix![2.0, 1.0; 0.0, 2.0]);
    match res {
        EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            ..
        } => {
            assert_eq!(lambda1, lambda2);
            assert!(close(lambda1, 2.0, 1e-12));
            // (b, λ - a) = (1, 0)
            assert!(close(v1.x, 1.0, 1e-12) && close(v1.y, 0.0, 1e-12));
        }
        other => panic!("expected real branch, got {other:?}"),
    }
}

#[test]
fn eigenvectors_satisfy_definition() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut checked = 0;
    for _ in 0..200 {
        let m = compose_matrix(
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-2.0..2.0),
            rng.gen_range(-180.0..180.0),
        );
        if let EigenResult::Real {
            lambda1,
            lambda2,
            v1,
            v2,
        } = eigen(&m)
        {
            for (l, v) in [(lambda1, v1), (lambda2, v2)] {
                if v.norm() > 0.0 {
                    assert!(close(v.norm(), 1.0, 1e-9));
                    assert!((m * v - v * l).norm() < 1e-5);
                }
            }
            checked += 1;
        }
    }
    assert!(checked > 0);
}

#[test]
fn eigenvector_branch_flips_when_off_diagonals_cross() {
    // Known non-smoothness: the chosen row of M - λI switches at |b| = |c|.
    let below = eigen(&matrix![1.0, 0.999; 1.0, 2.0]);
    let above = eigen(&matrix![1.0, 1.001; 1.0, 2.0]);
    let (EigenResult::Real { v2: vb, .. }, EigenResult::Real { v2: va, .. }) = (below, above)
    else {
        panic!("expected real eigenvalues");
    };
    // Same eigen-direction up to sign, but the branches pick opposite signs.
    assert!(vb.x * va.x + vb.y * va.y < -0.99);
}

#[test]
fn eigenvalues_helper_returns_conjugates() {
    let r = EigenResult::Complex {
        real: 0.5,
        imag: 2.0,
    };
    assert!(!r.is_real());
    assert_eq!(r.eigenvalues(), [(0.5, 2.0), (0.5, -2.0)]);
}

#[test]
fn apply_transform_preserves_order_and_translates() {
    let m = compose_matrix(0.0, 0.0, 90.0);
    let pts = vec![vector![1.0, 0.0], vector![0.0, 1.0], vector![2.0, 2.0]];
    let out = apply_transform(&m, vector![10.0, -1.0], &pts);
    assert_eq!(out.len(), 3);
    let expected = [vector![10.0, 0.0], vector![9.0, -1.0], vector![8.0, 1.0]];
    for (o, e) in out.iter().zip(expected.iter()) {
        assert!((o - e).norm() < 1e-9);
    }
}

#[test]
fn non_finite_input_propagates() {
    let m = compose_matrix(f64::NAN, 0.0, 0.0);
    assert!(m[(0, 1)].is_nan());
    let out = apply_transform(
        &Matrix2::identity(),
        vector![f64::INFINITY, 0.0],
        &[vector![1.0, 1.0]],
    );
    assert!(out[0].x.is_infinite());
}

#[test]
fn lattice_size_and_order() {
    let pts = lattice(2);
    assert_eq!(pts.len(), 25);
    assert_eq!(pts[0], vector![-2.0, -2.0]);
    assert_eq!(pts[1], vector![-1.0, -2.0]);
    assert_eq!(pts[24], vector![2.0, 2.0]);
    assert_eq!(lattice(0), vec![Vector2::zeros()]);
    assert!(lattice(-1).is_empty());
}

#[test]
fn affine_map_composition_and_pivot_rotation() {
    let shift = Affine2::translation(vector![1.0, 0.0]);
    let turn = Affine2::linear(rotation_matrix(90.0));
    let both = shift.then(&turn);
    let p = both.apply(vector![0.0, 0.0]);
    assert!((p - vector![0.0, 1.0]).norm() < 1e-12);

    let about = Affine2::rotation_about(180.0, vector![1.0, 1.0]);
    assert!((about.apply(vector![1.0, 1.0]) - vector![1.0, 1.0]).norm() < 1e-12);
    assert!((about.apply(vector![2.0, 1.0]) - vector![0.0, 1.0]).norm() < 1e-12);
    assert_eq!(Affine2::identity().apply(vector![3.0, 4.0]), vector![3.0, 4.0]);
}

#[test]
fn frame_bundles_all_outputs() {
    let params = AffineParams {
        skew_x: 0.3,
        skew_y: -0.2,
        rotation_deg: 45.0,
        translation: vector![1.0, 2.0],
        extent: 3,
    };
    let f = affine_frame(&params);
    assert_eq!(f.points.len(), 49);
    assert!(close(f.det, 1.0, 1e-9));
    assert_eq!(f.basis, basis_images(&f.map.m));
    for lp in &f.points {
        assert!((f.map.apply(lp.source) - lp.image).norm() < 1e-12);
        assert_eq!(lp.hue, hue_for_point(lp.source.x, lp.source.y));
    }
    let centre = f.points[24];
    assert_eq!(centre.source, Vector2::zeros());
    assert!((centre.image - params.translation).norm() < 1e-12);
}

proptest! {
    #[test]
    fn det_matches_entries_and_is_one(
        sx in -2.0f64..2.0,
        sy in -2.0f64..2.0,
        rot in -180.0f64..180.0,
    ) {
        let m = compose_matrix(sx, sy, rot);
        let by_entries = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
        prop_assert!((crate::det2(&m) - by_entries).abs() < 1e-12);
        prop_assert!((m.determinant() - by_entries).abs() < 1e-9);
        // Every generator has unit determinant.
        prop_assert!((by_entries - 1.0).abs() < 1e-9);
    }

    #[test]
    fn engine_calls_are_idempotent(
        sx in -2.0f64..2.0,
        sy in -2.0f64..2.0,
        rot in -180.0f64..180.0,
        extent in 0i32..4,
    ) {
        let params = AffineParams {
            skew_x: sx,
            skew_y: sy,
            rotation_deg: rot,
            translation: Vector2::new(sx, sy),
            extent,
        };
        prop_assert_eq!(affine_frame(&params), affine_frame(&params));
        let m = compose_matrix(sx, sy, rot);
        prop_assert_eq!(eigen(&m), eigen(&m));
    }
}
