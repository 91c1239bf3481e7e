//! Closed-form inverses of orthographic projection matrices.
//!
//! An orthographic projection matrix only has nonzero entries on the
//! diagonal and in the translation column, so its inverse can be written
//! down directly instead of going through a general cofactor expansion. The
//! inverse of
//!
//! ```text
//! [ a  0  0  d ]
//! [ 0  b  0  e ]
//! [ 0  0  c  f ]
//! [ 0  0  0  1 ]
//! ```
//!
//! is
//!
//! ```text
//! [ 1/a  0    0    -d/a ]
//! [ 0    1/b  0    -e/b ]
//! [ 0    0    1/c  -f/c ]
//! [ 0    0    0     1   ]
//! ```
//!
//! None of the functions here check that the input actually has this
//! structure. Entries outside the pattern are ignored, and a zero scale
//! factor produces infinities or NaNs in the result.

use crate::num::Float;
use nalgebra::Matrix4;

/// Computes the inverse of an orthographic projection matrix with an
/// explicit depth scaling, as produced by any of the six-parameter
/// `ortho_*` builders in [`projection`](crate::projection).
///
/// Only the diagonal scale factors and the translation column are read.
#[inline]
pub fn inverse_ortho_lrbtnf<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    let inverse_scaling_x = F::ONE / m.m11;
    let inverse_scaling_y = F::ONE / m.m22;
    let inverse_scaling_z = F::ONE / m.m33;

    #[rustfmt::skip]
    let inverse = Matrix4::new(
        inverse_scaling_x, F::ZERO,          F::ZERO,          -m.m14 * inverse_scaling_x,
        F::ZERO,          inverse_scaling_y, F::ZERO,          -m.m24 * inverse_scaling_y,
        F::ZERO,          F::ZERO,          inverse_scaling_z, -m.m34 * inverse_scaling_z,
        F::ZERO,          F::ZERO,          F::ZERO,           F::ONE,
    );
    inverse
}

/// Computes the inverse of a planar orthographic projection matrix, as
/// produced by [`ortho_lrbt`](crate::projection::ortho_lrbt).
///
/// The depth scale is assumed to be `-1` and the depth translation zero, so
/// only the x and y scale factors and translations are read.
#[inline]
pub fn inverse_ortho_lrbt<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    let inverse_scaling_x = F::ONE / m.m11;
    let inverse_scaling_y = F::ONE / m.m22;

    #[rustfmt::skip]
    let inverse = Matrix4::new(
        inverse_scaling_x, F::ZERO,          F::ZERO,    -m.m14 * inverse_scaling_x,
        F::ZERO,          inverse_scaling_y, F::ZERO,    -m.m24 * inverse_scaling_y,
        F::ZERO,          F::ZERO,          F::NEG_ONE, F::ZERO,
        F::ZERO,          F::ZERO,          F::ZERO,    F::ONE,
    );
    inverse
}

/// Inverts a matrix from [`ortho_lh_zo`](crate::projection::ortho_lh_zo).
#[inline]
pub fn inverse_ortho_lh_zo<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_lh_no`](crate::projection::ortho_lh_no).
#[inline]
pub fn inverse_ortho_lh_no<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_rh_zo`](crate::projection::ortho_rh_zo).
#[inline]
pub fn inverse_ortho_rh_zo<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_rh_no`](crate::projection::ortho_rh_no).
#[inline]
pub fn inverse_ortho_rh_no<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_zo`](crate::projection::ortho_zo).
#[inline]
pub fn inverse_ortho_zo<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_no`](crate::projection::ortho_no).
#[inline]
pub fn inverse_ortho_no<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_lh`](crate::projection::ortho_lh).
#[inline]
pub fn inverse_ortho_lh<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho_rh`](crate::projection::ortho_rh).
#[inline]
pub fn inverse_ortho_rh<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

/// Inverts a matrix from [`ortho`](crate::projection::ortho).
///
/// The handedness and depth range of the forward matrix are already encoded
/// in its depth scale and translation, so this works for every six-parameter
/// builder, not just the default one.
#[inline]
pub fn inverse_ortho<F: Float>(m: &Matrix4<F>) -> Matrix4<F> {
    inverse_ortho_lrbtnf(m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projection::{
        ortho, ortho_lh, ortho_lh_no, ortho_lh_zo, ortho_lrbt, ortho_no, ortho_rh, ortho_rh_no,
        ortho_rh_zo, ortho_zo,
    };
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    /// Inverse obtained by specializing the general cofactor expansion to
    /// the nonzero entries of an orthographic matrix with depth scaling.
    fn inverse_ortho_lrbtnf_by_coefficient_expansion(m: &Matrix4<f64>) -> Matrix4<f64> {
        let (a, b, c) = (m.m11, m.m22, m.m33);
        let (d, e, f) = (m.m14, m.m24, m.m34);

        let coef08 = -e * c;
        let coef10 = b * f;
        let coef11 = b * c;
        let coef16 = -d * c;

        #[rustfmt::skip]
        let inverse = Matrix4::new(
            b * c, 0.0,   0.0,   b * coef16,
            0.0,   a * c, 0.0,   a * coef08,
            0.0,   0.0,   a * b, -a * coef10,
            0.0,   0.0,   0.0,   a * coef11,
        );

        let determinant = a * inverse.m11;
        inverse * (1.0 / determinant)
    }

    fn inverse_ortho_lrbt_by_coefficient_expansion(m: &Matrix4<f64>) -> Matrix4<f64> {
        let (a, b) = (m.m11, m.m22);
        let (d, e) = (m.m14, m.m24);

        #[rustfmt::skip]
        let inverse = Matrix4::new(
            -b,  0.0, 0.0,   b * d,
            0.0, -a,  0.0,   a * e,
            0.0, 0.0, a * b, 0.0,
            0.0, 0.0, 0.0,   -a * b,
        );

        let determinant = a * inverse.m11;
        inverse * (1.0 / determinant)
    }

    fn all_lrbtnf_builders() -> [fn(f64, f64, f64, f64, f64, f64) -> Matrix4<f64>; 9] {
        [
            ortho_lh_zo,
            ortho_lh_no,
            ortho_rh_zo,
            ortho_rh_no,
            ortho_zo,
            ortho_no,
            ortho_lh,
            ortho_rh,
            ortho,
        ]
    }

    fn all_lrbtnf_inverses() -> [fn(&Matrix4<f64>) -> Matrix4<f64>; 10] {
        [
            inverse_ortho_lrbtnf,
            inverse_ortho_lh_zo,
            inverse_ortho_lh_no,
            inverse_ortho_rh_zo,
            inverse_ortho_rh_no,
            inverse_ortho_zo,
            inverse_ortho_no,
            inverse_ortho_lh,
            inverse_ortho_rh,
            inverse_ortho,
        ]
    }

    prop_compose! {
        fn extent_strategy(max_coord: f64)(
            lower in -max_coord..max_coord,
            size in 1e-2..max_coord,
            flipped in any::<bool>(),
        ) -> (f64, f64) {
            if flipped {
                (lower + size, lower)
            } else {
                (lower, lower + size)
            }
        }
    }

    prop_compose! {
        fn view_box_strategy(max_coord: f64)(
            (left, right) in extent_strategy(max_coord),
            (bottom, top) in extent_strategy(max_coord),
            (near, far) in extent_strategy(max_coord),
        ) -> [f64; 6] {
            [left, right, bottom, top, near, far]
        }
    }

    #[test]
    fn inverting_symmetric_ortho_matrix_gives_reciprocal_diagonal() {
        let m = ortho(-1.0_f32, 1.0, -1.0, 1.0, 0.1, 100.0);
        let inverse = inverse_ortho(&m);

        assert_abs_diff_eq!(inverse.m11, 1.0);
        assert_abs_diff_eq!(inverse.m22, 1.0);
        assert_relative_eq!(inverse.m33, (0.1 - 100.0) / 2.0, max_relative = 1e-5);
        assert_relative_eq!(inverse.m33, 1.0 / m.m33, max_relative = 1e-6);
        assert_abs_diff_eq!(inverse.m44, 1.0);

        assert_abs_diff_eq!(m * inverse, Matrix4::identity(), epsilon = 1e-5);
        assert_abs_diff_eq!(inverse * m, Matrix4::identity(), epsilon = 1e-5);
    }

    #[test]
    fn inverting_asymmetric_ortho_matrix_gives_negated_translation_ratios() {
        let m = ortho(0.0_f32, 800.0, 0.0, 600.0, -1.0, 1.0);
        let inverse = inverse_ortho(&m);

        assert_relative_eq!(inverse.m14, -m.m14 / m.m11, max_relative = 1e-6);
        assert_relative_eq!(inverse.m24, -m.m24 / m.m22, max_relative = 1e-6);
        assert_abs_diff_eq!(inverse.m34, -m.m34 / m.m33, epsilon = 1e-6);

        assert_relative_eq!(inverse.m14, 400.0, max_relative = 1e-6);
        assert_relative_eq!(inverse.m24, 300.0, max_relative = 1e-6);
        assert_abs_diff_eq!(inverse.m34, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn inverting_ortho_matrix_with_zero_x_scaling_gives_nonfinite_entries() {
        let mut m = ortho(-1.0_f32, 3.0, -1.0, 1.0, 0.1, 100.0);
        m.m11 = 0.0;

        let inverse = inverse_ortho(&m);

        assert!(inverse.m11.is_infinite());
        assert!(!inverse.m14.is_finite());
        assert!(inverse.m22.is_finite());
        assert!(inverse.m33.is_finite());
    }

    #[test]
    fn inverting_centered_ortho_matrix_with_zero_x_scaling_gives_nan_translation() {
        let mut m = ortho(-1.0_f64, 1.0, -1.0, 1.0, 0.1, 100.0);
        m.m11 = 0.0;

        let inverse = inverse_ortho(&m);

        assert!(inverse.m11.is_infinite());
        assert!(inverse.m14.is_nan());
    }

    #[test]
    fn inverting_planar_ortho_matrix_with_zero_y_scaling_gives_nonfinite_entries() {
        let mut m = ortho_lrbt(0.0_f32, 800.0, 0.0, 600.0);
        m.m22 = 0.0;

        let inverse = inverse_ortho_lrbt(&m);

        assert!(inverse.m22.is_infinite());
        assert!(!inverse.m24.is_finite());
        assert!(inverse.m11.is_finite());
    }

    #[test]
    fn inverting_planar_ortho_matrix_works() {
        let m = ortho_lrbt(0.0_f32, 800.0, 600.0, 0.0);
        let inverse = inverse_ortho_lrbt(&m);

        assert_abs_diff_eq!(inverse.m33, -1.0);
        assert_abs_diff_eq!(inverse.m34, 0.0);
        assert_abs_diff_eq!(m * inverse, Matrix4::identity(), epsilon = 1e-5);
        assert_abs_diff_eq!(inverse * m, Matrix4::identity(), epsilon = 1e-5);
    }

    #[test]
    fn all_lrbtnf_entry_points_give_identical_results() {
        let m = ortho_lh_zo(-3.5, 12.0, -7.25, 2.0, 0.5, 250.0);
        let expected = inverse_ortho_lrbtnf(&m);

        for inverse in all_lrbtnf_inverses() {
            assert_eq!(inverse(&m), expected);
        }
    }

    #[test]
    fn inverse_is_generic_over_precision() {
        let m_f32 = ortho_rh_zo(-2.0_f32, 5.0, -1.0, 4.0, 1.0, 50.0);
        let m_f64 = ortho_rh_zo(-2.0_f64, 5.0, -1.0, 4.0, 1.0, 50.0);

        let inverse_f32 = inverse_ortho_rh_zo(&m_f32);
        let inverse_f64 = inverse_ortho_rh_zo(&m_f64);

        assert_abs_diff_eq!(inverse_f32.cast::<f64>(), inverse_f64, epsilon = 1e-4);
    }

    proptest! {
        #[test]
        fn should_give_identity_when_multiplied_with_ortho_matrix(
            [left, right, bottom, top, near, far] in view_box_strategy(1e3),
        ) {
            for build in all_lrbtnf_builders() {
                let m = build(left, right, bottom, top, near, far);
                let inverse = inverse_ortho_lrbtnf(&m);
                prop_assert!(approx::abs_diff_eq!(m * inverse, Matrix4::identity(), epsilon = 1e-9));
                prop_assert!(approx::abs_diff_eq!(inverse * m, Matrix4::identity(), epsilon = 1e-9));
            }
        }
    }

    proptest! {
        #[test]
        fn should_match_general_inverse(
            [left, right, bottom, top, near, far] in view_box_strategy(1e3),
        ) {
            for build in all_lrbtnf_builders() {
                let m = build(left, right, bottom, top, near, far);
                let general_inverse = m.try_inverse().unwrap();
                prop_assert!(approx::relative_eq!(
                    inverse_ortho_lrbtnf(&m),
                    general_inverse,
                    epsilon = 1e-9,
                    max_relative = 1e-9
                ));
            }
        }
    }

    proptest! {
        #[test]
        fn should_match_general_inverse_for_planar_matrix(
            [left, right, bottom, top, _near, _far] in view_box_strategy(1e3),
        ) {
            let m = ortho_lrbt(left, right, bottom, top);
            let general_inverse = m.try_inverse().unwrap();
            prop_assert!(approx::relative_eq!(
                inverse_ortho_lrbt(&m),
                general_inverse,
                epsilon = 1e-9,
                max_relative = 1e-9
            ));
        }
    }

    proptest! {
        #[test]
        fn should_match_coefficient_expansion(
            [left, right, bottom, top, near, far] in view_box_strategy(1e3),
        ) {
            for build in all_lrbtnf_builders() {
                let m = build(left, right, bottom, top, near, far);
                prop_assert!(approx::relative_eq!(
                    inverse_ortho_lrbtnf(&m),
                    inverse_ortho_lrbtnf_by_coefficient_expansion(&m),
                    epsilon = 1e-9,
                    max_relative = 1e-9
                ));
            }

            let m = ortho_lrbt(left, right, bottom, top);
            prop_assert!(approx::relative_eq!(
                inverse_ortho_lrbt(&m),
                inverse_ortho_lrbt_by_coefficient_expansion(&m),
                epsilon = 1e-9,
                max_relative = 1e-9
            ));
        }
    }

    proptest! {
        #[test]
        fn should_give_same_inverse_with_both_kernels_for_planar_matrix(
            [left, right, bottom, top, _near, _far] in view_box_strategy(1e3),
        ) {
            let m = ortho_lrbt(left, right, bottom, top);
            prop_assert_eq!(inverse_ortho_lrbtnf(&m), inverse_ortho_lrbt(&m));
        }
    }
}
