//! Orthographic projection transformations.

use crate::{
    inverse::{
        inverse_ortho_lh_no, inverse_ortho_lh_zo, inverse_ortho_lrbt, inverse_ortho_rh_no,
        inverse_ortho_rh_zo,
    },
    num::Float,
};
use approx::assert_abs_diff_ne;
use nalgebra::{Matrix4, Point3, Vector3};

/// Which way the depth axis points in view space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    /// The view looks along the positive z-axis.
    Left,
    /// The view looks along the negative z-axis.
    Right,
}

/// The range that the view box depth is mapped to in normalized device
/// coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DepthRange {
    ZeroToOne,
    NegativeOneToOne,
}

/// Combination of [`Handedness`] and [`DepthRange`] determining how an
/// orthographic projection matrix is laid out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClipSpaceConvention {
    pub handedness: Handedness,
    pub depth_range: DepthRange,
}

/// An orthographic transformation that maps points in an axis-aligned view
/// box into the normalized device coordinate box, either with a near and far
/// plane or with the depth axis simply flipped.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OrthographicTransform<F: Float> {
    matrix: Matrix4<F>,
    convention: Option<ClipSpaceConvention>,
}

impl ClipSpaceConvention {
    pub const LH_ZO: Self = Self::new(Handedness::Left, DepthRange::ZeroToOne);
    pub const LH_NO: Self = Self::new(Handedness::Left, DepthRange::NegativeOneToOne);
    pub const RH_ZO: Self = Self::new(Handedness::Right, DepthRange::ZeroToOne);
    pub const RH_NO: Self = Self::new(Handedness::Right, DepthRange::NegativeOneToOne);

    /// The convention used by the unsuffixed builders: right-handed with
    /// depth mapped to [-1, 1].
    pub const DEFAULT: Self = Self::RH_NO;

    pub const fn new(handedness: Handedness, depth_range: DepthRange) -> Self {
        Self {
            handedness,
            depth_range,
        }
    }

    pub const fn all() -> [Self; 4] {
        [Self::LH_ZO, Self::LH_NO, Self::RH_ZO, Self::RH_NO]
    }
}

impl Default for ClipSpaceConvention {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl<F: Float> OrthographicTransform<F> {
    /// Creates a new orthographic transformation using the
    /// [default](ClipSpaceConvention::DEFAULT) clip space convention.
    ///
    /// # Panics
    /// If the extent of the view box along any axis is zero.
    pub fn new(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Self {
        Self::with_convention(
            ClipSpaceConvention::DEFAULT,
            left,
            right,
            bottom,
            top,
            near,
            far,
        )
    }

    /// Creates a new orthographic transformation using the given clip space
    /// convention.
    ///
    /// # Panics
    /// If the extent of the view box along any axis is zero.
    pub fn with_convention(
        convention: ClipSpaceConvention,
        left: F,
        right: F,
        bottom: F,
        top: F,
        near: F,
        far: F,
    ) -> Self {
        assert_abs_diff_ne!(left, right);
        assert_abs_diff_ne!(bottom, top);
        assert_abs_diff_ne!(near, far);
        Self {
            matrix: ortho_with_convention(convention, left, right, bottom, top, near, far),
            convention: Some(convention),
        }
    }

    /// Creates a new orthographic transformation without near and far planes,
    /// which flips the depth axis and leaves its scale unchanged.
    ///
    /// # Panics
    /// If the width or height of the view rectangle is zero.
    pub fn planar(left: F, right: F, bottom: F, top: F) -> Self {
        assert_abs_diff_ne!(left, right);
        assert_abs_diff_ne!(bottom, top);
        Self {
            matrix: ortho_lrbt(left, right, bottom, top),
            convention: None,
        }
    }

    pub fn as_matrix(&self) -> &Matrix4<F> {
        &self.matrix
    }

    pub fn to_matrix(self) -> Matrix4<F> {
        self.matrix
    }

    /// Returns the clip space convention of the transformation, or [`None`]
    /// if it is [planar](Self::planar).
    pub fn convention(&self) -> Option<ClipSpaceConvention> {
        self.convention
    }

    /// Computes the matrix of the inverse transformation, which maps points
    /// in normalized device coordinates back into view space.
    pub fn inverse_matrix(&self) -> Matrix4<F> {
        let Some(convention) = self.convention else {
            return inverse_ortho_lrbt(&self.matrix);
        };
        match (convention.handedness, convention.depth_range) {
            (Handedness::Left, DepthRange::ZeroToOne) => inverse_ortho_lh_zo(&self.matrix),
            (Handedness::Left, DepthRange::NegativeOneToOne) => inverse_ortho_lh_no(&self.matrix),
            (Handedness::Right, DepthRange::ZeroToOne) => inverse_ortho_rh_zo(&self.matrix),
            (Handedness::Right, DepthRange::NegativeOneToOne) => inverse_ortho_rh_no(&self.matrix),
        }
    }

    pub fn transform_point(&self, point: &Point3<F>) -> Point3<F> {
        Point3::new(
            self.matrix.m11 * point.x + self.matrix.m14,
            self.matrix.m22 * point.y + self.matrix.m24,
            self.matrix.m33 * point.z + self.matrix.m34,
        )
    }

    pub fn transform_vector(&self, vector: &Vector3<F>) -> Vector3<F> {
        Vector3::new(
            self.matrix.m11 * vector.x,
            self.matrix.m22 * vector.y,
            self.matrix.m33 * vector.z,
        )
    }

    /// Maps the given point in normalized device coordinates back into view
    /// space.
    pub fn inverse_transform_point(&self, point: &Point3<F>) -> Point3<F> {
        let inverse = self.inverse_matrix();
        Point3::new(
            inverse.m11 * point.x + inverse.m14,
            inverse.m22 * point.y + inverse.m24,
            inverse.m33 * point.z + inverse.m34,
        )
    }
}

/// Builds a left-handed orthographic projection matrix mapping depth to
/// [0, 1].
pub fn ortho_lh_zo<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    let mut matrix = ortho_xy(left, right, bottom, top);
    matrix.m33 = F::ONE / (far - near);
    matrix.m34 = -near / (far - near);
    matrix
}

/// Builds a left-handed orthographic projection matrix mapping depth to
/// [-1, 1].
pub fn ortho_lh_no<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    let mut matrix = ortho_xy(left, right, bottom, top);
    matrix.m33 = F::TWO / (far - near);
    matrix.m34 = -(far + near) / (far - near);
    matrix
}

/// Builds a right-handed orthographic projection matrix mapping depth to
/// [0, 1].
pub fn ortho_rh_zo<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    let mut matrix = ortho_xy(left, right, bottom, top);
    matrix.m33 = F::NEG_ONE / (far - near);
    matrix.m34 = -near / (far - near);
    matrix
}

/// Builds a right-handed orthographic projection matrix mapping depth to
/// [-1, 1]. This is the classic OpenGL `glOrtho` matrix.
pub fn ortho_rh_no<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    let mut matrix = ortho_xy(left, right, bottom, top);
    matrix.m33 = F::NEG_TWO / (far - near);
    matrix.m34 = -(far + near) / (far - near);
    matrix
}

/// Builds a right-handed orthographic projection matrix mapping depth to
/// [0, 1].
pub fn ortho_zo<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    ortho_rh_zo(left, right, bottom, top, near, far)
}

/// Builds a right-handed orthographic projection matrix mapping depth to
/// [-1, 1].
pub fn ortho_no<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    ortho_rh_no(left, right, bottom, top, near, far)
}

/// Builds a left-handed orthographic projection matrix mapping depth to
/// [-1, 1].
pub fn ortho_lh<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    ortho_lh_no(left, right, bottom, top, near, far)
}

/// Builds a right-handed orthographic projection matrix mapping depth to
/// [-1, 1].
pub fn ortho_rh<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    ortho_rh_no(left, right, bottom, top, near, far)
}

/// Builds an orthographic projection matrix with the
/// [default](ClipSpaceConvention::DEFAULT) clip space convention.
pub fn ortho<F: Float>(left: F, right: F, bottom: F, top: F, near: F, far: F) -> Matrix4<F> {
    ortho_rh_no(left, right, bottom, top, near, far)
}

/// Builds an orthographic projection matrix with the given clip space
/// convention.
pub fn ortho_with_convention<F: Float>(
    convention: ClipSpaceConvention,
    left: F,
    right: F,
    bottom: F,
    top: F,
    near: F,
    far: F,
) -> Matrix4<F> {
    match (convention.handedness, convention.depth_range) {
        (Handedness::Left, DepthRange::ZeroToOne) => ortho_lh_zo(left, right, bottom, top, near, far),
        (Handedness::Left, DepthRange::NegativeOneToOne) => {
            ortho_lh_no(left, right, bottom, top, near, far)
        }
        (Handedness::Right, DepthRange::ZeroToOne) => {
            ortho_rh_zo(left, right, bottom, top, near, far)
        }
        (Handedness::Right, DepthRange::NegativeOneToOne) => {
            ortho_rh_no(left, right, bottom, top, near, far)
        }
    }
}

/// Builds an orthographic projection matrix for a view rectangle without
/// near and far planes. The depth axis is flipped but not scaled.
pub fn ortho_lrbt<F: Float>(left: F, right: F, bottom: F, top: F) -> Matrix4<F> {
    let mut matrix = ortho_xy(left, right, bottom, top);
    matrix.m33 = F::NEG_ONE;
    matrix
}

/// Whether every entry of the given matrix outside the diagonal and the
/// translation column is exactly zero and the bottom right entry is one.
///
/// The inverse functions never call this; it is meant for checking inputs
/// of unknown origin before handing them over.
pub fn is_orthographic_projection<F: Float>(m: &Matrix4<F>) -> bool {
    let off_pattern = [m.m12, m.m13, m.m21, m.m23, m.m31, m.m32, m.m41, m.m42, m.m43];
    off_pattern.iter().all(|&entry| entry == F::ZERO) && m.m44 == F::ONE
}

fn ortho_xy<F: Float>(left: F, right: F, bottom: F, top: F) -> Matrix4<F> {
    let mut matrix = Matrix4::identity();
    matrix.m11 = F::TWO / (right - left);
    matrix.m22 = F::TWO / (top - bottom);
    matrix.m14 = -(right + left) / (right - left);
    matrix.m24 = -(top + bottom) / (top - bottom);
    matrix
}
