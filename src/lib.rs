//! Closed-form inverses of orthographic projection matrices.
//!
//! Orthographic projection matrices are mostly zeros, so inverting them with
//! a general 4x4 inversion wastes work on entries that are known in advance.
//! The functions in [`inverse`] exploit the sparsity pattern directly and
//! come in one variant per projection builder in [`projection`].

#[cfg(feature = "benchmark")]
pub mod benchmark;
pub mod inverse;
pub mod num;
pub mod projection;

pub use inverse::{
    inverse_ortho, inverse_ortho_lh, inverse_ortho_lh_no, inverse_ortho_lh_zo, inverse_ortho_lrbt,
    inverse_ortho_lrbtnf, inverse_ortho_no, inverse_ortho_rh, inverse_ortho_rh_no,
    inverse_ortho_rh_zo, inverse_ortho_zo,
};
pub use num::Float;
pub use projection::{ClipSpaceConvention, DepthRange, Handedness, OrthographicTransform};
