use crate::{
    benchmark::Benchmarker,
    inverse::{inverse_ortho, inverse_ortho_lrbt},
    num::Float,
    projection::{ortho, ortho_lrbt},
};
use nalgebra::{Matrix4, convert};
use std::hint::black_box;

pub fn inverse_ortho_f32(benchmarker: impl Benchmarker) {
    let m = create_ortho_matrix::<f32>();
    benchmarker.benchmark(&mut || inverse_ortho(black_box(&m)));
}

pub fn inverse_ortho_f64(benchmarker: impl Benchmarker) {
    let m = create_ortho_matrix::<f64>();
    benchmarker.benchmark(&mut || inverse_ortho(black_box(&m)));
}

pub fn inverse_ortho_lrbt_f32(benchmarker: impl Benchmarker) {
    let m = create_planar_ortho_matrix::<f32>();
    benchmarker.benchmark(&mut || inverse_ortho_lrbt(black_box(&m)));
}

pub fn inverse_ortho_lrbt_f64(benchmarker: impl Benchmarker) {
    let m = create_planar_ortho_matrix::<f64>();
    benchmarker.benchmark(&mut || inverse_ortho_lrbt(black_box(&m)));
}

pub fn general_inverse_f32(benchmarker: impl Benchmarker) {
    let m = create_ortho_matrix::<f32>();
    benchmarker.benchmark(&mut || black_box(&m).try_inverse());
}

pub fn general_inverse_f64(benchmarker: impl Benchmarker) {
    let m = create_ortho_matrix::<f64>();
    benchmarker.benchmark(&mut || black_box(&m).try_inverse());
}

fn create_ortho_matrix<F: Float>() -> Matrix4<F> {
    ortho(
        convert(-4.0_f64),
        convert(12.0_f64),
        convert(-3.0_f64),
        convert(9.0_f64),
        convert(0.1_f64),
        convert(100.0_f64),
    )
}

fn create_planar_ortho_matrix<F: Float>() -> Matrix4<F> {
    ortho_lrbt(F::ZERO, convert(800.0_f64), convert(600.0_f64), F::ZERO)
}
