use impact_ortho::{
    benchmark::{benchmarks::inverse, criterion},
    define_criterion_target,
};

define_criterion_target!(inverse, inverse_ortho_f32);
define_criterion_target!(inverse, inverse_ortho_f64);
define_criterion_target!(inverse, inverse_ortho_lrbt_f32);
define_criterion_target!(inverse, inverse_ortho_lrbt_f64);
define_criterion_target!(inverse, general_inverse_f32);
define_criterion_target!(inverse, general_inverse_f64);

criterion::criterion_group!(
    name = benches;
    config = criterion::config();
    targets =
        inverse_ortho_f32,
        inverse_ortho_f64,
        inverse_ortho_lrbt_f32,
        inverse_ortho_lrbt_f64,
        general_inverse_f32,
        general_inverse_f64,
);
criterion::criterion_main!(benches);
