//! Benchmarking using `criterion`.

pub use criterion::*;

use crate::benchmark::Benchmarker;
use std::time::Duration;

/// Defines a function `$name(&mut Criterion)` that runs the benchmark
/// function `$module::$name` as part of the `criterion` group named after
/// `$module`, so that the closed-form and general inverses end up side by
/// side in the report.
#[macro_export]
macro_rules! define_criterion_target {
    ($module:ident, $name:ident) => {
        pub fn $name(c: &mut $crate::benchmark::criterion::Criterion) {
            $module::$name($crate::benchmark::criterion::CriterionGroupBenchmarker::new(
                c,
                stringify!($module),
                stringify!($name),
            ));
        }
    };
}

#[allow(missing_debug_implementations)]
pub struct CriterionGroupBenchmarker<'a> {
    c: &'a mut Criterion,
    group: &'static str,
    id: &'static str,
}

impl<'a> CriterionGroupBenchmarker<'a> {
    pub fn new(c: &'a mut Criterion, group: &'static str, id: &'static str) -> Self {
        Self { c, group, id }
    }
}

impl Benchmarker for CriterionGroupBenchmarker<'_> {
    fn benchmark<T>(self, mut f: &mut impl FnMut() -> T) {
        let mut benchmark_group = self.c.benchmark_group(self.group);
        benchmark_group.bench_function(self.id, |b| b.iter(&mut f));
        benchmark_group.finish();
    }
}

/// The inverses take nanoseconds, so shorter measurement windows than the
/// `criterion` defaults are plenty.
pub fn config() -> Criterion {
    Criterion::default()
        .warm_up_time(Duration::from_millis(500))
        .measurement_time(Duration::from_secs(2))
}
