//! Benchmarking of the projection inverses.

pub mod benchmarks;
pub mod criterion;

use std::{
    hint::black_box,
    time::{Duration, Instant},
};

pub trait Benchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T);
}

#[derive(Clone, Debug)]
pub struct BasicBenchmarker {
    duration: Duration,
    delayer: Delayer,
}

#[derive(Clone, Debug)]
pub struct Delayer {
    program_start: Instant,
    delay: Duration,
}

/// A benchmark that can be run from the command line.
#[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Target {
    InverseOrthoF32,
    InverseOrthoF64,
    InverseOrthoLrbtF32,
    InverseOrthoLrbtF64,
    GeneralInverseF32,
    GeneralInverseF64,
}

impl BasicBenchmarker {
    pub fn new(duration: Duration, delayer: Delayer) -> Self {
        Self { duration, delayer }
    }
}

impl Benchmarker for BasicBenchmarker {
    fn benchmark<T>(self, f: &mut impl FnMut() -> T) {
        self.delayer.wait();
        let start = Instant::now();
        let mut iterations: u64 = 0;
        loop {
            black_box(f());
            iterations += 1;

            if start.elapsed() > self.duration {
                break;
            }
        }
        let elapsed = start.elapsed();
        log::info!(
            "Ran {} iterations in {:.2} ms ({:.2} ns per iteration)",
            iterations,
            elapsed.as_secs_f64() * 1e3,
            elapsed.as_secs_f64() * 1e9 / iterations as f64
        );
    }
}

impl Delayer {
    pub fn new(program_start: Instant, delay_seconds: f64) -> Self {
        Self {
            program_start,
            delay: Duration::from_secs_f64(delay_seconds),
        }
    }

    fn wait(self) {
        let remaining = self.delay.saturating_sub(self.program_start.elapsed());
        if remaining > Duration::ZERO {
            log::debug!("Waiting {:.2} s before running", remaining.as_secs_f64());
            std::thread::sleep(remaining);
        }
    }
}

impl Target {
    pub fn execute(&self, benchmarker: impl Benchmarker) {
        match self {
            Self::InverseOrthoF32 => benchmarks::inverse::inverse_ortho_f32(benchmarker),
            Self::InverseOrthoF64 => benchmarks::inverse::inverse_ortho_f64(benchmarker),
            Self::InverseOrthoLrbtF32 => benchmarks::inverse::inverse_ortho_lrbt_f32(benchmarker),
            Self::InverseOrthoLrbtF64 => benchmarks::inverse::inverse_ortho_lrbt_f64(benchmarker),
            Self::GeneralInverseF32 => benchmarks::inverse::general_inverse_f32(benchmarker),
            Self::GeneralInverseF64 => benchmarks::inverse::general_inverse_f64(benchmarker),
        }
    }
}

/// Runs the given target repeatedly for `duration` seconds, after waiting
/// until `delay` seconds have passed since the call.
pub fn benchmark(target: Target, duration: f64, delay: f64) {
    let start = Instant::now();

    log::info!("Benchmarking {target:?} for {duration} s");

    let delayer = Delayer::new(start, delay);
    let duration = Duration::from_secs_f64(duration);

    let benchmarker = BasicBenchmarker::new(duration, delayer);

    target.execute(benchmarker);
}
