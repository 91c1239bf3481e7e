use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand};
    use impact_ortho::{
        ClipSpaceConvention, OrthographicTransform, projection::is_orthographic_projection,
    };
    use nalgebra::Matrix4;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    #[derive(Debug, Parser)]
    #[command(about = "Closed-form inverses of orthographic projections", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: impact_ortho::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
        /// Invert random orthographic projections of every convention and
        /// check that they multiply with their inverses to the identity
        Verify {
            /// Number of random view boxes to generate
            #[arg(short, long, default_value_t = 10_000)]
            samples: usize,

            /// Seed for the random number generator
            #[arg(long, default_value_t = 0)]
            seed: u64,

            /// Largest accepted absolute deviation of any entry from the
            /// identity
            #[arg(short, long, default_value_t = 1e-9)]
            tolerance: f64,
        },
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                impact_ortho::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
            Command::Verify {
                samples,
                seed,
                tolerance,
            } => verify(samples, seed, tolerance),
        }
    }

    fn verify(samples: usize, seed: u64, tolerance: f64) -> Result<()> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut max_residual = 0.0_f64;

        for _ in 0..samples {
            let (left, right) = random_extent(&mut rng);
            let (bottom, top) = random_extent(&mut rng);
            let (near, far) = random_extent(&mut rng);

            let transforms = ClipSpaceConvention::all()
                .map(|convention| {
                    OrthographicTransform::with_convention(
                        convention, left, right, bottom, top, near, far,
                    )
                })
                .into_iter()
                .chain([OrthographicTransform::planar(left, right, bottom, top)]);

            for transform in transforms {
                if !is_orthographic_projection(transform.as_matrix()) {
                    anyhow::bail!(
                        "Built matrix is not an orthographic projection: {}",
                        transform.as_matrix()
                    );
                }
                let residual =
                    compute_round_trip_residual(transform.as_matrix(), &transform.inverse_matrix());

                log::trace!(
                    "Residual {residual:e} for {:?} with view box [{left}, {right}] x [{bottom}, {top}] x [{near}, {far}]",
                    transform.convention()
                );

                if residual > max_residual {
                    max_residual = residual;
                    log::debug!("New largest residual {residual:e}");
                }
            }
        }

        log::info!("Largest residual over {samples} samples: {max_residual:e}");

        if max_residual > tolerance {
            anyhow::bail!(
                "Largest residual {max_residual:e} exceeds the tolerance of {tolerance:e}"
            );
        }
        Ok(())
    }

    fn random_extent(rng: &mut StdRng) -> (f64, f64) {
        let lower: f64 = rng.random_range(-1e3..1e3);
        let size: f64 = rng.random_range(1e-2..1e3);
        if rng.random_bool(0.5) {
            (lower + size, lower)
        } else {
            (lower, lower + size)
        }
    }

    /// Largest absolute deviation from the identity of the products of the
    /// matrix with its inverse, taken from both sides.
    fn compute_round_trip_residual(matrix: &Matrix4<f64>, inverse: &Matrix4<f64>) -> f64 {
        let identity = Matrix4::identity();
        (matrix * inverse - identity)
            .amax()
            .max((inverse * matrix - identity).amax())
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
