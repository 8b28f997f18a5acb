//! Test data generation for workouts.
//!
//! This crate provides athlete profiles and a seeded generator for realistic
//! sensor packages, to support manual runs of the `workouts` binary and
//! property-style tests over many packages.
//!
//! # Quick Start
//!
//! ```rust
//! use rand::{SeedableRng, rngs::StdRng};
//! use test_data::prelude::*;
//!
//! let generator = PackageGenerator::new(GeneratorConfig::default())
//!     .with_runner(RunnerProfile::elite())
//!     .with_swimmer(SwimmerProfile::in_pool(50.0));
//!
//! let mut rng = StdRng::seed_from_u64(12345);
//! let packages = generator.generate_batch(&mut rng)?;
//! assert_eq!(packages.len(), GeneratorConfig::default().package_count);
//! # Ok::<(), rand::distributions::WeightedError>(())
//! ```

pub mod config;
pub mod generators;
pub mod profiles;

// Re-export core types from workouts crate
pub use workouts::{SensorPackage, WorkoutKind};

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::{Body, BodyDistribution, GeneratorConfig, WorkoutMix};
    pub use crate::generators::PackageGenerator;
    pub use crate::profiles::{
        AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, sample_variance,
        session_speed_kmh,
    };
    pub use crate::{SensorPackage, WorkoutKind};
}
