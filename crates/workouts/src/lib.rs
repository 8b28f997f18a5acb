//! Fitness summaries from raw workout sensor readings.
//!
//! Sensor packages carry a workout type code (`RUN`, `WLK`, `SWM`) and
//! positional readings. [`read_package`] builds the matching [`Training`],
//! which computes distance, mean speed and spent calories and renders a
//! [`WorkoutSummary`].
//!
//! ```rust
//! use workouts::{Training, read_package};
//!
//! let training = read_package("RUN", &[15000.0, 1.0, 75.0])?;
//! println!("{}", training.show_training_info().message());
//! # Ok::<(), workouts::errors::WorkoutError>(())
//! ```

pub mod config;
pub mod errors;
pub mod models;
pub mod registry;
pub mod report;
pub mod training;

pub use crate::{
    config::{Config, OutputFormat},
    errors::WorkoutError,
    models::{SensorPackage, WorkoutSummary},
    registry::{WorkoutKind, read_package},
    report::{sample_packages, summarize, write_report},
    training::Training,
};

/// Reports on the configured packages to stdout.
pub fn run(config: &Config) -> anyhow::Result<()> {
    let packages = config.load_packages()?;
    tracing::info!("Reporting on {} packages", packages.len());

    let stdout = std::io::stdout();
    write_report(&packages, &mut stdout.lock(), config.format)?;

    Ok(())
}
