//! Runtime configuration read from the environment.

use std::{env, fs, path::PathBuf, str::FromStr};

use crate::{errors::WorkoutError, models::SensorPackage, report::sample_packages};

/// Path to a JSON file with an array of sensor packages.
pub const PACKAGES_ENV: &str = "WORKOUTS_PACKAGES";
/// Output format, `text` or `json`.
pub const FORMAT_ENV: &str = "WORKOUTS_FORMAT";

/// How summaries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// The human-readable summary line.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl FromStr for OutputFormat {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(WorkoutError::Config(format!(
                "unknown output format '{other}', expected 'text' or 'json'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Packages file; the built-in samples are used when absent.
    pub packages_path: Option<PathBuf>,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, WorkoutError> {
        let packages_path = env::var_os(PACKAGES_ENV).map(PathBuf::from);
        let format = match env::var(FORMAT_ENV) {
            Ok(value) => value.parse()?,
            Err(_) => OutputFormat::default(),
        };

        Ok(Self {
            packages_path,
            format,
        })
    }

    /// Loads the packages this run should report on.
    pub fn load_packages(&self) -> Result<Vec<SensorPackage>, WorkoutError> {
        match &self.packages_path {
            Some(path) => {
                tracing::info!("Loading packages from {}", path.display());
                let raw = fs::read_to_string(path)?;
                Ok(serde_json::from_str(&raw)?)
            }
            None => Ok(sample_packages()),
        }
    }
}
