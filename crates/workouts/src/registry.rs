//! Workout type codes and construction of workouts from sensor data.

use std::{fmt, str::FromStr};

use tracing::debug;

use crate::{
    errors::WorkoutError,
    training::{Running, SportsWalking, Swimming, Training},
};

/// Workout types known to the sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
        WorkoutKind::Swimming,
    ];

    /// Code used by the sensors for this workout type.
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Name shown in summaries for this workout type.
    pub fn name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Number of positional values a package of this type carries.
    pub fn arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Builds the workout from positional data.
    pub fn build(&self, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
        let training: Box<dyn Training> = match (self, data) {
            (WorkoutKind::Running, &[action, duration, weight]) => {
                Box::new(Running::new(action, duration, weight))
            }
            (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
                Box::new(SportsWalking::new(action, duration, weight, height))
            }
            (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
                Box::new(Swimming::new(
                    action,
                    duration,
                    weight,
                    length_pool,
                    count_pool,
                ))
            }
            _ => {
                return Err(WorkoutError::PackageArity {
                    workout_type: self.code(),
                    expected: self.arity(),
                    actual: data.len(),
                });
            }
        };
        Ok(training)
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            "SWM" => Ok(WorkoutKind::Swimming),
            _ => Err(WorkoutError::UnsupportedType(Some(format!(
                "unknown workout type: {code}"
            )))),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Reads a sensor package into the matching workout.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, WorkoutError> {
    let kind: WorkoutKind = workout_type.parse()?;
    debug!(workout_type, values = data.len(), "Reading package");
    kind.build(data)
}
