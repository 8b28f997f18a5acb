use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw readings received from a sensor for one workout.
///
/// `data` is positional: action count, duration in hours, weight in kg,
/// followed by the extras the workout type declares.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorPackage {
    pub workout_type: String,
    pub data: Vec<f64>,
}

impl SensorPackage {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Summary of a completed workout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// Kilometers per hour.
    pub speed: f64,
    pub calories: f64,
}

impl WorkoutSummary {
    pub fn new(
        training_type: impl Into<String>,
        duration: f64,
        distance: f64,
        speed: f64,
        calories: f64,
    ) -> Self {
        Self {
            training_type: training_type.into(),
            duration,
            distance,
            speed,
            calories,
        }
    }

    /// Renders the summary line, numbers to three decimals.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}
