//! Workout calculations.
//!
//! Every workout type derives distance, mean speed and spent calories from
//! the readings it was built with. The shared formulas live on [`Training`]
//! as default methods; variants override what differs for them.

mod running;
mod swimming;
mod walking;

pub use running::Running;
pub use swimming::{LEN_STROKE, Swimming};
pub use walking::SportsWalking;

use crate::models::WorkoutSummary;

/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;
/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Readings common to every workout type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    /// Steps or strokes.
    pub action: f64,
    /// Hours.
    pub duration: f64,
    /// Kilograms.
    pub weight: f64,
}

impl Session {
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
        }
    }
}

/// Calculation contract shared by all workout types.
pub trait Training: std::fmt::Debug + Send + Sync {
    /// Name shown in the summary.
    fn name(&self) -> &'static str;

    fn session(&self) -> &Session;

    /// Distance covered by one action, in meters.
    fn step_length(&self) -> f64 {
        LEN_STEP
    }

    /// Distance in kilometers.
    fn distance(&self) -> f64 {
        self.session().action * self.step_length() / M_IN_KM
    }

    /// Mean speed in km/h over the whole session.
    fn mean_speed(&self) -> f64 {
        self.distance() / self.session().duration
    }

    /// Spent calories in kcal. Each workout type has its own formula.
    fn spent_calories(&self) -> f64;

    fn show_training_info(&self) -> WorkoutSummary {
        WorkoutSummary::new(
            self.name(),
            self.session().duration,
            self.distance(),
            self.mean_speed(),
            self.spent_calories(),
        )
    }
}
