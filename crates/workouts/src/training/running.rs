//! Running workout.

use crate::registry::WorkoutKind;

use super::{M_IN_KM, MIN_IN_H, Session, Training};

const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
const CALORIES_MEAN_SPEED_SHIFT: f64 = 20.0;

/// Running session: steps, duration and weight.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    session: Session,
}

impl Running {
    pub const fn new(action: f64, duration: f64, weight: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
        }
    }
}

impl Training for Running {
    fn name(&self) -> &'static str {
        WorkoutKind::Running.name()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed() - CALORIES_MEAN_SPEED_SHIFT)
            * self.session.weight
            / M_IN_KM
            * (self.session.duration * MIN_IN_H)
    }
}
