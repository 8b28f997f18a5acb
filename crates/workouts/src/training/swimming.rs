//! Swimming workout.

use crate::registry::WorkoutKind;

use super::{M_IN_KM, Session, Training};

/// Distance covered by one stroke, in meters.
pub const LEN_STROKE: f64 = 1.38;

const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Swimming session.
///
/// Mean speed comes from the pool length and lap count rather than from
/// the stroke-based distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    session: Session,
    /// Meters.
    length_pool: f64,
    count_pool: f64,
}

impl Swimming {
    pub const fn new(
        action: f64,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: f64,
    ) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            length_pool,
            count_pool,
        }
    }

    pub fn length_pool(&self) -> f64 {
        self.length_pool
    }

    pub fn count_pool(&self) -> f64 {
        self.count_pool
    }
}

impl Training for Swimming {
    fn name(&self) -> &'static str {
        WorkoutKind::Swimming.name()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn step_length(&self) -> f64 {
        LEN_STROKE
    }

    fn mean_speed(&self) -> f64 {
        self.length_pool * self.count_pool / M_IN_KM / self.session.duration
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.session.weight
    }
}
