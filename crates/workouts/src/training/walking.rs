//! Sports walking workout.

use crate::registry::WorkoutKind;

use super::{MIN_IN_H, Session, Training};

const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

/// Sports walking session. Also records the walker's height in cm.
#[derive(Debug, Clone, PartialEq)]
pub struct SportsWalking {
    session: Session,
    height: f64,
}

impl SportsWalking {
    pub const fn new(action: f64, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            session: Session::new(action, duration, weight),
            height,
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Training for SportsWalking {
    fn name(&self) -> &'static str {
        WorkoutKind::SportsWalking.name()
    }

    fn session(&self) -> &Session {
        &self.session
    }

    fn spent_calories(&self) -> f64 {
        // Floor division: the squared speed is truncated against the height.
        let speed_per_height = (self.mean_speed().powi(2) / self.height).floor();
        (CALORIES_WEIGHT_MULTIPLIER * self.session.weight
            + speed_per_height * CALORIES_SPEED_HEIGHT_MULTIPLIER * self.session.weight)
            * (self.session.duration * MIN_IN_H)
    }
}
