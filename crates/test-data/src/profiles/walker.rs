//! Sports walker athletic profile.

use workouts::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for sports (race) walking.
///
/// Recreational race walkers hold roughly 6.5 km/h; competitive walkers
/// exceed 12 km/h.
#[derive(Debug, Clone)]
pub struct WalkerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for WalkerProfile {
    fn default() -> Self {
        Self {
            base_speed: 6.5,
            variance: 0.10,
        }
    }
}

impl WalkerProfile {
    /// Creates a new walker profile with specified base speed.
    ///
    /// # Arguments
    /// * `speed_kmh` - Base speed in km/h
    pub fn with_speed(speed_kmh: f64) -> Self {
        Self {
            base_speed: speed_kmh,
            ..Default::default()
        }
    }

    /// Creates a competitive race walker profile (~13 km/h base).
    pub fn competitive() -> Self {
        Self::with_speed(13.0)
    }

    /// Creates a leisurely walker profile (~5.0 km/h base).
    pub fn leisurely() -> Self {
        Self::with_speed(5.0)
    }
}

impl AthleteProfile for WalkerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::SportsWalking
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
