//! Swimmer athletic profile.

use workouts::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for pool swimming.
///
/// Based on typical recreational swimmer performance:
/// - Base speed: ~2.5 km/h (2:24/100m)
/// - Short-course (25 m) pool by default
#[derive(Debug, Clone)]
pub struct SwimmerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
    /// Pool length in meters.
    pool_length: f64,
}

impl Default for SwimmerProfile {
    fn default() -> Self {
        Self {
            base_speed: 2.5,
            variance: 0.12,
            pool_length: 25.0,
        }
    }
}

impl SwimmerProfile {
    /// Creates a swimmer profile training in a pool of the given length.
    pub fn in_pool(pool_length_m: f64) -> Self {
        Self {
            pool_length: pool_length_m,
            ..Default::default()
        }
    }

    /// Creates a competitive swimmer profile in a 50 m pool.
    pub fn competitive() -> Self {
        Self {
            base_speed: 4.5,
            variance: 0.06,
            pool_length: 50.0,
        }
    }

    pub fn pool_length(&self) -> f64 {
        self.pool_length
    }
}

impl AthleteProfile for SwimmerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}
