//! Runner athletic profile.

use workouts::WorkoutKind;

use super::AthleteProfile;

/// Athletic profile for running activities.
///
/// Based on typical recreational to competitive runner performance:
/// - Base pace: ~6:00/km (10 km/h)
/// - Day-to-day variance of ~8%
#[derive(Debug, Clone)]
pub struct RunnerProfile {
    /// Base speed in km/h.
    base_speed: f64,
    /// Performance variance (coefficient of variation).
    variance: f64,
}

impl Default for RunnerProfile {
    fn default() -> Self {
        Self {
            base_speed: 10.0, // 6:00/km
            variance: 0.08,
        }
    }
}

impl RunnerProfile {
    /// Creates a new runner profile with specified base pace.
    ///
    /// # Arguments
    /// * `pace_min_per_km` - Base pace in minutes per kilometer (e.g., 5.0 for 5:00/km)
    pub fn with_pace(pace_min_per_km: f64) -> Self {
        Self {
            base_speed: 60.0 / pace_min_per_km,
            ..Default::default()
        }
    }

    /// Creates an elite runner profile (~3:30/km base pace).
    pub fn elite() -> Self {
        Self::with_pace(3.5)
    }

    /// Creates a recreational runner profile (~7:00/km base pace).
    pub fn recreational() -> Self {
        Self::with_pace(7.0)
    }
}

impl AthleteProfile for RunnerProfile {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn base_speed_kmh(&self) -> f64 {
        self.base_speed
    }

    fn variance(&self) -> f64 {
        self.variance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let profile = RunnerProfile::default();
        assert!((profile.base_speed_kmh() - 10.0).abs() < 0.01);
        assert_eq!(profile.kind(), WorkoutKind::Running);
    }

    #[test]
    fn test_pace_conversion() {
        assert!((RunnerProfile::with_pace(5.0).base_speed_kmh() - 12.0).abs() < 0.01);
        let elite = RunnerProfile::elite();
        let recreational = RunnerProfile::recreational();
        assert!(elite.base_speed_kmh() > recreational.base_speed_kmh());
    }
}
