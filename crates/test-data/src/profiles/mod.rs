//! Athletic performance profiles.
//!
//! Profiles define realistic speeds for each workout type. They are used by
//! the package generator to turn a session length into plausible step,
//! stroke and lap counts.

mod runner;
mod swimmer;
mod walker;

pub use runner::RunnerProfile;
pub use swimmer::SwimmerProfile;
pub use walker::WalkerProfile;

use workouts::WorkoutKind;

/// Trait for athletic performance profiles.
///
/// Implementations should provide:
/// - The workout type they describe
/// - Typical speed for a session
/// - Day-to-day variance
pub trait AthleteProfile: Send + Sync {
    /// Workout type the profile generates packages for.
    fn kind(&self) -> WorkoutKind;

    /// Typical mean speed in kilometers per hour.
    fn base_speed_kmh(&self) -> f64;

    /// Day-to-day performance variance as a coefficient of variation (0.0 - 1.0).
    ///
    /// A value of 0.1 means typical day-to-day variation of ±10%.
    fn variance(&self) -> f64;
}

/// Samples a variance factor from normal distribution.
/// Returns a multiplier around 1.0.
pub fn sample_variance(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    use rand_distr::{Distribution, Normal};

    match Normal::new(1.0, profile.variance()) {
        Ok(normal) if profile.variance() > 0.0 => {
            let sample: f64 = normal.sample(rng);
            sample.clamp(0.7, 1.4)
        }
        _ => 1.0,
    }
}

/// Speed for one session: the base speed scaled by a sampled variance factor.
pub fn session_speed_kmh(profile: &dyn AthleteProfile, rng: &mut impl rand::Rng) -> f64 {
    profile.base_speed_kmh() * sample_variance(profile, rng)
}
