//! Configuration types for test data generation.

use serde::{Deserialize, Serialize};

/// Normal distribution of a body measurement, clamped to a plausible range.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BodyDistribution {
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
}

impl BodyDistribution {
    pub const fn new(mean: f64, std_dev: f64, min: f64, max: f64) -> Self {
        Self {
            mean,
            std_dev,
            min,
            max,
        }
    }

    /// Draws one value; falls back to the mean if the distribution is degenerate.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> f64 {
        use rand_distr::{Distribution, Normal};

        match Normal::new(self.mean, self.std_dev) {
            Ok(normal) => normal.sample(rng).clamp(self.min, self.max),
            Err(_) => self.mean,
        }
    }
}

/// Pre-defined adult body measurements.
#[derive(Debug, Clone, Copy)]
pub struct Body;

impl Body {
    /// Adult body weight in kilograms.
    pub const WEIGHT_KG: BodyDistribution = BodyDistribution::new(75.0, 12.0, 45.0, 130.0);

    /// Adult height in centimeters.
    pub const HEIGHT_CM: BodyDistribution = BodyDistribution::new(175.0, 9.0, 150.0, 205.0);
}

/// Relative frequency of each workout type in a generated batch.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WorkoutMix {
    pub running: u32,
    pub walking: u32,
    pub swimming: u32,
}

impl Default for WorkoutMix {
    fn default() -> Self {
        Self {
            running: 3,
            walking: 2,
            swimming: 1,
        }
    }
}

impl WorkoutMix {
    /// Only one workout type.
    pub fn only_running() -> Self {
        Self {
            running: 1,
            walking: 0,
            swimming: 0,
        }
    }
}

/// Configuration for generating a batch of packages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Number of packages to generate.
    pub package_count: usize,

    /// Session duration in hours (range).
    pub duration_hours: (f64, f64),

    pub weight_kg: BodyDistribution,

    pub height_cm: BodyDistribution,

    pub mix: WorkoutMix,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            package_count: 20,
            duration_hours: (0.5, 2.0),
            weight_kg: Body::WEIGHT_KG,
            height_cm: Body::HEIGHT_CM,
            mix: WorkoutMix::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_body_sample_is_clamped() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let weight = Body::WEIGHT_KG.sample(&mut rng);
            assert!((45.0..=130.0).contains(&weight));
        }
    }

    #[test]
    fn test_degenerate_distribution_returns_mean() {
        let mut rng = StdRng::seed_from_u64(3);
        let broken = BodyDistribution::new(70.0, -1.0, 0.0, 200.0);
        assert!((broken.sample(&mut rng) - 70.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_config_from_json() {
        let config: GeneratorConfig = serde_json::from_str(
            r#"{
                "package_count": 5,
                "duration_hours": [1.0, 1.5],
                "weight_kg": {"mean": 70.0, "std_dev": 5.0, "min": 50.0, "max": 90.0},
                "height_cm": {"mean": 170.0, "std_dev": 5.0, "min": 150.0, "max": 190.0},
                "mix": {"running": 1, "walking": 1, "swimming": 1}
            }"#,
        )
        .unwrap();
        assert_eq!(config.package_count, 5);
        assert_eq!(config.mix.swimming, 1);
    }
}
