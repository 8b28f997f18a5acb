//! Sensor package generation.

use rand::{
    Rng,
    distributions::{Distribution, WeightedError, WeightedIndex},
};
use tracing::debug;

use workouts::{
    SensorPackage, WorkoutKind,
    training::{LEN_STEP, LEN_STROKE, M_IN_KM},
};

use crate::{
    config::GeneratorConfig,
    profiles::{AthleteProfile, RunnerProfile, SwimmerProfile, WalkerProfile, session_speed_kmh},
};

/// Generates sensor packages whose readings are consistent with an athlete
/// profile: step and stroke counts follow from a sampled speed and duration.
#[derive(Debug, Clone, Default)]
pub struct PackageGenerator {
    config: GeneratorConfig,
    runner: RunnerProfile,
    walker: WalkerProfile,
    swimmer: SwimmerProfile,
}

impl PackageGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn with_runner(mut self, runner: RunnerProfile) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_walker(mut self, walker: WalkerProfile) -> Self {
        self.walker = walker;
        self
    }

    pub fn with_swimmer(mut self, swimmer: SwimmerProfile) -> Self {
        self.swimmer = swimmer;
        self
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates one package of the given workout type.
    pub fn generate(&self, kind: WorkoutKind, rng: &mut impl Rng) -> SensorPackage {
        let duration = self.sample_duration(rng);
        let weight = self.config.weight_kg.sample(rng).round();

        let data = match kind {
            WorkoutKind::Running => {
                let steps = steps_for(session_speed_kmh(&self.runner, rng), duration);
                vec![steps, duration, weight]
            }
            WorkoutKind::SportsWalking => {
                let steps = steps_for(session_speed_kmh(&self.walker, rng), duration);
                let height = self.config.height_cm.sample(rng).round();
                vec![steps, duration, weight, height]
            }
            WorkoutKind::Swimming => {
                let pool = self.swimmer.pool_length();
                let meters = session_speed_kmh(&self.swimmer, rng) * duration * M_IN_KM;
                let laps = (meters / pool).round().max(1.0);
                let strokes = (laps * pool / LEN_STROKE).round();
                vec![strokes, duration, weight, pool, laps]
            }
        };

        debug!(%kind, duration, weight, "Generated package");
        SensorPackage::new(kind.code(), data)
    }

    /// Generates `package_count` packages, picking workout types by the configured mix.
    pub fn generate_batch(
        &self,
        rng: &mut impl Rng,
    ) -> Result<Vec<SensorPackage>, WeightedError> {
        let mix = self.config.mix;
        let weights = WeightedIndex::new([mix.running, mix.walking, mix.swimming])?;

        Ok((0..self.config.package_count)
            .map(|_| {
                let kind = WorkoutKind::ALL[weights.sample(rng)];
                self.generate(kind, rng)
            })
            .collect())
    }

    /// Profile used for the given workout type.
    pub fn profile(&self, kind: WorkoutKind) -> &dyn AthleteProfile {
        match kind {
            WorkoutKind::Running => &self.runner,
            WorkoutKind::SportsWalking => &self.walker,
            WorkoutKind::Swimming => &self.swimmer,
        }
    }

    fn sample_duration(&self, rng: &mut impl Rng) -> f64 {
        let (a, b) = self.config.duration_hours;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        // Whole minutes
        (rng.gen_range(lo..=hi) * 60.0).round() / 60.0
    }
}

fn steps_for(speed_kmh: f64, duration: f64) -> f64 {
    (speed_kmh * duration * M_IN_KM / LEN_STEP).round()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkoutMix;
    use rand::{SeedableRng, rngs::StdRng};
    use workouts::{Training, read_package};

    #[test]
    fn test_generated_packages_are_readable() {
        let generator = PackageGenerator::new(GeneratorConfig {
            package_count: 200,
            ..Default::default()
        });
        assert_eq!(generator.config().package_count, 200);
        let mut rng = StdRng::seed_from_u64(42);

        let packages = generator.generate_batch(&mut rng).unwrap();
        assert_eq!(packages.len(), 200);

        for package in &packages {
            let training = read_package(&package.workout_type, &package.data).unwrap();
            assert!(training.distance() > 0.0);
            assert!(training.mean_speed() > 0.0);
        }
    }

    #[test]
    fn test_running_speed_follows_profile() {
        let generator = PackageGenerator::default().with_runner(RunnerProfile::with_pace(5.0));
        let mut rng = StdRng::seed_from_u64(1);

        for _ in 0..50 {
            let package = generator.generate(WorkoutKind::Running, &mut rng);
            let training = read_package(&package.workout_type, &package.data).unwrap();
            // 12 km/h base, variance clamped to [0.7, 1.4], plus rounding slack
            assert!(training.mean_speed() > 12.0 * 0.7 - 0.1);
            assert!(training.mean_speed() < 12.0 * 1.4 + 0.1);
        }
    }

    #[test]
    fn test_swimming_laps_match_pool() {
        let generator = PackageGenerator::default().with_swimmer(SwimmerProfile::in_pool(50.0));
        let mut rng = StdRng::seed_from_u64(9);

        let package = generator.generate(WorkoutKind::Swimming, &mut rng);
        assert_eq!(package.workout_type, "SWM");
        assert_eq!(package.data.len(), 5);
        assert!((package.data[3] - 50.0).abs() < f64::EPSILON);
        assert!(package.data[4] >= 1.0);
        assert_eq!(package.data[4].fract(), 0.0);
    }

    #[test]
    fn test_mix_restricts_workout_types() {
        let generator = PackageGenerator::new(GeneratorConfig {
            package_count: 30,
            mix: WorkoutMix::only_running(),
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(5);

        let packages = generator.generate_batch(&mut rng).unwrap();
        assert!(packages.iter().all(|p| p.workout_type == "RUN"));
    }

    #[test]
    fn test_empty_mix_is_an_error() {
        let generator = PackageGenerator::new(GeneratorConfig {
            mix: WorkoutMix {
                running: 0,
                walking: 0,
                swimming: 0,
            },
            ..Default::default()
        });
        let mut rng = StdRng::seed_from_u64(5);
        assert!(generator.generate_batch(&mut rng).is_err());
    }

    #[test]
    fn test_same_seed_same_packages() {
        let generator = PackageGenerator::default();
        let first = generator.generate_batch(&mut StdRng::seed_from_u64(12345)).unwrap();
        let second = generator.generate_batch(&mut StdRng::seed_from_u64(12345)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_profile_lookup() {
        let generator = PackageGenerator::default();
        for kind in WorkoutKind::ALL {
            assert_eq!(generator.profile(kind).kind(), kind);
        }
    }
}
