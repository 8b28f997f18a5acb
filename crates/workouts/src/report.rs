//! Turns sensor packages into printed summaries.

use std::io::Write;

use tracing::debug;

use crate::{
    config::OutputFormat,
    errors::WorkoutError,
    models::{SensorPackage, WorkoutSummary},
    registry::read_package,
    training::Training,
};

/// Packages reported when no packages file is configured.
pub fn sample_packages() -> Vec<SensorPackage> {
    vec![
        SensorPackage::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPackage::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

pub fn summarize_package(package: &SensorPackage) -> Result<WorkoutSummary, WorkoutError> {
    let training = read_package(&package.workout_type, &package.data)?;
    let summary = training.show_training_info();
    debug!(
        workout_type = %package.workout_type,
        distance = summary.distance,
        calories = summary.calories,
        "Summarized package"
    );
    Ok(summary)
}

/// Summaries in input order. Stops at the first package that fails.
pub fn summarize(packages: &[SensorPackage]) -> Result<Vec<WorkoutSummary>, WorkoutError> {
    packages.iter().map(summarize_package).collect()
}

/// Writes one line per package, in input order.
///
/// Lines already written stay written when a later package fails.
pub fn write_report<W: Write>(
    packages: &[SensorPackage],
    out: &mut W,
    format: OutputFormat,
) -> Result<(), WorkoutError> {
    for package in packages {
        let summary = summarize_package(package)?;
        match format {
            OutputFormat::Text => writeln!(out, "{}", summary.message())?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &summary)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summaries_keep_input_order() {
        let summaries = summarize(&sample_packages()).unwrap();
        let names: Vec<&str> = summaries.iter().map(|s| s.training_type.as_str()).collect();
        assert_eq!(names, ["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn test_unknown_package_aborts() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![1.0, 1.0, 1.0]),
        ];
        assert!(matches!(
            summarize(&packages),
            Err(WorkoutError::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_report_writes_lines_before_failure() {
        let packages = vec![
            SensorPackage::new("RUN", vec![15000.0, 1.0, 75.0]),
            SensorPackage::new("XYZ", vec![]),
        ];
        let mut out = Vec::new();
        let result = write_report(&packages, &mut out, OutputFormat::Text);

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert!(text.starts_with("Тип тренировки: Running;"));
    }

    #[test]
    fn test_json_report() {
        let mut out = Vec::new();
        write_report(&sample_packages(), &mut out, OutputFormat::Json).unwrap();

        let text = String::from_utf8(out).unwrap();
        let parsed: Vec<WorkoutSummary> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, summarize(&sample_packages()).unwrap());
    }
}
