//! Writes a file of generated sensor packages for the `workouts` binary.
//!
//! Run with:
//! ```
//! OUTPUT_PATH=packages.json cargo run -p test-data --bin generate
//! WORKOUTS_PACKAGES=packages.json cargo run -p workouts
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
};

use rand::{SeedableRng, rngs::StdRng};
use test_data::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let seed = std::env::var("SEED")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(12345);

    let package_count = std::env::var("PACKAGE_COUNT")
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(GeneratorConfig::default().package_count);

    let generator = PackageGenerator::new(GeneratorConfig {
        package_count,
        ..Default::default()
    });

    let mut rng = StdRng::seed_from_u64(seed);
    let packages = generator.generate_batch(&mut rng)?;

    match std::env::var("OUTPUT_PATH") {
        Ok(path) => {
            let mut writer = BufWriter::new(File::create(&path)?);
            serde_json::to_writer_pretty(&mut writer, &packages)?;
            writer.flush()?;
            tracing::info!("Wrote {} packages to {}", packages.len(), path);
        }
        Err(_) => {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &packages)?;
            println!();
        }
    }

    Ok(())
}
