use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use workouts::{Config, run};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::from_env()?;
    tracing::debug!("Loaded configuration: {:?}", config);

    run(&config)
}
