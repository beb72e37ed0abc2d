use linecloud::config::Config;
use linecloud::pipeline;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let config = Config::default();

    // The debug flag widens the default filter so the diagnostic dump of
    // normalized lines and counts becomes visible. RUST_LOG still wins.
    let default_filter = if config.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("linecloud v{}", env!("CARGO_PKG_VERSION"));

    let output = pipeline::run(&config)?;
    tracing::info!("Word cloud written to {}", output.display());

    Ok(())
}
