use anyhow::{Context, Result};
use locale_bundler::{config::Config, pipeline};
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file (absent in CI builds)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("locale_bundler=info".parse()?),
        )
        .init();

    info!("Starting translation bundle optimization");

    let config = Config::from_env()?;
    info!(
        "Reading {} into {}",
        config.locales_dir.display(),
        config.output_dir.display()
    );

    let summary = pipeline::run(&config)
        .await
        .context("translation bundling failed")?;

    if summary.validation.has_warnings() {
        info!(
            "{} placeholder warnings, see above",
            summary.validation.warnings.len()
        );
    }

    info!("Translation bundles written successfully!");
    Ok(())
}
