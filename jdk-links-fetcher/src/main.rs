mod api;
mod catalog;
mod config;
mod error;
mod meta;
mod platform;
mod statistics;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;
use crate::config::FetcherConfig;
use crate::error::FetcherError;
use crate::meta::LinksProcessor;
use crate::meta::output::write_document;

fn main() {
    let indicatif_layer = tracing_indicatif::IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .with_env_var("JDK_LINKS_FETCHER_LOG")
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stdout_writer()))
        .with(indicatif_layer)
        .init();

    let config = FetcherConfig::from_env();

    let result = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build() {
        Ok(v) => v.block_on(async_main(config)),
        Err(err) => {
            tracing::error!("Failed to create tokio runtime: {:?}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = result {
        tracing::error!("Error: {}", err);

        let mut src = std::error::Error::source(&err);
        while let Some(err) = src {
            tracing::error!("-> Caused by: {}", err);
            src = err.source();
        }

        tracing::debug!("{:?}", err);
        std::process::exit(1);
    }
}

async fn async_main(config: FetcherConfig) -> Result<(), FetcherError> {
    tracing::trace!("config = {:#?}", config);

    let processor = LinksProcessor::new(&config)?;

    tracing::info!("Starting JDK links fetch from Foojay DiscoAPI...");
    let (document, statistics) = processor.collect().await?;

    write_document(&config.output_path, &document).await?;
    tracing::info!("{} updated successfully", config.output_path.display());

    tracing::info!("Summary:");
    tracing::info!("  JEnv version: {}", document.jenv.version);
    tracing::info!("  JEnv platforms: {}", document.jenv.platforms.len());
    tracing::info!("  JDK versions: {}", document.jdk.versions.len());
    tracing::info!("  Distributions: {}", document.jdk.distributions.len());

    for distribution in document.jdk.distributions.values() {
        tracing::info!("  - {}: {} versions", distribution.name, distribution.versions.len());
    }

    if !statistics.unavailable.is_empty() {
        tracing::warn!("Packages not available:");
        for name in &statistics.unavailable {
            tracing::warn!("- {}", name);
        }
    }

    if !statistics.failures.is_empty() {
        tracing::error!("Failed lookups:");
        for failure in &statistics.failures {
            tracing::error!("- {}: {}", failure.task_name, failure.error);
        }
    }

    tracing::info!("Resolved packages: {}", statistics.resolved_packages);
    tracing::info!("Unavailable packages: {}", statistics.unavailable.len());
    tracing::info!("Failed lookups: {}", statistics.failures.len());

    Ok(())
}
