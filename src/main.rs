use anyhow::Context;
use call_experiments::config::AppConfig;
use call_experiments::experiments::catalog::ExperimentCatalog;
use call_experiments::experiments::sampler::ThreadRngSampler;
use call_experiments::http::routes::router;
use call_experiments::AppState;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();

    let catalog = match &cfg.experiments_file {
        Some(path) => ExperimentCatalog::from_json_file(path)
            .with_context(|| format!("loading experiments from {}", path.display()))?,
        None => ExperimentCatalog::builtin(),
    };
    tracing::info!("loaded experiments: {:?}", catalog.names());

    if let Some(name) = &cfg.default_experiment {
        if catalog.get(name).is_none() {
            tracing::warn!("DEFAULT_EXPERIMENT {} is not a configured experiment", name);
        }
    }

    let state = AppState::new(catalog, Arc::new(ThreadRngSampler), cfg.default_experiment.clone());
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr).await?;
    tracing::info!("listening on {}", cfg.bind_addr);
    axum::serve(listener, app).await?;
    Ok(())
}
