use anyhow::Result;
use call_experiments::config::AppConfig;
use call_experiments::experiments::assigner::select_index;
use call_experiments::experiments::catalog::ExperimentCatalog;
use call_experiments::experiments::sampler::{SamplePointSource, ThreadRngSampler};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env();
    let catalog = match &cfg.experiments_file {
        Some(path) => ExperimentCatalog::from_json_file(path)?,
        None => ExperimentCatalog::builtin(),
    };
    let samples = std::env::var("SAMPLE_COUNT")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(10_000);

    let sampler = ThreadRngSampler;
    for exp in catalog.definitions() {
        let mut counts = vec![0_u64; exp.variants.len()];
        for _ in 0..samples {
            counts[select_index(exp, sampler.next_uniform())?] += 1;
        }

        for (variant, count) in exp.variants.iter().zip(&counts) {
            tracing::info!(
                "experiment={} variant={} weight={} observed={:.2}%",
                exp.name,
                variant.name,
                variant.weight,
                *count as f64 * 100.0 / samples.max(1) as f64
            );
        }
    }

    Ok(())
}
