use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AssignmentError {
    #[error("Invalid or missing experiment name: {}", .0.as_deref().unwrap_or("(none)"))]
    UnknownExperiment(Option<String>),
    #[error("experiment {0} has no variants")]
    EmptyVariantList(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read experiments file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid experiments file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("experiment {0} has no variants")]
    EmptyVariantList(String),
    #[error("experiment {experiment} has {variants} variants but {weights} weights")]
    WeightCountMismatch {
        experiment: String,
        variants: usize,
        weights: usize,
    },
    #[error("experiment {0} is defined more than once")]
    DuplicateExperiment(String),
    #[error("experiment {experiment} lists variant {variant} more than once")]
    DuplicateVariant { experiment: String, variant: String },
}
