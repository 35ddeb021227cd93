use crate::domain::experiment::{ExperimentDefinition, Variant};
use crate::error::CatalogError;
use crate::experiments::sampler::SAMPLE_SPACE;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Static experiment table, loaded once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct ExperimentCatalog {
    experiments: Vec<ExperimentDefinition>,
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    experiments: Vec<ExperimentEntry>,
}

#[derive(Debug, Deserialize)]
struct ExperimentEntry {
    name: String,
    variants: Vec<String>,
    weights: Vec<u32>,
}

impl ExperimentCatalog {
    /// Rejects empty variant lists and duplicate experiment or variant names. Weight totals other
    /// than 100 are only logged; selection falls back to the first variant
    /// for sample points past the total.
    pub fn new(experiments: Vec<ExperimentDefinition>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for exp in &experiments {
            if exp.variants.is_empty() {
                return Err(CatalogError::EmptyVariantList(exp.name.clone()));
            }
            if !seen.insert(exp.name.clone()) {
                return Err(CatalogError::DuplicateExperiment(exp.name.clone()));
            }
            let mut variant_names = HashSet::new();
            for variant in &exp.variants {
                if !variant_names.insert(variant.name.as_str()) {
                    return Err(CatalogError::DuplicateVariant {
                        experiment: exp.name.clone(),
                        variant: variant.name.clone(),
                    });
                }
            }
            let total = exp.total_weight();
            if total != SAMPLE_SPACE {
                tracing::warn!(
                    "experiment {} weights sum to {} (expected {}); uncovered sample points fall back to {}",
                    exp.name,
                    total,
                    SAMPLE_SPACE,
                    exp.variants[0].name
                );
            }
        }
        Ok(Self { experiments })
    }

    pub fn builtin() -> Self {
        Self {
            experiments: vec![
                ExperimentDefinition::new(
                    "welcomeMessage",
                    vec![Variant::new("standard", 50), Variant::new("new", 50)],
                ),
                ExperimentDefinition::new(
                    "holdMusic",
                    vec![
                        Variant::new("classical", 40),
                        Variant::new("jazz", 30),
                        Variant::new("ambient", 30),
                    ],
                ),
                ExperimentDefinition::new(
                    "menuOptions",
                    vec![Variant::new("detailed", 50), Variant::new("concise", 50)],
                ),
            ],
        }
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        let mut experiments = Vec::with_capacity(file.experiments.len());
        for entry in file.experiments {
            if entry.variants.len() != entry.weights.len() {
                return Err(CatalogError::WeightCountMismatch {
                    experiment: entry.name,
                    variants: entry.variants.len(),
                    weights: entry.weights.len(),
                });
            }
            let variants = entry
                .variants
                .into_iter()
                .zip(entry.weights)
                .map(|(name, weight)| Variant { name, weight })
                .collect();
            experiments.push(ExperimentDefinition {
                name: entry.name,
                variants,
            });
        }
        Self::new(experiments)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn get(&self, name: &str) -> Option<&ExperimentDefinition> {
        self.experiments.iter().find(|e| e.name == name)
    }

    /// Names in configuration order.
    pub fn names(&self) -> Vec<String> {
        self.experiments.iter().map(|e| e.name.clone()).collect()
    }

    pub fn definitions(&self) -> &[ExperimentDefinition] {
        &self.experiments
    }

    pub fn len(&self) -> usize {
        self.experiments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.experiments.is_empty()
    }
}
