use crate::domain::experiment::{
    ExperimentDefinition, SelectionMode, SelectionRequest, SelectionResult,
};
use crate::error::AssignmentError;
use crate::experiments::catalog::ExperimentCatalog;
use crate::experiments::digest::digest;
use crate::experiments::sampler::SamplePointSource;

/// Cumulative-weight scan: the first variant whose running total exceeds
/// `sample_point` wins. Points past the total map to the first variant.
pub fn select_index(
    experiment: &ExperimentDefinition,
    sample_point: u32,
) -> Result<usize, AssignmentError> {
    if experiment.variants.is_empty() {
        return Err(AssignmentError::EmptyVariantList(experiment.name.clone()));
    }

    let mut cumulative = 0_u32;
    for (idx, variant) in experiment.variants.iter().enumerate() {
        cumulative = cumulative.saturating_add(variant.weight);
        if sample_point < cumulative {
            return Ok(idx);
        }
    }

    Ok(0)
}

pub fn select(
    experiment: &ExperimentDefinition,
    sample_point: u32,
) -> Result<&str, AssignmentError> {
    let idx = select_index(experiment, sample_point)?;
    Ok(experiment.variants[idx].name.as_str())
}

pub fn assign(
    catalog: &ExperimentCatalog,
    request: &SelectionRequest,
    sampler: &dyn SamplePointSource,
) -> Result<SelectionResult, AssignmentError> {
    let experiment = catalog
        .get(&request.experiment)
        .ok_or_else(|| AssignmentError::UnknownExperiment(Some(request.experiment.clone())))?;

    let caller = request.caller.as_deref().filter(|c| !c.is_empty());
    let (mode, sample_point) = match (request.mode, caller) {
        (SelectionMode::Deterministic, Some(caller)) => {
            (SelectionMode::Deterministic, digest(caller))
        }
        _ => (SelectionMode::Random, sampler.next_uniform()),
    };

    let variant = select(experiment, sample_point)?;
    Ok(SelectionResult {
        experiment: experiment.name.clone(),
        variant: variant.to_string(),
        mode,
        sample_point,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::experiment::Variant;
    use crate::experiments::sampler::SequenceSampler;

    fn request(experiment: &str, caller: Option<&str>, mode: SelectionMode) -> SelectionRequest {
        SelectionRequest {
            experiment: experiment.to_string(),
            caller: caller.map(str::to_string),
            mode,
        }
    }

    #[test]
    fn boundaries_follow_cumulative_weights() {
        let exp = ExperimentDefinition::new(
            "holdMusic",
            vec![
                Variant::new("classical", 40),
                Variant::new("jazz", 30),
                Variant::new("ambient", 30),
            ],
        );
        assert_eq!(select(&exp, 0).unwrap(), "classical");
        assert_eq!(select(&exp, 39).unwrap(), "classical");
        assert_eq!(select(&exp, 40).unwrap(), "jazz");
        assert_eq!(select(&exp, 69).unwrap(), "jazz");
        assert_eq!(select(&exp, 70).unwrap(), "ambient");
        assert_eq!(select(&exp, 99).unwrap(), "ambient");
    }

    #[test]
    fn uncovered_tail_falls_back_to_first() {
        let exp = ExperimentDefinition::new(
            "short",
            vec![Variant::new("a", 30), Variant::new("b", 30)],
        );
        assert_eq!(select(&exp, 45).unwrap(), "b");
        assert_eq!(select(&exp, 60).unwrap(), "a");
        assert_eq!(select(&exp, 99).unwrap(), "a");
    }

    #[test]
    fn zero_weight_variant_is_never_chosen() {
        let exp = ExperimentDefinition::new(
            "off",
            vec![Variant::new("a", 0), Variant::new("b", 100)],
        );
        assert!((0..100).all(|p| select(&exp, p).unwrap() == "b"));
    }

    #[test]
    fn index_matches_name() {
        let exp = ExperimentDefinition::new(
            "twins",
            vec![Variant::new("same", 50), Variant::new("same", 50)],
        );
        assert_eq!(select_index(&exp, 49).unwrap(), 0);
        assert_eq!(select_index(&exp, 50).unwrap(), 1);
        assert_eq!(select(&exp, 50).unwrap(), "same");
    }

    #[test]
    fn empty_experiment_is_an_error() {
        let exp = ExperimentDefinition::new("void", Vec::new());
        assert!(matches!(
            select(&exp, 0),
            Err(AssignmentError::EmptyVariantList(name)) if name == "void"
        ));
    }

    #[test]
    fn deterministic_mode_uses_digest() {
        let catalog = ExperimentCatalog::builtin();
        let sampler = SequenceSampler::new(vec![99]);
        let out = assign(
            &catalog,
            &request("welcomeMessage", Some("555-1234"), SelectionMode::Deterministic),
            &sampler,
        )
        .unwrap();
        assert_eq!(out.mode, SelectionMode::Deterministic);
        assert_eq!(out.sample_point, 10);
        assert_eq!(out.variant, "standard");
    }

    #[test]
    fn deterministic_mode_without_caller_draws_randomly() {
        let catalog = ExperimentCatalog::builtin();
        let sampler = SequenceSampler::new(vec![70]);
        let out = assign(
            &catalog,
            &request("holdMusic", Some(""), SelectionMode::Deterministic),
            &sampler,
        )
        .unwrap();
        assert_eq!(out.mode, SelectionMode::Random);
        assert_eq!(out.variant, "ambient");
    }

    #[test]
    fn random_mode_ignores_caller() {
        let catalog = ExperimentCatalog::builtin();
        let sampler = SequenceSampler::new(vec![50]);
        let out = assign(
            &catalog,
            &request("welcomeMessage", Some("555-1234"), SelectionMode::Random),
            &sampler,
        )
        .unwrap();
        assert_eq!(out.sample_point, 50);
        assert_eq!(out.variant, "new");
    }

    #[test]
    fn unknown_experiment_is_reported() {
        let catalog = ExperimentCatalog::builtin();
        let err = assign(
            &catalog,
            &request("nope", None, SelectionMode::Random),
            &SequenceSampler::new(vec![0]),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid or missing experiment name: nope");
    }
}
