use crate::domain::experiment::{
    AssignmentErrorBody, AssignmentParams, AssignmentResponse, SelectionMode, SelectionRequest,
};
use crate::error::AssignmentError;
use crate::experiments::assigner::assign;
use crate::experiments::catalog::ExperimentCatalog;
use crate::experiments::sampler::SamplePointSource;
use axum::http::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AssignmentService {
    pub catalog: Arc<ExperimentCatalog>,
    pub sampler: Arc<dyn SamplePointSource>,
    pub default_experiment: Option<String>,
}

impl AssignmentService {
    pub fn assign(
        &self,
        params: &AssignmentParams,
    ) -> Result<AssignmentResponse, (StatusCode, AssignmentErrorBody)> {
        let experiment = self
            .resolve_experiment_name(params)
            .ok_or_else(|| self.reject(AssignmentError::UnknownExperiment(None)))?;

        let caller = params.caller.clone().unwrap_or_default();
        let is_persistent = params.persistent_assignment.as_deref() == Some("true");
        let request = SelectionRequest {
            experiment,
            caller: Some(caller.clone()),
            mode: if is_persistent {
                SelectionMode::Deterministic
            } else {
                SelectionMode::Random
            },
        };

        let result =
            assign(&self.catalog, &request, self.sampler.as_ref()).map_err(|e| self.reject(e))?;

        tracing::info!(
            "experiment assignment: {} -> {} for caller {} (mode={:?}, point={})",
            result.experiment,
            result.variant,
            caller,
            result.mode,
            result.sample_point
        );

        Ok(AssignmentResponse {
            status: "success".to_string(),
            experiment: result.experiment,
            variant: result.variant,
            call_id: params.call_id.clone().unwrap_or_default(),
            caller,
            is_persistent,
        })
    }

    fn resolve_experiment_name(&self, params: &AssignmentParams) -> Option<String> {
        params
            .experiment_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .or_else(|| self.default_experiment.as_deref())
            .map(str::to_string)
    }

    fn reject(&self, error: AssignmentError) -> (StatusCode, AssignmentErrorBody) {
        let status = match error {
            AssignmentError::UnknownExperiment(_) => StatusCode::BAD_REQUEST,
            AssignmentError::EmptyVariantList(_) => {
                tracing::error!("misconfigured experiment: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (
            status,
            AssignmentErrorBody {
                status: "error".to_string(),
                message: error.to_string(),
                valid_experiments: self.catalog.names(),
            },
        )
    }
}
