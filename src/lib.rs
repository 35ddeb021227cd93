pub mod config;
pub mod domain {
    pub mod experiment;
}
pub mod error;
pub mod experiments {
    pub mod assigner;
    pub mod catalog;
    pub mod digest;
    pub mod sampler;
}
pub mod http {
    pub mod handlers {
        pub mod assignments;
        pub mod experiments;
        pub mod ops;
    }
    pub mod routes;
}
pub mod service {
    pub mod assignment_service;
}

use experiments::catalog::ExperimentCatalog;
use experiments::sampler::SamplePointSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub assignment_service: service::assignment_service::AssignmentService,
    pub catalog: Arc<ExperimentCatalog>,
}

impl AppState {
    pub fn new(
        catalog: ExperimentCatalog,
        sampler: Arc<dyn SamplePointSource>,
        default_experiment: Option<String>,
    ) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            assignment_service: service::assignment_service::AssignmentService {
                catalog: catalog.clone(),
                sampler,
                default_experiment,
            },
            catalog,
        }
    }
}
