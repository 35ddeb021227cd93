use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub name: String,
    pub weight: u32,
}

impl Variant {
    pub fn new(name: &str, weight: u32) -> Self {
        Self {
            name: name.to_string(),
            weight,
        }
    }
}

/// A named experiment. Variant order defines the cumulative-weight
/// boundaries and the fallback variant (the first one).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentDefinition {
    pub name: String,
    pub variants: Vec<Variant>,
}

impl ExperimentDefinition {
    pub fn new(name: &str, variants: Vec<Variant>) -> Self {
        Self {
            name: name.to_string(),
            variants,
        }
    }

    pub fn total_weight(&self) -> u32 {
        self.variants
            .iter()
            .fold(0_u32, |acc, v| acc.saturating_add(v.weight))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    Random,
    Deterministic,
}

#[derive(Debug, Clone)]
pub struct SelectionRequest {
    pub experiment: String,
    pub caller: Option<String>,
    pub mode: SelectionMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionResult {
    pub experiment: String,
    pub variant: String,
    pub mode: SelectionMode,
    pub sample_point: u32,
}

/// Form/query parameters posted by the call flow. Field names follow the
/// telephony webhook conventions, with camelCase aliases for other callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentParams {
    #[serde(rename = "experimentName", default)]
    pub experiment_name: Option<String>,
    #[serde(rename = "persistentAssignment", default)]
    pub persistent_assignment: Option<String>,
    #[serde(rename = "CallSid", alias = "callId", default)]
    pub call_id: Option<String>,
    #[serde(rename = "From", alias = "caller", default)]
    pub caller: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentResponse {
    pub status: String,
    pub experiment: String,
    pub variant: String,
    pub call_id: String,
    pub caller: String,
    pub is_persistent: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentErrorBody {
    pub status: String,
    pub message: String,
    pub valid_experiments: Vec<String>,
}
