//----------------------------------------
// request mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::compute::DEFAULT_CONFIDENCE_LEVEL;
use crate::hypothesis_type::HypothesisType;
use crate::observation::types::GroupObservation;
use crate::sample_size::types::{MdeInput, MdeResult, PowerInput, SampleSizeInput, SampleSizeResult};
use crate::significance::types::SignificanceResult;
use crate::simulation::types::{SimulationInput, SimulationResult};

fn default_confidence_level() -> f64 {
    DEFAULT_CONFIDENCE_LEVEL
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Request {
    Significance {
        group_a: GroupObservation,
        group_b: GroupObservation,
        #[serde(default = "default_confidence_level")]
        confidence_level: f64,
        #[serde(default)]
        hypothesis: HypothesisType,
    },
    SampleSize(SampleSizeInput),
    Power(PowerInput),
    MinimumDetectableEffect(MdeInput),
    Simulate(SimulationInput),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "snake_case")]
pub enum Response {
    Significance(SignificanceResult),
    SampleSize(SampleSizeResult),
    Power { power: f64 },
    MinimumDetectableEffect(MdeResult),
    Simulate(SimulationResult),
    Error { error: String },
}
