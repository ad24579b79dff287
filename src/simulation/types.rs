//----------------------------------------
// simulation mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::hypothesis_type::HypothesisType;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationInput {
    /// True conversion rate of group A
    pub rate_a: f64,
    /// True conversion rate of group B
    pub rate_b: f64,
    pub visitors_per_group: u64,
    pub confidence_level: f64,
    #[serde(default)]
    pub hypothesis: HypothesisType,
    pub n_sims: usize,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub n_sims: usize,
    pub n_significant: usize,
    /// Type I error under equal rates, power otherwise
    pub rejection_rate: f64,
    pub n_degenerate: usize,
    pub mean_z_score: f64,
    pub sd_z_score: f64,
}
