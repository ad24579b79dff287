//----------------------------------------
// compute mod
//----------------------------------------
//! Public entry points for significance testing and experiment planning

pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
pub const DEFAULT_POWER: f64 = 0.8;

pub use crate::hypothesis_type::HypothesisType;
pub use crate::normal::std_normal::{
    critical_value, std_normal_cdf, std_normal_pdf, std_normal_quantile, std_normal_sf,
};
pub use crate::observation::types::GroupObservation;
pub use crate::request::handle::{handle, handle_json};
pub use crate::request::types::{Request, Response};
pub use crate::sample_size::estimate::{estimate, target_rate};
pub use crate::sample_size::mde::minimum_detectable_effect;
pub use crate::sample_size::power::achieved_power;
pub use crate::sample_size::types::{
    EffectType, MdeInput, MdeResult, PowerInput, SampleSizeFormula, SampleSizeInput,
    SampleSizeResult,
};
pub use crate::significance::evaluate::{
    evaluate, evaluate_with_hypothesis, p_value, two_proportion_z,
};
pub use crate::significance::types::{SignificanceResult, ZStatistic};
pub use crate::simulation::ab_sim::{run_ab_sim, run_n_ab_sims};
pub use crate::simulation::types::{SimulationInput, SimulationResult};
