//----------------------------------------
// sample size mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::hypothesis_type::HypothesisType;

/// How the minimum detectable effect relates to the baseline rate
#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectType {
    /// target = baseline + effect
    #[default]
    Absolute,
    /// target = baseline * (1 + effect)
    Relative,
}

#[derive(Default, Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleSizeFormula {
    /// Pooled variance under H0 for z_alpha, unpooled variance under H1 for z_beta
    #[default]
    Standard,
    /// 2 p(1 - p) (z_alpha + z_beta)^2 / delta^2 with the average rate p
    Pooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleSizeInput {
    pub baseline_rate: f64,
    pub minimum_detectable_effect: f64,
    pub confidence_level: f64,
    pub power: f64,
    #[serde(default)]
    pub effect_type: EffectType,
    #[serde(default)]
    pub hypothesis: HypothesisType,
    #[serde(default)]
    pub formula: SampleSizeFormula,
}

impl SampleSizeInput {
    /// Absolute effect, two-sided, standard formula
    pub fn new(
        baseline_rate: f64,
        minimum_detectable_effect: f64,
        confidence_level: f64,
        power: f64,
    ) -> Self {
        SampleSizeInput {
            baseline_rate,
            minimum_detectable_effect,
            confidence_level,
            power,
            effect_type: EffectType::default(),
            hypothesis: HypothesisType::default(),
            formula: SampleSizeFormula::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleSizeResult {
    pub required_per_group: u64,
    pub total_required: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerInput {
    pub baseline_rate: f64,
    pub minimum_detectable_effect: f64,
    pub confidence_level: f64,
    pub n_per_group: u64,
    #[serde(default)]
    pub effect_type: EffectType,
    #[serde(default)]
    pub hypothesis: HypothesisType,
    #[serde(default)]
    pub formula: SampleSizeFormula,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MdeInput {
    pub baseline_rate: f64,
    pub n_per_group: u64,
    pub confidence_level: f64,
    pub power: f64,
    #[serde(default)]
    pub effect_type: EffectType,
    #[serde(default)]
    pub hypothesis: HypothesisType,
    #[serde(default)]
    pub formula: SampleSizeFormula,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MdeResult {
    /// Expressed in the requested effect type
    pub minimum_detectable_effect: f64,
    pub absolute_effect: f64,
    pub target_rate: f64,
    pub achieved_power: f64,
}
