//----------------------------------------
// significance mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::hypothesis_type::HypothesisType;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZStatistic {
    pub z_score: f64,
    pub standard_error: f64,
    pub pooled_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceResult {
    pub z_score: f64,
    pub p_value: f64,
    pub is_significant: bool,
    pub confidence_level: f64,
    pub hypothesis: HypothesisType,
    pub rate_a: f64,
    pub rate_b: f64,
    /// rate_b - rate_a
    pub absolute_difference: f64,
    /// (rate_b - rate_a) / rate_a; None when group A never converted
    pub relative_lift: Option<f64>,
    /// Set when the pooled rate is 0 or 1 and the zero-variance fallback
    /// (z = 0, p = 1) was reported
    pub degenerate: bool,
}
