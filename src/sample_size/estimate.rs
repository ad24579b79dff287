use log::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::{critical_value, std_normal_quantile};
use crate::observation::error::InvalidInputError;
use crate::observation::validation::check_open_unit;
use crate::sample_size::types::{EffectType, SampleSizeFormula, SampleSizeInput, SampleSizeResult};

/// Rate the design is powered to detect. Must stay strictly inside (0, 1);
/// out-of-range targets are rejected rather than clamped.
pub fn target_rate(
    baseline_rate: f64,
    minimum_detectable_effect: f64,
    effect_type: EffectType,
) -> Result<f64, AbcomputeErr> {
    check_open_unit("baseline_rate", baseline_rate)?;
    if !minimum_detectable_effect.is_finite() {
        return Err(InvalidInputError::NonFiniteValue {
            name: "minimum_detectable_effect",
            value: minimum_detectable_effect,
        }
        .into());
    }
    if minimum_detectable_effect <= 0. {
        return Err(InvalidInputError::NonPositiveEffect(minimum_detectable_effect).into());
    }
    let target = match effect_type {
        EffectType::Absolute => baseline_rate + minimum_detectable_effect,
        EffectType::Relative => baseline_rate * (1. + minimum_detectable_effect),
    };
    // A tiny effect can round back onto the baseline
    if target >= 1. || target <= baseline_rate {
        return Err(InvalidInputError::EffectOutOfRange(target).into());
    }
    Ok(target)
}

/// Standard deviations of the difference (times sqrt(n)) under H0 and H1.
/// Under H0 both arms share the average rate.
pub(crate) fn null_and_alt_sd(p1: f64, p2: f64) -> (f64, f64) {
    let p_bar = (p1 + p2) / 2.;
    let sd_null = (2. * p_bar * (1. - p_bar)).sqrt();
    let sd_alt = (p1 * (1. - p1) + p2 * (1. - p2)).sqrt();
    (sd_null, sd_alt)
}

/// Unrounded per-group sample size
pub(crate) fn raw_sample_size(
    p1: f64,
    p2: f64,
    z_alpha: f64,
    z_beta: f64,
    formula: SampleSizeFormula,
) -> f64 {
    let (sd_null, sd_alt) = null_and_alt_sd(p1, p2);
    let delta_sq = (p2 - p1).powi(2);
    match formula {
        SampleSizeFormula::Standard => {
            (z_alpha * sd_null + z_beta * sd_alt).max(0.).powi(2) / delta_sq
        }
        SampleSizeFormula::Pooled => sd_null.powi(2) * (z_alpha + z_beta).max(0.).powi(2) / delta_sq,
    }
}

/// Minimum per-group sample size needed to detect the given effect
pub fn estimate(input: &SampleSizeInput) -> Result<SampleSizeResult, AbcomputeErr> {
    check_open_unit("confidence_level", input.confidence_level)?;
    check_open_unit("power", input.power)?;
    let p1 = input.baseline_rate;
    let p2 = target_rate(p1, input.minimum_detectable_effect, input.effect_type)?;

    let z_alpha = critical_value(input.confidence_level, input.hypothesis)?;
    let z_beta = std_normal_quantile(input.power)?;
    let n = raw_sample_size(p1, p2, z_alpha, z_beta, input.formula);
    debug!("p1 {p1}, p2 {p2}, z_alpha {z_alpha:.6}, z_beta {z_beta:.6}, n {n:.4}");

    if !n.is_finite() || n.ceil() >= u64::MAX as f64 {
        return Err(InvalidInputError::SampleSizeTooLarge(n).into());
    }
    let required_per_group = (n.ceil() as u64).max(1);
    let total_required = required_per_group
        .checked_mul(2)
        .ok_or(InvalidInputError::SampleSizeTooLarge(n))?;
    Ok(SampleSizeResult {
        required_per_group,
        total_required,
    })
}
