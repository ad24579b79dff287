use crate::error::AbcomputeErr;
use crate::normal::std_normal::{critical_value, std_normal_cdf};
use crate::observation::error::InvalidInputError;
use crate::observation::validation::check_open_unit;
use crate::sample_size::estimate::{null_and_alt_sd, target_rate};
use crate::sample_size::types::{PowerInput, SampleSizeFormula};

/// Power of a design with n_per_group subjects in each arm, assuming the true
/// effect lies in the hypothesized direction
pub fn achieved_power(input: &PowerInput) -> Result<f64, AbcomputeErr> {
    check_open_unit("confidence_level", input.confidence_level)?;
    if input.n_per_group == 0 {
        return Err(InvalidInputError::ZeroSampleSize.into());
    }
    let p1 = input.baseline_rate;
    let p2 = target_rate(p1, input.minimum_detectable_effect, input.effect_type)?;
    let z_alpha = critical_value(input.confidence_level, input.hypothesis)?;
    Ok(power_at(p1, p2, z_alpha, input.n_per_group as f64, input.formula))
}

// Sample size formula solved for z_beta:
//   sqrt(n) * delta = z_alpha * sd_null + z_beta * sd_alt
pub(crate) fn power_at(p1: f64, p2: f64, z_alpha: f64, n: f64, formula: SampleSizeFormula) -> f64 {
    let (sd_null, sd_alt) = null_and_alt_sd(p1, p2);
    let signal = (p2 - p1).abs() * n.sqrt();
    let z_beta = match formula {
        SampleSizeFormula::Standard => (signal - z_alpha * sd_null) / sd_alt,
        SampleSizeFormula::Pooled => signal / sd_null - z_alpha,
    };
    std_normal_cdf(z_beta)
}
