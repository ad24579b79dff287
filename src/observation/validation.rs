use crate::error::AbcomputeErr;
use crate::observation::error::InvalidInputError;

/// Checks that a probability-like argument (rate, confidence, power) lies
/// strictly inside (0, 1)
pub fn check_open_unit(name: &'static str, value: f64) -> Result<f64, AbcomputeErr> {
    if !value.is_finite() {
        return Err(InvalidInputError::NonFiniteValue { name, value }.into());
    }
    if value <= 0. || value >= 1. {
        return Err(InvalidInputError::ProbabilityOutOfRange { name, value }.into());
    }
    Ok(value)
}
