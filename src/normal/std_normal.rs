use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc;

use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::normal::error::NormalDistErr;

pub fn std_normal_pdf(z: f64) -> f64 {
    (-z * z / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Phi(z)
pub fn std_normal_cdf(z: f64) -> f64 {
    0.5 * erfc(-z / SQRT_2)
}

/// 1 - Phi(z), without cancellation in the upper tail
pub fn std_normal_sf(z: f64) -> f64 {
    0.5 * erfc(z / SQRT_2)
}

// Acklam's rational approximation; relative error ~1.15e-9 before refinement
#[allow(clippy::excessive_precision)]
fn acklam_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;
    const P_HIGH: f64 = 1.0 - P_LOW;

    let tail = |q: f64| {
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    };
    if p < P_LOW {
        return tail((-2.0 * p.ln()).sqrt());
    }
    if p > P_HIGH {
        return -tail((-2.0 * (1.0 - p).ln()).sqrt());
    }
    let q = p - 0.5;
    let r = q * q;
    (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
        / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
}

/// Inverse of Phi. One Halley step against the erfc-based cdf brings the
/// rational approximation to full double precision.
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    let x = acklam_quantile(p);
    let e = std_normal_cdf(x) - p;
    let u = e * (2.0 * PI).sqrt() * (x * x / 2.0).exp();
    Ok(x - u / (1.0 + x * u / 2.0))
}

/// Critical value z such that the rejection region for the given
/// confidence level has the right mass in each tail
pub fn critical_value(
    confidence_level: f64,
    hypothesis: HypothesisType,
) -> Result<f64, AbcomputeErr> {
    let alpha = 1.0 - confidence_level;
    std_normal_quantile(1.0 - hypothesis.tail_alpha(alpha))
}
