use log::{debug, warn};

use crate::error::AbcomputeErr;
use crate::hypothesis_type::HypothesisType;
use crate::normal::std_normal::{std_normal_cdf, std_normal_sf};
use crate::observation::types::GroupObservation;
use crate::observation::validation::check_open_unit;
use crate::significance::error::DegenerateInputError;
use crate::significance::types::{SignificanceResult, ZStatistic};

/// Pooled two-proportion z statistic, z = (p_A - p_B) / SE.
/// Fails with `DegenerateInputError` when the pooled rate is 0 or 1.
pub fn two_proportion_z(
    group_a: &GroupObservation,
    group_b: &GroupObservation,
) -> Result<ZStatistic, AbcomputeErr> {
    group_a.validate()?;
    group_b.validate()?;

    let (n_a, n_b) = (group_a.visitors as f64, group_b.visitors as f64);
    let p_a = group_a.conversions as f64 / n_a;
    let p_b = group_b.conversions as f64 / n_b;
    // Summed as f64; the u64 counts can overflow
    let pooled_rate =
        (group_a.conversions as f64 + group_b.conversions as f64) / (n_a + n_b);
    let standard_error = (pooled_rate * (1. - pooled_rate) * (1. / n_a + 1. / n_b)).sqrt();

    if standard_error == 0. {
        return Err(DegenerateInputError::ZeroVariance(pooled_rate).into());
    }

    Ok(ZStatistic {
        z_score: (p_a - p_b) / standard_error,
        standard_error,
        pooled_rate,
    })
}

/// Tail probability of the standard normal for the given alternative.
/// z is oriented A minus B, so "B greater" lives in the lower tail.
pub fn p_value(z_score: f64, hypothesis: HypothesisType) -> f64 {
    match hypothesis {
        HypothesisType::NotEqual => (2. * std_normal_sf(z_score.abs())).min(1.),
        HypothesisType::TrtGreater => std_normal_cdf(z_score),
        HypothesisType::TrtLess => std_normal_sf(z_score),
    }
}

/// Two-sided two-proportion z-test
pub fn evaluate(
    group_a: &GroupObservation,
    group_b: &GroupObservation,
    confidence_level: f64,
) -> Result<SignificanceResult, AbcomputeErr> {
    evaluate_with_hypothesis(group_a, group_b, confidence_level, HypothesisType::NotEqual)
}

pub fn evaluate_with_hypothesis(
    group_a: &GroupObservation,
    group_b: &GroupObservation,
    confidence_level: f64,
    hypothesis: HypothesisType,
) -> Result<SignificanceResult, AbcomputeErr> {
    check_open_unit("confidence_level", confidence_level)?;

    let (z_score, p_value, degenerate) = match two_proportion_z(group_a, group_b) {
        Ok(stat) => {
            debug!(
                "pooled rate {:.6}, standard error {:.6}, z {:.4}",
                stat.pooled_rate, stat.standard_error, stat.z_score
            );
            (stat.z_score, p_value(stat.z_score, hypothesis), false)
        }
        Err(AbcomputeErr::DegenerateInput(e)) => {
            warn!("{e}; reporting z = 0, p = 1");
            (0., 1., true)
        }
        Err(e) => return Err(e),
    };

    // Both groups were validated above, so the rates exist
    let rate_a = group_a.conversions as f64 / group_a.visitors as f64;
    let rate_b = group_b.conversions as f64 / group_b.visitors as f64;
    let absolute_difference = rate_b - rate_a;
    let relative_lift = if rate_a > 0. {
        Some(absolute_difference / rate_a)
    } else {
        None
    };

    Ok(SignificanceResult {
        z_score,
        p_value,
        is_significant: p_value < 1. - confidence_level,
        confidence_level,
        hypothesis,
        rate_a,
        rate_b,
        absolute_difference,
        relative_lift,
        degenerate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::error::InvalidInputError;

    fn obs(visitors: u64, conversions: u64) -> GroupObservation {
        GroupObservation::new(visitors, conversions).expect("failed to construct observation")
    }

    #[test]
    fn small_lift_not_significant() {
        let res = evaluate(&obs(1000, 100), &obs(1000, 120), 0.95)
            .expect("failed to evaluate significance");
        assert!((res.z_score - -1.4293008498232314).abs() < 1e-9);
        assert!((res.p_value - 0.15291778186394622).abs() < 1e-6);
        assert!(!res.is_significant);
        assert!(!res.degenerate);
    }

    #[test]
    fn large_sample_significant() {
        let res = evaluate(&obs(10000, 1000), &obs(10000, 1200), 0.95)
            .expect("failed to evaluate significance");
        assert!((res.z_score - -4.519846147055684).abs() < 1e-9);
        assert!(res.p_value < 1e-5);
        assert!(res.is_significant);
    }

    #[test]
    fn calculator_default_inputs() {
        // 500 / 10000 vs. 560 / 9800
        let res = evaluate(&obs(10000, 500), &obs(9800, 560), 0.95)
            .expect("failed to evaluate significance");
        assert!((res.z_score - -2.232440390437487).abs() < 1e-9);
        assert!((res.p_value - 0.025585870826811075).abs() < 1e-6);
        assert!(res.is_significant);
        let lift = res.relative_lift.expect("group A has conversions");
        assert!((lift - (560. / 9800. - 0.05) / 0.05).abs() < 1e-12);
    }

    #[test]
    fn identical_groups() {
        let res = evaluate(&obs(5000, 250), &obs(5000, 250), 0.95)
            .expect("failed to evaluate significance");
        assert_eq!(res.z_score, 0.);
        assert!((res.p_value - 1.).abs() < 1e-12);
        assert!(!res.is_significant);
    }

    #[test]
    fn swapping_groups_flips_sign_only() {
        let ab = evaluate(&obs(2400, 130), &obs(2100, 151), 0.9).unwrap();
        let ba = evaluate(&obs(2100, 151), &obs(2400, 130), 0.9).unwrap();
        assert!((ab.z_score + ba.z_score).abs() < 1e-12);
        assert!((ab.p_value - ba.p_value).abs() < 1e-12);
        assert_eq!(ab.is_significant, ba.is_significant);
    }

    #[test]
    fn one_sided_p_values() {
        let a = obs(1000, 100);
        let b = obs(1000, 120);
        let greater = evaluate_with_hypothesis(&a, &b, 0.95, HypothesisType::TrtGreater).unwrap();
        let less = evaluate_with_hypothesis(&a, &b, 0.95, HypothesisType::TrtLess).unwrap();
        assert!((greater.p_value - 0.07645889093197311).abs() < 1e-6);
        assert!((less.p_value - 0.9235411090680269).abs() < 1e-6);
        assert!((greater.p_value + less.p_value - 1.).abs() < 1e-12);
    }

    #[test]
    fn p_value_non_increasing_in_z() {
        let mut prev = p_value(0., HypothesisType::NotEqual);
        for i in 1..60 {
            let cur = p_value(i as f64 * 0.1, HypothesisType::NotEqual);
            assert!(cur <= prev);
            prev = cur;
        }
    }

    #[test]
    fn zero_variance_fallback() {
        let res = evaluate(&obs(100, 0), &obs(200, 0), 0.95)
            .expect("degenerate input should fall back");
        assert_eq!(res.z_score, 0.);
        assert_eq!(res.p_value, 1.);
        assert!(!res.is_significant);
        assert!(res.degenerate);
        assert_eq!(res.relative_lift, None);

        let all = evaluate(&obs(50, 50), &obs(70, 70), 0.95).unwrap();
        assert!(all.degenerate);
    }

    #[test]
    fn zero_variance_is_error_for_raw_statistic() {
        assert!(matches!(
            two_proportion_z(&obs(100, 100), &obs(10, 10)),
            Err(AbcomputeErr::DegenerateInput(
                DegenerateInputError::ZeroVariance(_)
            ))
        ));
    }

    #[test]
    fn counts_near_u64_max() {
        let huge = obs(u64::MAX, u64::MAX / 2 + 1);
        let res = evaluate(&huge, &huge, 0.95).expect("large counts should evaluate");
        assert_eq!(res.z_score, 0.);
        assert!(!res.is_significant);
        assert!(!res.degenerate);
    }

    #[test]
    fn zero_visitors_rejected() {
        let empty = GroupObservation {
            visitors: 0,
            conversions: 0,
        };
        let res = evaluate(&empty, &obs(10, 1), 0.95);
        assert!(matches!(
            res,
            Err(AbcomputeErr::InvalidInput(
                InvalidInputError::NonPositiveVisitors(0)
            ))
        ));
    }

    #[test]
    fn bad_confidence_rejected() {
        for c in [0., 1., 1.2] {
            let res = evaluate(&obs(10, 1), &obs(10, 2), c);
            assert!(res.expect_err("confidence out of range").is_invalid_input());
        }
    }
}
