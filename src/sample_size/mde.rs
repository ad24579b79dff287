use log::debug;

use crate::error::AbcomputeErr;
use crate::normal::std_normal::critical_value;
use crate::observation::error::InvalidInputError;
use crate::observation::validation::check_open_unit;
use crate::sample_size::power::power_at;
use crate::sample_size::types::{EffectType, MdeInput, MdeResult};
use crate::util::root_find::root_find_monotonic;

const EFFECT_TOL: f64 = 1e-8;

/// Smallest effect a design with n_per_group subjects per arm detects with
/// the requested power
pub fn minimum_detectable_effect(input: &MdeInput) -> Result<MdeResult, AbcomputeErr> {
    let p1 = check_open_unit("baseline_rate", input.baseline_rate)?;
    check_open_unit("confidence_level", input.confidence_level)?;
    check_open_unit("power", input.power)?;
    if input.n_per_group == 0 {
        return Err(InvalidInputError::ZeroSampleSize.into());
    }

    let z_alpha = critical_value(input.confidence_level, input.hypothesis)?;
    let n = input.n_per_group as f64;
    let power_by_effect = |delta: f64| power_at(p1, p1 + delta, z_alpha, n, input.formula);

    // With no effect the test still rejects at roughly the tail alpha
    let null_power = power_by_effect(0.);
    if input.power <= null_power {
        return Err(InvalidInputError::PowerNotAboveNull {
            power: input.power,
            null_power,
        }
        .into());
    }

    // Largest admissible absolute effect keeps the target rate below 1
    let max_effect = (1. - p1) * (1. - 1e-9);
    let absolute_effect = root_find_monotonic(power_by_effect, 0., max_effect, input.power, EFFECT_TOL)?;
    debug!("absolute mde {absolute_effect:.8} for n = {n}");

    let minimum_detectable_effect = match input.effect_type {
        EffectType::Absolute => absolute_effect,
        EffectType::Relative => absolute_effect / p1,
    };
    Ok(MdeResult {
        minimum_detectable_effect,
        absolute_effect,
        target_rate: p1 + absolute_effect,
        achieved_power: power_by_effect(absolute_effect),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis_type::HypothesisType;
    use crate::sample_size::estimate::estimate;
    use crate::sample_size::types::{SampleSizeFormula, SampleSizeInput};

    fn mde_input(n_per_group: u64, effect_type: EffectType) -> MdeInput {
        MdeInput {
            baseline_rate: 0.1,
            n_per_group,
            confidence_level: 0.95,
            power: 0.8,
            effect_type,
            hypothesis: HypothesisType::NotEqual,
            formula: SampleSizeFormula::Standard,
        }
    }

    #[test]
    fn mde_inverts_estimate() {
        // 3841 per group is the estimate for a 2 point absolute lift
        let res = minimum_detectable_effect(&mde_input(3841, EffectType::Absolute))
            .expect("failed to compute mde");
        assert!(res.absolute_effect <= 0.02);
        assert!((res.absolute_effect - 0.02).abs() < 1e-4);
        assert!(res.achieved_power >= 0.8);

        let n = estimate(&SampleSizeInput::new(0.1, res.absolute_effect, 0.95, 0.8))
            .unwrap()
            .required_per_group;
        assert!((n as i64 - 3841).abs() <= 1);
    }

    #[test]
    fn mde_relative() {
        let abs = minimum_detectable_effect(&mde_input(3841, EffectType::Absolute)).unwrap();
        let rel = minimum_detectable_effect(&mde_input(3841, EffectType::Relative)).unwrap();
        assert!((rel.minimum_detectable_effect - abs.absolute_effect / 0.1).abs() < 1e-12);
        assert!((rel.target_rate - abs.target_rate).abs() < 1e-12);
    }

    #[test]
    fn mde_shrinks_with_n() {
        let small = minimum_detectable_effect(&mde_input(1000, EffectType::Absolute)).unwrap();
        let large = minimum_detectable_effect(&mde_input(50_000, EffectType::Absolute)).unwrap();
        assert!(large.absolute_effect < small.absolute_effect);
    }

    #[test]
    fn mde_power_below_null_rejection() {
        // At 50% confidence a two-sided test rejects ~25% of the time with no
        // effect, so 10% power is reached by every effect
        let input = MdeInput {
            confidence_level: 0.5,
            power: 0.1,
            ..mde_input(1000, EffectType::Absolute)
        };
        match minimum_detectable_effect(&input) {
            Err(AbcomputeErr::InvalidInput(InvalidInputError::PowerNotAboveNull {
                power,
                null_power,
            })) => {
                assert_eq!(power, 0.1);
                assert!((null_power - 0.25).abs() < 1e-9);
            }
            other => panic!("expected power not above null, got {other:?}"),
        }
    }

    #[test]
    fn mde_unreachable_power() {
        // Two subjects per arm cannot reach 99.9% power at any rate
        let input = MdeInput {
            n_per_group: 2,
            power: 0.999,
            baseline_rate: 0.5,
            ..mde_input(2, EffectType::Absolute)
        };
        assert!(matches!(
            minimum_detectable_effect(&input),
            Err(AbcomputeErr::RootFind(_))
        ));
    }
}
