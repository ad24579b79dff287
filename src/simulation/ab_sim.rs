use log::{debug, info};
use rand::{SeedableRng, distributions::Bernoulli, distributions::Distribution, rngs};

use crate::error::AbcomputeErr;
use crate::observation::error::InvalidInputError;
use crate::observation::types::GroupObservation;
use crate::observation::validation::check_open_unit;
use crate::significance::evaluate::evaluate_with_hypothesis;
use crate::simulation::types::{SimulationInput, SimulationResult};

/// Welford's running mean and variance, so memory stays flat in n_sims
#[derive(Debug, Default, Clone, Copy)]
struct RunningMoments {
    n: usize,
    mean: f64,
    m2: f64,
}

impl RunningMoments {
    fn push(&mut self, x: f64) {
        self.n += 1;
        let delta = x - self.mean;
        self.mean += delta / self.n as f64;
        self.m2 += delta * (x - self.mean);
    }

    fn mean(&self) -> f64 {
        if self.n == 0 { f64::NAN } else { self.mean }
    }

    /// Sample standard deviation; NaN with fewer than two values
    fn std_dev(&self) -> f64 {
        if self.n < 2 {
            f64::NAN
        } else {
            (self.m2 / (self.n - 1) as f64).sqrt()
        }
    }
}

fn conversion_dist(name: &'static str, rate: f64) -> Result<Bernoulli, AbcomputeErr> {
    check_open_unit(name, rate)?;
    Bernoulli::new(rate)
        .map_err(|_| InvalidInputError::ProbabilityOutOfRange { name, value: rate }.into())
}

/// Simulates a single experiment; each arm draws from its own seeded stream
pub fn run_ab_sim(
    conversion_a: &Bernoulli,
    conversion_b: &Bernoulli,
    visitors_per_group: u64,
    seed: u64,
) -> Result<(GroupObservation, GroupObservation), AbcomputeErr> {
    let rng_a = rngs::StdRng::seed_from_u64(seed);
    let rng_b = rngs::StdRng::seed_from_u64(seed.wrapping_add(1));
    let n = visitors_per_group as usize;
    let conversions_a = conversion_a.sample_iter(rng_a).take(n).filter(|&c| c).count();
    let conversions_b = conversion_b.sample_iter(rng_b).take(n).filter(|&c| c).count();
    Ok((
        GroupObservation::new(visitors_per_group, conversions_a as u64)?,
        GroupObservation::new(visitors_per_group, conversions_b as u64)?,
    ))
}

/// Monte Carlo estimate of how often the z-test rejects for a design
pub fn run_n_ab_sims(input: &SimulationInput) -> Result<SimulationResult, AbcomputeErr> {
    if input.n_sims == 0 {
        return Err(InvalidInputError::NoSimulations.into());
    }
    if input.visitors_per_group == 0 {
        return Err(InvalidInputError::ZeroSampleSize.into());
    }
    check_open_unit("confidence_level", input.confidence_level)?;
    let conversion_a = conversion_dist("rate_a", input.rate_a)?;
    let conversion_b = conversion_dist("rate_b", input.rate_b)?;
    info!(
        "Simulating {} experiments ({} vs. {}, {} visitors per group)",
        input.n_sims, input.rate_a, input.rate_b, input.visitors_per_group
    );

    let mut z_scores = RunningMoments::default();
    let mut n_significant = 0;
    let mut n_degenerate = 0;
    for i in 0..input.n_sims {
        // Two streams per experiment
        let seed = input.seed.wrapping_add(2 * i as u64);
        let (group_a, group_b) =
            run_ab_sim(&conversion_a, &conversion_b, input.visitors_per_group, seed)?;
        let res = evaluate_with_hypothesis(
            &group_a,
            &group_b,
            input.confidence_level,
            input.hypothesis,
        )?;
        if res.is_significant {
            n_significant += 1;
        }
        if res.degenerate {
            n_degenerate += 1;
        }
        z_scores.push(res.z_score);
    }

    let rejection_rate = n_significant as f64 / input.n_sims as f64;
    debug!("{n_significant} of {} simulated experiments significant", input.n_sims);
    Ok(SimulationResult {
        n_sims: input.n_sims,
        n_significant,
        rejection_rate,
        n_degenerate,
        mean_z_score: z_scores.mean(),
        sd_z_score: z_scores.std_dev(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hypothesis_type::HypothesisType;

    fn sim_input(rate_b: f64, visitors_per_group: u64, n_sims: usize) -> SimulationInput {
        SimulationInput {
            rate_a: 0.1,
            rate_b,
            visitors_per_group,
            confidence_level: 0.95,
            hypothesis: HypothesisType::NotEqual,
            n_sims,
            seed: 24601,
        }
    }

    #[test]
    fn aa_test_type_one_error() {
        let res = run_n_ab_sims(&sim_input(0.1, 2000, 1000)).expect("failed to simulate");
        // Nominal 5%; binomial sd of the estimate is ~0.7%
        assert!(res.rejection_rate > 0.02 && res.rejection_rate < 0.08);
        // z scores are approximately standard normal under H0
        assert!(res.mean_z_score.abs() < 0.2);
        assert!((res.sd_z_score - 1.).abs() < 0.15);
    }

    #[test]
    fn simulated_power_matches_design() {
        // 3841 per group gives 80% power for 10% vs. 12%
        let res = run_n_ab_sims(&sim_input(0.12, 3841, 400)).expect("failed to simulate");
        assert!(res.rejection_rate > 0.7 && res.rejection_rate < 0.9);
        // B converts better, so z = (p_A - p_B) / SE is negative on average
        assert!(res.mean_z_score < 0.);
    }

    #[test]
    fn running_moments_1() {
        let mut moments = RunningMoments::default();
        for x in [2., 4., 4., 4., 5., 5., 7., 9.] {
            moments.push(x);
        }
        assert!((moments.mean() - 5.).abs() < 1e-12);
        assert!((moments.std_dev() - (32_f64 / 7.).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn running_moments_too_few_values() {
        let mut moments = RunningMoments::default();
        assert!(moments.mean().is_nan());
        moments.push(1.5);
        assert_eq!(moments.mean(), 1.5);
        assert!(moments.std_dev().is_nan());
    }

    #[test]
    fn same_seed_same_result() {
        let first = run_n_ab_sims(&sim_input(0.11, 500, 50)).unwrap();
        let second = run_n_ab_sims(&sim_input(0.11, 500, 50)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn single_sim_counts_within_visitors() {
        let a = Bernoulli::new(0.3).unwrap();
        let b = Bernoulli::new(0.6).unwrap();
        let (group_a, group_b) = run_ab_sim(&a, &b, 100, 7).expect("failed to simulate");
        assert_eq!(group_a.visitors, 100);
        assert!(group_a.conversions <= 100);
        assert!(group_b.conversions <= 100);
    }

    #[test]
    fn rejects_bad_configuration() {
        assert!(run_n_ab_sims(&sim_input(0.1, 100, 0)).is_err());
        assert!(run_n_ab_sims(&sim_input(0.1, 0, 10)).is_err());
        assert!(run_n_ab_sims(&sim_input(1.2, 100, 10)).is_err());
    }
}
