use thiserror::Error;

use crate::error::AbcomputeErr;

const MAX_ITERATIONS: usize = 200;

#[derive(Error, Debug)]
pub enum RootFindErr {
    #[error("f(lower_bound) already reaches target; use smaller lower bound")]
    BadLowerBound,
    #[error("f(upper_bound) = {0} never reaches target {1}")]
    TargetNotBracketed(f64, f64),
    #[error("failed to converge within {0} iterations")]
    FailedToConverge(usize),
}

impl From<RootFindErr> for AbcomputeErr {
    fn from(err: RootFindErr) -> AbcomputeErr {
        AbcomputeErr::RootFind(err)
    }
}

/// Given a monotonically increasing function f(x) on [lower_bound, upper_bound],
/// finds the smallest x (to within tol) such that f(x) >= target.
/// The returned value always satisfies f(x) >= target.
pub fn root_find_monotonic<F>(
    f: F,
    lower_bound: f64,
    upper_bound: f64,
    target: f64,
    tol: f64,
) -> Result<f64, AbcomputeErr>
where
    F: Fn(f64) -> f64,
{
    if f(lower_bound) >= target {
        return Err(RootFindErr::BadLowerBound.into());
    }
    let f_upper_bound = f(upper_bound);
    if !(f_upper_bound >= target) {
        return Err(RootFindErr::TargetNotBracketed(f_upper_bound, target).into());
    }

    let mut lower_bound = lower_bound;
    let mut upper_bound = upper_bound;
    for _ in 0..MAX_ITERATIONS {
        if upper_bound - lower_bound <= tol {
            return Ok(upper_bound);
        }
        let x = (lower_bound + upper_bound) / 2.;
        if f(x) >= target {
            upper_bound = x;
        } else {
            lower_bound = x;
        }
    }
    Err(RootFindErr::FailedToConverge(MAX_ITERATIONS).into())
}
