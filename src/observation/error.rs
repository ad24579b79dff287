//----------------------------------------
// observation errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum InvalidInputError {
    #[error("visitor count must be positive; got {0}")]
    NonPositiveVisitors(u64),
    #[error("conversions ({conversions}) exceed visitors ({visitors})")]
    ConversionsExceedVisitors { conversions: u64, visitors: u64 },
    #[error("{name} should be in (0, 1); got {value}")]
    ProbabilityOutOfRange { name: &'static str, value: f64 },
    #[error("minimum detectable effect must be positive; got {0}")]
    NonPositiveEffect(f64),
    #[error("target rate implied by effect should be in (0, 1); got {0}")]
    EffectOutOfRange(f64),
    #[error("{name} must be finite; got {value}")]
    NonFiniteValue { name: &'static str, value: f64 },
    #[error("required sample size ({0}) is too large to represent")]
    SampleSizeTooLarge(f64),
    #[error(
        "power ({power}) must exceed the rejection rate with no effect ({null_power})"
    )]
    PowerNotAboveNull { power: f64, null_power: f64 },
    #[error("sample size per group must be positive")]
    ZeroSampleSize,
    #[error("number of simulations must be positive")]
    NoSimulations,
}

impl From<InvalidInputError> for AbcomputeErr {
    fn from(err: InvalidInputError) -> AbcomputeErr {
        AbcomputeErr::InvalidInput(err)
    }
}
