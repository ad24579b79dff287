//----------------------------------------
// significance errors
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DegenerateInputError {
    #[error("pooled conversion rate is {0}, so the z statistic has zero variance")]
    ZeroVariance(f64),
}

impl From<DegenerateInputError> for AbcomputeErr {
    fn from(err: DegenerateInputError) -> AbcomputeErr {
        AbcomputeErr::DegenerateInput(err)
    }
}
