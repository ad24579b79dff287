//----------------------------------------
// Crate error type
//----------------------------------------
pub use crate::normal::error::NormalDistErr;
pub use crate::observation::error::InvalidInputError;
pub use crate::significance::error::DegenerateInputError;
pub use crate::util::root_find::RootFindErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("invalid input: {0}")]
    InvalidInput(InvalidInputError),
    #[error("degenerate input: {0}")]
    DegenerateInput(DegenerateInputError),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
    #[error("while searching for root: {0}")]
    RootFind(RootFindErr),
}

impl AbcomputeErr {
    /// True for precondition violations, which retrying can never fix
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, AbcomputeErr::InvalidInput(_))
    }
}
