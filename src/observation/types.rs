//----------------------------------------
// observation mod types
//----------------------------------------
use serde::{Deserialize, Serialize};

use crate::error::AbcomputeErr;
use crate::observation::error::InvalidInputError;

/// Observed traffic for one variant of an experiment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupObservation {
    pub visitors: u64,
    pub conversions: u64,
}

impl GroupObservation {
    pub fn new(visitors: u64, conversions: u64) -> Result<Self, AbcomputeErr> {
        let obs = GroupObservation {
            visitors,
            conversions,
        };
        obs.validate()?;
        Ok(obs)
    }

    /// Values built through serde skip `new`, so every operation re-checks
    pub fn validate(&self) -> Result<(), AbcomputeErr> {
        if self.visitors == 0 {
            return Err(InvalidInputError::NonPositiveVisitors(self.visitors).into());
        }
        if self.conversions > self.visitors {
            return Err(InvalidInputError::ConversionsExceedVisitors {
                conversions: self.conversions,
                visitors: self.visitors,
            }
            .into());
        }
        Ok(())
    }

    /// None when there are no visitors
    pub fn conversion_rate(&self) -> Option<f64> {
        match self.visitors {
            0 => None,
            n => Some(self.conversions as f64 / n as f64),
        }
    }
}
