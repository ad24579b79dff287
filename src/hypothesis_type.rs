use serde::{Deserialize, Serialize};

/// Alternative hypothesis, stated for group B (treatment) against group A
/// (control)
#[derive(Default, Debug, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisType {
    #[default]
    NotEqual,
    TrtGreater,
    TrtLess,
}

impl HypothesisType {
    pub fn is_two_sided(&self) -> bool {
        *self == HypothesisType::NotEqual
    }

    /// Probability mass of the rejection region that sits in each tail
    pub fn tail_alpha(&self, alpha: f64) -> f64 {
        if self.is_two_sided() { alpha / 2. } else { alpha }
    }
}
