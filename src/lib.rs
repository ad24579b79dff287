//----------------------------------------
// Root lib
//----------------------------------------
//! Utility functions for analysing and planning A/B experiments on
//! conversion rates: the pooled two-proportion z-test, per-group sample
//! sizes, achieved power, minimum detectable effects, and Monte Carlo checks
//! of a design's rejection rate.

/// This module houses the public API
pub mod compute;
/// This module contains error types
pub mod error;
mod hypothesis_type;
mod normal;
mod observation;
mod request;
mod sample_size;
mod significance;
mod simulation;
mod util;
