//----------------------------------------
// sample size mod
//----------------------------------------
pub mod estimate;
pub mod mde;
pub mod power;
pub mod types;
