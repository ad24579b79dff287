//----------------------------------------
// significance mod
//----------------------------------------
pub mod error;
pub mod evaluate;
pub mod types;
