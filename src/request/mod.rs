//----------------------------------------
// request mod
//----------------------------------------
pub mod handle;
pub mod types;
