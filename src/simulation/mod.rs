//----------------------------------------
// simulation mod
//----------------------------------------
pub mod ab_sim;
pub mod types;
