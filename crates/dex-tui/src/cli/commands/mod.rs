pub mod config;
pub mod creature;
