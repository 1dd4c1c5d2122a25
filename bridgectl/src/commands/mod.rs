//! Command implementations

pub mod analyze;
pub mod health;
pub mod serve;
