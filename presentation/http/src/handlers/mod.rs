//! HTTP request handlers

pub mod bridges;
pub mod health;
