//! Helpers shared by the 2025 days

pub mod dp_cache;
pub mod grid;
pub mod linear_system;
