// src/services/mod.rs
pub mod advisor;
pub mod weather;
