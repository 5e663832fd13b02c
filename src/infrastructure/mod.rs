// src/infrastructure/mod.rs
pub mod database;
