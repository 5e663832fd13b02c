// src/application/mod.rs
pub mod dto;
pub mod usecase;
