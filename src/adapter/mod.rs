// src/adapter/mod.rs
// Inbound adapters exposing the use cases
pub mod http;
