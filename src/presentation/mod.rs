// src/presentation/mod.rs
pub mod http;
