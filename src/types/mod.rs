//! Tipos compartilhados do metalingo.

pub mod config;
pub mod errors;
