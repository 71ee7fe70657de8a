//! Client modules for external services

pub mod viacep;

// Re-export client types
pub use viacep::{ViaCepClient, ViaCepResponse};
