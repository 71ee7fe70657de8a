//! CEP Core Library
//!
//! Address lookup for Brazilian postal codes (CEP) against the ViaCEP API:
//! input validation, a time-bounded HTTP fetch, outcome classification into
//! a closed error set, and an observable presentation state for consuming
//! UI layers.

pub mod clients;
pub mod config;
pub mod error;
pub mod services;
pub mod state;
pub mod types;

// Re-export main types for easy access
pub use config::CepConfig;
pub use error::{CepError, Result};
pub use types::{clean_cep, format_cep, is_valid_cep_format, Address};

// Re-export client types
pub use clients::{ViaCepClient, ViaCepResponse};

// Re-export service types
pub use services::{AddressLookup, CepService};

// Re-export presentation state
pub use state::{watch_cep_input, CepInput, CepLookupHandle, CepUiState};
