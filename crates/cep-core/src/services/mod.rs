//! Service modules for lookup logic

pub mod lookup;

// Re-export service types
pub use lookup::{AddressLookup, CepService};
