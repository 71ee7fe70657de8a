//! Common types and CEP string helpers

use serde::{Deserialize, Serialize};

/// Normalized address produced by a successful CEP lookup.
///
/// `number` is part of the address shape consumed by the registration forms
/// but is never filled in by the lookup itself; callers set it from user
/// input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub street: String,
    pub complement: Option<String>,
    pub district: String,
    pub city: String,
    pub uf: String,
    pub number: Option<String>,
}

/// Strips everything but ASCII digits from a raw CEP string.
pub fn clean_cep(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// A CEP is well-formed when exactly 8 digits remain after cleaning.
pub fn is_valid_cep_format(raw: &str) -> bool {
    clean_cep(raw).len() == 8
}

/// Formats a CEP as `NNNNN-NNN`. Inputs that do not clean to 8 digits are
/// returned as their cleaned digit string.
pub fn format_cep(raw: &str) -> String {
    let clean = clean_cep(raw);
    if clean.len() == 8 {
        format!("{}-{}", &clean[..5], &clean[5..])
    } else {
        clean
    }
}
