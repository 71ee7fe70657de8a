//! Error types for CEP lookup

use thiserror::Error;

/// Failure kinds of a CEP lookup.
///
/// The set is closed and flat: the service classifies every expected failure
/// into exactly one of these, it never wraps an underlying error. Display
/// strings are the fixed user-facing messages shown by the app.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CepError {
    #[error("CEP deve conter exatamente 8 dígitos")]
    InvalidFormat,

    #[error("CEP não encontrado")]
    NotFound,

    #[error("Erro de conexão. Verifique sua internet")]
    NetworkError,

    #[error("Resposta inválida do servidor")]
    InvalidResponse,
}

/// Result type for CEP lookup operations
pub type Result<T> = std::result::Result<T, CepError>;
