//! Address lookup service
//!
//! Validates raw CEP input, runs the ViaCEP call and classifies the outcome
//! into the closed `CepError` set. Expected failures come back as values;
//! nothing in this pipeline panics or retries.

use crate::clients::ViaCepClient;
use crate::config::CepConfig;
use crate::error::{CepError, Result};
use crate::types::{clean_cep, is_valid_cep_format, Address};
use async_trait::async_trait;
use futures::future::join_all;
use log::debug;

/// Lookup seam consumed by the presentation layer.
///
/// `fetch_many` is provided: one independent `fetch_address` per input,
/// raced concurrently, results returned in input order regardless of which
/// settles first.
#[async_trait]
pub trait AddressLookup: Send + Sync {
    /// Resolve a raw, user-supplied CEP string into a normalized address.
    async fn fetch_address(&self, raw_cep: &str) -> Result<Address>;

    /// Resolve several CEPs concurrently, preserving input order.
    async fn fetch_many(&self, raw_ceps: &[String]) -> Vec<Result<Address>> {
        join_all(raw_ceps.iter().map(|cep| self.fetch_address(cep))).await
    }
}

pub struct CepService {
    client: ViaCepClient,
}

impl CepService {
    pub fn new(config: CepConfig) -> Self {
        Self {
            client: ViaCepClient::new(&config),
        }
    }
}

impl Default for CepService {
    fn default() -> Self {
        Self::new(CepConfig::default())
    }
}

#[async_trait]
impl AddressLookup for CepService {
    async fn fetch_address(&self, raw_cep: &str) -> Result<Address> {
        // Malformed input never reaches the network
        if !is_valid_cep_format(raw_cep) {
            return Err(CepError::InvalidFormat);
        }

        let clean = clean_cep(raw_cep);
        let response = self.client.lookup(&clean).await?;

        if response.erro {
            debug!("CEP {} not found upstream", clean);
            return Err(CepError::NotFound);
        }

        if !response.has_required_fields() {
            return Err(CepError::InvalidResponse);
        }

        Ok(response.into_address())
    }
}
