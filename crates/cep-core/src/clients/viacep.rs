//! ViaCEP client for postal code resolution

use crate::config::CepConfig;
use crate::error::{CepError, Result};
use crate::types::Address;
use log::{debug, warn};
use reqwest::Client as HttpClient;
use serde::Deserialize;
use std::time::Duration;

/// Raw response body of `GET <base>/<cep>/json/`.
///
/// Every field is optional on the wire: a lookup for an unknown CEP returns
/// only `{"erro": true}`, and ViaCEP omits fields it has no data for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ViaCepResponse {
    pub cep: Option<String>,
    pub logradouro: Option<String>,
    pub complemento: Option<String>,
    pub bairro: Option<String>,
    pub localidade: Option<String>,
    pub uf: Option<String>,
    #[serde(default)]
    pub erro: bool,
}

fn non_empty(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.is_empty())
}

impl ViaCepResponse {
    /// True when all fields the normalized address requires are present and
    /// non-empty. `complemento` is optional and not checked.
    pub fn has_required_fields(&self) -> bool {
        non_empty(&self.cep)
            && non_empty(&self.logradouro)
            && non_empty(&self.bairro)
            && non_empty(&self.localidade)
            && non_empty(&self.uf)
    }

    /// Field-for-field mapping into the internal address model. Only valid
    /// after `has_required_fields`; `number` is left unset.
    pub fn into_address(self) -> Address {
        Address {
            cep: self.cep.unwrap_or_default(),
            street: self.logradouro.unwrap_or_default(),
            complement: self.complemento.filter(|c| !c.is_empty()),
            district: self.bairro.unwrap_or_default(),
            city: self.localidade.unwrap_or_default(),
            uf: self.uf.unwrap_or_default(),
            number: None,
        }
    }
}

pub struct ViaCepClient {
    base_url: String,
    http_client: HttpClient,
}

impl ViaCepClient {
    pub fn new(config: &CepConfig) -> Self {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.clone(),
            http_client,
        }
    }

    /// Fetch the raw ViaCEP record for an already-cleaned 8-digit CEP.
    ///
    /// Transport faults, the timeout abort, non-success statuses and bodies
    /// that fail to decode all classify as `NetworkError`; shape problems in
    /// a decoded body are for the caller to judge.
    pub async fn lookup(&self, clean_cep: &str) -> Result<ViaCepResponse> {
        let url = format!("{}/{}/json/", self.base_url, clean_cep);
        debug!("Fetching CEP from: {}", url);

        let response = self
            .http_client
            .get(&url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                warn!("CEP request failed: {}", e);
                CepError::NetworkError
            })?;

        let status = response.status();
        if !status.is_success() {
            warn!("CEP request returned status {}", status);
            return Err(CepError::NetworkError);
        }

        response.json::<ViaCepResponse>().await.map_err(|e| {
            warn!("Failed to decode CEP response body: {}", e);
            CepError::NetworkError
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_response() -> ViaCepResponse {
        ViaCepResponse {
            cep: Some("01310-100".to_string()),
            logradouro: Some("Avenida Paulista".to_string()),
            complemento: Some("de 612 a 1510 - lado par".to_string()),
            bairro: Some("Bela Vista".to_string()),
            localidade: Some("São Paulo".to_string()),
            uf: Some("SP".to_string()),
            erro: false,
        }
    }

    #[test]
    fn required_fields_present() {
        assert!(full_response().has_required_fields());
    }

    #[test]
    fn missing_or_empty_required_field_is_detected() {
        let mut missing = full_response();
        missing.bairro = None;
        assert!(!missing.has_required_fields());

        let mut empty = full_response();
        empty.uf = Some(String::new());
        assert!(!empty.has_required_fields());
    }

    #[test]
    fn maps_field_for_field_without_number() {
        let address = full_response().into_address();
        assert_eq!(address.cep, "01310-100");
        assert_eq!(address.street, "Avenida Paulista");
        assert_eq!(address.complement.as_deref(), Some("de 612 a 1510 - lado par"));
        assert_eq!(address.district, "Bela Vista");
        assert_eq!(address.city, "São Paulo");
        assert_eq!(address.uf, "SP");
        assert_eq!(address.number, None);
    }

    #[test]
    fn empty_complement_maps_to_none() {
        let mut response = full_response();
        response.complemento = Some(String::new());
        assert_eq!(response.into_address().complement, None);
    }

    #[test]
    fn decodes_not_found_body() {
        let response: ViaCepResponse = serde_json::from_str(r#"{"erro": true}"#).unwrap();
        assert!(response.erro);
        assert!(!response.has_required_fields());
    }
}
