//! Presentation state for CEP lookup
//!
//! Holds the transient address/loading/error tuple a form binds to, behind a
//! `watch` channel so consumers observe every transition. One handle owns
//! one state instance; nothing else writes to it.

use crate::services::AddressLookup;
use crate::types::{clean_cep, Address};
use futures::FutureExt;
use log::{debug, error};
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tokio::sync::watch;

/// Fallback message when the lookup future itself faults.
const UNEXPECTED_LOOKUP_ERROR: &str = "Erro inesperado ao buscar CEP";

/// Observable state of one lookup consumer.
///
/// After any settled call exactly one of `address` and `error` is set, never
/// both. `loading` is true only between call start and settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CepUiState {
    pub address: Option<Address>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Input observed by the auto-fetch watcher.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CepInput {
    pub value: String,
    pub enabled: bool,
}

/// State owner for one consuming UI unit.
///
/// Created on mount, dropped on unmount; instances share nothing, so no
/// locking is involved. The generic fault path exists for lookup
/// implementations injected behind the trait: `CepService` itself only
/// returns classified errors.
pub struct CepLookupHandle {
    lookup: Arc<dyn AddressLookup>,
    state: watch::Sender<CepUiState>,
}

impl CepLookupHandle {
    pub fn new(lookup: Arc<dyn AddressLookup>) -> Self {
        let (state, _) = watch::channel(CepUiState::default());
        Self { lookup, state }
    }

    /// Subscribe to state transitions.
    pub fn subscribe(&self) -> watch::Receiver<CepUiState> {
        self.state.subscribe()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> CepUiState {
        self.state.borrow().clone()
    }

    /// Run a lookup and settle the state with exactly one of address/error.
    pub async fn fetch_address(&self, raw_cep: &str) {
        self.state.send_modify(|s| {
            s.error = None;
            s.address = None;
            s.loading = true;
        });

        let outcome = AssertUnwindSafe(self.lookup.fetch_address(raw_cep))
            .catch_unwind()
            .await;

        self.state.send_modify(|s| {
            match outcome {
                Ok(Ok(address)) => {
                    debug!("CEP lookup settled with address for {}", address.cep);
                    s.address = Some(address);
                }
                Ok(Err(err)) => s.error = Some(err.to_string()),
                Err(_) => {
                    error!("CEP lookup faulted unexpectedly");
                    s.error = Some(UNEXPECTED_LOOKUP_ERROR.to_string());
                }
            }
            s.loading = false;
        });
    }

    /// Clear address and error, leaving `loading` untouched.
    pub fn clear_address(&self) {
        self.state.send_modify(|s| {
            s.address = None;
            s.error = None;
        });
    }

    /// Clear only the error.
    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.error = None);
    }
}

/// Auto-fetch loop: re-evaluates once at start and on every input change.
///
/// While `enabled` and the value cleans to 8 digits the current value is
/// fetched; any other combination clears the address. Runs until every
/// input sender is dropped.
pub async fn watch_cep_input(handle: Arc<CepLookupHandle>, mut input: watch::Receiver<CepInput>) {
    loop {
        let CepInput { value, enabled } = input.borrow_and_update().clone();

        if enabled && clean_cep(&value).len() == 8 {
            handle.fetch_address(&value).await;
        } else {
            handle.clear_address();
        }

        if input.changed().await.is_err() {
            debug!("CEP input channel closed, stopping watcher");
            break;
        }
    }
}
