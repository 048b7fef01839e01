use std::sync::Arc;

use serde::Serialize;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, error, warn};

use crate::matching::format::format_address;
use crate::wallet::WalletConnector;

#[derive(Debug, Clone, Default)]
struct SessionState {
    account: Option<String>,
    connecting: bool,
    error: Option<String>,
    /// Bumped by `disconnect`; a connect started under an older generation
    /// is discarded when it completes.
    generation: u64,
}

/// What the UI needs to decide which views to show.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletStatus {
    pub available: bool,
    pub connected: bool,
    pub connecting: bool,
    pub account: Option<String>,
    pub short_account: Option<String>,
    pub error: Option<String>,
}

/// Connected-account state over a `WalletConnector`. Connection failures are
/// recorded in `error` rather than returned.
///
/// The connector call runs in its own task holding `in_flight`, so it always
/// completes and clears `connecting` even when the request that started it is
/// dropped.
pub struct WalletSession {
    connector: Arc<dyn WalletConnector>,
    state: Arc<RwLock<SessionState>>,
    in_flight: Arc<Mutex<()>>,
}

impl WalletSession {
    pub fn new(connector: Arc<dyn WalletConnector>) -> Self {
        Self {
            connector,
            state: Arc::new(RwLock::new(SessionState::default())),
            in_flight: Arc::new(Mutex::new(())),
        }
    }

    pub async fn status(&self) -> WalletStatus {
        let state = self.state.read().await;
        WalletStatus {
            available: self.connector.is_available(),
            connected: state.account.is_some(),
            connecting: state.connecting,
            account: state.account.clone(),
            short_account: state.account.as_deref().map(format_address),
            error: state.error.clone(),
        }
    }

    /// Connects the wallet. A call made while another connect is in flight
    /// does not start a second one; it waits for that one and reports its
    /// outcome.
    pub async fn connect(&self) -> WalletStatus {
        let permit = match self.in_flight.clone().try_lock_owned() {
            Ok(permit) => permit,
            Err(_) => {
                debug!("Wallet connect already in flight, waiting for it");
                let _settled = self.in_flight.lock().await;
                return self.status().await;
            }
        };

        let generation = {
            let mut state = self.state.write().await;
            state.connecting = true;
            state.error = None;
            state.generation
        };

        let connector = self.connector.clone();
        let shared = self.state.clone();
        let task = tokio::spawn(async move {
            let _permit = permit;
            let result = connector.connect().await;

            let mut state = shared.write().await;
            if state.generation != generation {
                debug!("Discarding wallet connect superseded by disconnect");
                return;
            }
            state.connecting = false;
            match result {
                Ok(account) => state.account = Some(account.address),
                Err(e) => {
                    warn!("Wallet connect failed: {e}");
                    state.error = Some(e.to_string());
                }
            }
        });

        if let Err(e) = task.await {
            error!("Wallet connect task failed: {e}");
            let mut state = self.state.write().await;
            if state.generation == generation {
                state.connecting = false;
                state.error = Some("Wallet connect failed unexpectedly".to_string());
            }
        }

        self.status().await
    }

    /// Clears the account and abandons any connect still in flight.
    pub async fn disconnect(&self) -> WalletStatus {
        {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.account = None;
            state.connecting = false;
        }
        self.connector.disconnect().await;
        self.status().await
    }

    /// Address of the connected account, if any.
    pub async fn account(&self) -> Option<String> {
        self.state.read().await.account.clone()
    }
}
