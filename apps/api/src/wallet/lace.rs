use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use crate::wallet::{validate_address, WalletAccount, WalletConnector, WalletError};

/// Snapshot returned by the wallet after it is enabled.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LaceWalletState {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub coin_public_key: Option<String>,
    #[serde(default)]
    pub encryption_public_key: Option<String>,
}

/// An enabled wallet handle.
#[async_trait]
pub trait LaceWallet: Send + Sync {
    async fn state(&self) -> Result<LaceWalletState, WalletError>;
}

/// The injected Midnight Lace connector object.
#[async_trait]
pub trait LaceProvider: Send + Sync {
    fn api_version(&self) -> &str;

    async fn is_enabled(&self) -> Result<bool, WalletError>;

    async fn enable(&self) -> Result<Arc<dyn LaceWallet>, WalletError>;

    async fn service_uri_config(&self) -> Result<Map<String, Value>, WalletError>;
}

/// Connector API versions 1.x are supported.
pub fn has_compatible_version(version: &str) -> bool {
    version.starts_with("1.")
}

/// `WalletConnector` over an optional Lace provider. Without a provider the
/// wallet is reported unavailable.
pub struct LaceConnector {
    provider: Option<Arc<dyn LaceProvider>>,
    wallet: Mutex<Option<Arc<dyn LaceWallet>>>,
}

impl LaceConnector {
    pub fn new(provider: Option<Arc<dyn LaceProvider>>) -> Self {
        if provider.is_none() {
            warn!("No Midnight Lace provider configured; wallet features are unavailable");
        }
        Self {
            provider,
            wallet: Mutex::new(None),
        }
    }
}

#[async_trait]
impl WalletConnector for LaceConnector {
    fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    async fn connect(&self) -> Result<WalletAccount, WalletError> {
        let provider = self.provider.as_ref().ok_or_else(|| {
            error!("Wallet connect aborted: provider not detected");
            WalletError::NotDetected
        })?;

        let version = provider.api_version();
        if !has_compatible_version(version) {
            error!("Wallet version check failed: {version}");
            return Err(WalletError::IncompatibleVersion(version.to_string()));
        }

        // Presence check only; a failure here does not block enabling.
        if let Err(e) = provider.is_enabled().await {
            debug!("is_enabled check failed: {e}");
        }

        let wallet = provider.enable().await?;
        *self.wallet.lock().await = Some(wallet.clone());

        match provider.service_uri_config().await {
            Ok(uris) => debug!("Wallet service URIs: {uris:?}"),
            Err(e) => debug!("service_uri_config unavailable: {e}"),
        }

        let address = wallet
            .state()
            .await?
            .address
            .filter(|a| !a.is_empty())
            .ok_or(WalletError::MissingAddress)?;
        validate_address(&address)?;

        info!("Wallet connected: {address}");
        Ok(WalletAccount::new(address))
    }

    async fn disconnect(&self) {
        // Lace exposes no disconnect call; dropping the handle is all there is.
        self.wallet.lock().await.take();
        info!("Wallet disconnected");
    }
}

/// Provider that always yields one configured address. Used for local runs
/// via `WALLET_ADDRESS`.
pub struct FixedAddressProvider {
    address: String,
    api_version: String,
}

impl FixedAddressProvider {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            api_version: "1.0.0".to_string(),
        }
    }

    #[cfg(test)]
    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = version.into();
        self
    }
}

struct FixedWallet {
    address: String,
}

#[async_trait]
impl LaceWallet for FixedWallet {
    async fn state(&self) -> Result<LaceWalletState, WalletError> {
        Ok(LaceWalletState {
            address: Some(self.address.clone()),
            ..LaceWalletState::default()
        })
    }
}

#[async_trait]
impl LaceProvider for FixedAddressProvider {
    fn api_version(&self) -> &str {
        &self.api_version
    }

    async fn is_enabled(&self) -> Result<bool, WalletError> {
        Ok(true)
    }

    async fn enable(&self) -> Result<Arc<dyn LaceWallet>, WalletError> {
        Ok(Arc::new(FixedWallet {
            address: self.address.clone(),
        }))
    }

    async fn service_uri_config(&self) -> Result<Map<String, Value>, WalletError> {
        Ok(Map::new())
    }
}
