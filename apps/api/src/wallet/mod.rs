//! Wallet capability seam.
//!
//! Callers ask a `WalletConnector` whether a wallet is present and to connect
//! or disconnect it, instead of probing for a browser-injected object. The
//! Midnight Lace flow lives in `lace`; `session` tracks the connected account.

pub mod handlers;
pub mod lace;
pub mod session;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::matching::format::format_address;

const MAX_ADDRESS_LEN: usize = 128;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("Midnight Lace wallet not detected")]
    NotDetected,

    #[error("Incompatible wallet connector API version: {0} (expected 1.x)")]
    IncompatibleVersion(String),

    #[error("Connected but no address returned from wallet state")]
    MissingAddress,

    #[error("Wallet request failed: {0}")]
    Rejected(String),

    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WalletAccount {
    pub address: String,
    pub short_address: String,
}

impl WalletAccount {
    pub fn new(address: String) -> Self {
        Self {
            short_address: format_address(&address),
            address,
        }
    }
}

#[async_trait]
pub trait WalletConnector: Send + Sync {
    /// Whether a wallet can be reached at all.
    fn is_available(&self) -> bool;

    async fn connect(&self) -> Result<WalletAccount, WalletError>;

    /// Drops any handle obtained by `connect`. Idempotent.
    async fn disconnect(&self);
}

/// Accepts Ethereum-style hex and Midnight bech32 addresses.
pub fn validate_address(address: &str) -> Result<(), WalletError> {
    let ok = !address.is_empty()
        && address.len() <= MAX_ADDRESS_LEN
        && address
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if ok {
        Ok(())
    } else {
        Err(WalletError::InvalidAddress(address.chars().take(32).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_hex_and_bech32() {
        assert!(validate_address("0x1234567890123456789012345678901234567890").is_ok());
        assert!(validate_address("mn_shield-addr_test1qqpsz9w8").is_ok());
    }

    #[test]
    fn test_rejects_path_tricks_and_empty() {
        assert!(validate_address("").is_err());
        assert!(validate_address("../admin").is_err());
        assert!(validate_address("0xabc?x=1").is_err());
        assert!(validate_address(&"a".repeat(129)).is_err());
    }

    #[test]
    fn test_account_short_address() {
        let account = WalletAccount::new("0x1234567890123456789012345678901234567890".to_string());
        assert_eq!(account.short_address, "0x1234...7890");
    }
}
