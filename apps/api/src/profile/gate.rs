use axum::http::HeaderMap;

use crate::errors::AppError;
use crate::state::AppState;
use crate::wallet::validate_address;

/// Header carrying the caller's connected wallet address.
pub const WALLET_HEADER: &str = "x-wallet-address";

/// Checks `address` is well-formed and, when `REQUIRE_WALLET` is on, that the
/// caller's connected wallet is that address.
pub fn authorize(state: &AppState, headers: &HeaderMap, address: &str) -> Result<(), AppError> {
    validate_address(address)?;

    if !state.config.require_wallet {
        return Ok(());
    }

    let caller = headers
        .get(WALLET_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::Unauthorized)?;

    if caller.eq_ignore_ascii_case(address) {
        Ok(())
    } else {
        tracing::warn!("Wallet {caller} denied access to profile {address}");
        Err(AppError::Unauthorized)
    }
}
