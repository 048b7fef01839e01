use axum::{extract::State, Json};

use crate::state::AppState;
use crate::wallet::session::WalletStatus;

/// GET /api/v1/wallet
pub async fn handle_wallet_status(State(state): State<AppState>) -> Json<WalletStatus> {
    Json(state.wallet.status().await)
}

/// POST /api/v1/wallet/connect
///
/// Always 200: a failed connect is reported in `error`, like the UI shows it.
pub async fn handle_wallet_connect(State(state): State<AppState>) -> Json<WalletStatus> {
    Json(state.wallet.connect().await)
}

/// POST /api/v1/wallet/disconnect
pub async fn handle_wallet_disconnect(State(state): State<AppState>) -> Json<WalletStatus> {
    Json(state.wallet.disconnect().await)
}
