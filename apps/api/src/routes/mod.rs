pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::matching::handlers as jobs;
use crate::profile::handlers as profile;
use crate::state::AppState;
use crate::wallet::handlers as wallet;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job board + suggestions
        .route("/api/v1/jobs", get(jobs::handle_list_jobs))
        .route("/api/v1/jobs/suggested", get(jobs::handle_suggested_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .route("/api/v1/jobs/:id/applications", post(jobs::handle_apply))
        .route("/api/v1/matches/score", post(jobs::handle_score_match))
        // Profile (wallet-gated)
        .route(
            "/api/v1/profile/:address",
            get(profile::handle_get_profile).put(profile::handle_update_profile),
        )
        .route(
            "/api/v1/profile/:address/skills",
            get(profile::handle_list_skills).post(profile::handle_add_skill),
        )
        .route(
            "/api/v1/profile/:address/skills/summary",
            get(profile::handle_skill_summary),
        )
        .route(
            "/api/v1/profile/:address/skills/:skill_id",
            delete(profile::handle_delete_skill),
        )
        .route(
            "/api/v1/profile/:address/endorsements",
            get(profile::handle_list_endorsements),
        )
        .route("/api/v1/endorsements", post(profile::handle_add_endorsement))
        .route(
            "/api/v1/profile/:address/reputation",
            get(profile::handle_reputation),
        )
        .route(
            "/api/v1/profile/:address/current-jobs",
            get(profile::handle_current_jobs),
        )
        .route(
            "/api/v1/profile/:address/current-jobs/:job_id/submissions",
            post(profile::handle_submit_work),
        )
        // Wallet
        .route("/api/v1/wallet", get(wallet::handle_wallet_status))
        .route("/api/v1/wallet/connect", post(wallet::handle_wallet_connect))
        .route(
            "/api/v1/wallet/disconnect",
            post(wallet::handle_wallet_disconnect),
        )
        .with_state(state)
}
