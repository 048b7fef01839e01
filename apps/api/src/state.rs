use std::sync::Arc;

use crate::config::Config;
use crate::repository::{JobRepository, ProfileRepository, Repositories, SkillRepository};
use crate::wallet::session::WalletSession;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub skills: Arc<dyn SkillRepository>,
    pub jobs: Arc<dyn JobRepository>,
    pub profiles: Arc<dyn ProfileRepository>,
    /// Wallet connection for this service instance.
    pub wallet: Arc<WalletSession>,
}

impl AppState {
    pub fn new(config: Config, repositories: Repositories, wallet: WalletSession) -> Self {
        Self {
            config,
            skills: repositories.skills,
            jobs: repositories.jobs,
            profiles: repositories.profiles,
            wallet: Arc::new(wallet),
        }
    }
}

#[cfg(test)]
pub fn test_state(config: Config) -> AppState {
    use crate::repository::memory::InMemoryStore;
    use crate::repository::seed;
    use crate::wallet::lace::{FixedAddressProvider, LaceConnector};

    let connector = LaceConnector::new(Some(Arc::new(FixedAddressProvider::new(
        seed::DEMO_ADDRESS,
    ))));
    AppState::new(
        config,
        Repositories::shared(Arc::new(InMemoryStore::seeded())),
        WalletSession::new(Arc::new(connector)),
    )
}
